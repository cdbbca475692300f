//! 进程探测 - 基础设施层

use sysinfo::{ProcessesToUpdate, System};
use tracing::debug;

/// 查询某个进程是否在运行的能力
pub trait ProcessProbe {
    /// 进程名比较不区分大小写
    fn is_running(&mut self, process_name: &str) -> bool;
}

/// 基于 sysinfo 的进程探测
pub struct SysinfoProbe {
    system: System,
}

impl SysinfoProbe {
    pub fn new() -> Self {
        Self {
            system: System::new(),
        }
    }
}

impl Default for SysinfoProbe {
    fn default() -> Self {
        Self::new()
    }
}

impl ProcessProbe for SysinfoProbe {
    fn is_running(&mut self, process_name: &str) -> bool {
        self.system.refresh_processes(ProcessesToUpdate::All, true);
        let target = process_name.to_lowercase();
        let running = self
            .system
            .processes()
            .values()
            .any(|p| p.name().to_string_lossy().to_lowercase() == target);
        debug!("进程 {} 运行中: {}", process_name, running);
        running
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_process_is_not_running() {
        let mut probe = SysinfoProbe::new();
        assert!(!probe.is_running("definitely-not-a-real-process-4711.exe"));
    }
}
