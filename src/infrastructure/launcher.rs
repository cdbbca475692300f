//! 系统默认程序启动器 - 基础设施层
//!
//! 用操作系统的"默认打开方式"打开文件，退出码 0 视为成功。

use crate::error::{AppResult, LaunchError};
use std::path::Path;
use tokio::process::Command;
use tracing::debug;

/// 用默认程序打开文件的能力
#[allow(async_fn_in_trait)]
pub trait Launcher {
    /// 打开文件，返回打开命令的退出码
    async fn open(&self, path: &Path) -> AppResult<i32>;
}

/// 调用系统打开命令的启动器
#[derive(Debug, Default, Clone)]
pub struct SystemLauncher;

impl SystemLauncher {
    pub fn new() -> Self {
        Self
    }

    fn command(path: &Path) -> Command {
        let mut cmd = if cfg!(windows) {
            // start 的第一个带引号参数是窗口标题
            let mut cmd = Command::new("cmd");
            cmd.args(["/C", "start", ""]);
            cmd
        } else if cfg!(target_os = "macos") {
            Command::new("open")
        } else {
            Command::new("xdg-open")
        };
        cmd.arg(path);
        cmd
    }
}

impl Launcher for SystemLauncher {
    async fn open(&self, path: &Path) -> AppResult<i32> {
        let mut cmd = Self::command(path);
        let program = cmd.as_std().get_program().to_string_lossy().to_string();
        debug!("执行打开命令: {} {}", program, path.display());

        let status = cmd.status().await.map_err(|source| LaunchError::SpawnFailed {
            program,
            path: path.to_path_buf(),
            source,
        })?;

        // 被信号终止时没有退出码
        Ok(status.code().unwrap_or(-1))
    }
}
