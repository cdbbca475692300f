use serde::Serialize;
use std::fmt;
use std::path::PathBuf;

/// 单个文件的处理结果
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PrintOutcome {
    /// 打印完成，输出文件已出现
    Printed,
    /// 输出文件在处理前就已存在
    AlreadyPrinted,
    /// 默认程序打开失败（不计入严重错误）
    LaunchFailed { exit_code: i32 },
    /// 按键序列执行完毕但输出文件不存在
    VerifyFailed,
    /// 处理过程中的意外错误
    Unexpected { message: String },
}

impl PrintOutcome {
    /// 是否计入严重错误
    pub fn is_critical(&self) -> bool {
        matches!(self, PrintOutcome::VerifyFailed)
    }

    /// 输出文件是否已就绪
    pub fn is_success(&self) -> bool {
        matches!(self, PrintOutcome::Printed | PrintOutcome::AlreadyPrinted)
    }

    /// 退出状态：只有校验失败为 1
    pub fn exit_status(&self) -> u8 {
        u8::from(self.is_critical())
    }
}

impl fmt::Display for PrintOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PrintOutcome::Printed => write!(f, "已打印"),
            PrintOutcome::AlreadyPrinted => write!(f, "已存在，跳过"),
            PrintOutcome::LaunchFailed { exit_code } => write!(f, "打开失败 (退出码 {})", exit_code),
            PrintOutcome::VerifyFailed => write!(f, "未生成输出文件"),
            PrintOutcome::Unexpected { message } => write!(f, "意外错误: {}", message),
        }
    }
}

/// 单个文件的处理记录
#[derive(Debug, Clone, Serialize)]
pub struct FileReport {
    pub file: PathBuf,
    pub outcome: PrintOutcome,
}

/// 整次运行的汇总
#[derive(Debug, Clone, Default, Serialize)]
pub struct RunSummary {
    pub started_at: String,
    pub ended_at: Option<String>,
    pub directory: PathBuf,
    pub reports: Vec<FileReport>,
    /// 操作员在确认框中选择了取消
    pub aborted: bool,
}

impl RunSummary {
    pub fn new(directory: PathBuf, started_at: String) -> Self {
        Self {
            started_at,
            directory,
            ..Default::default()
        }
    }

    pub fn push(&mut self, file: PathBuf, outcome: PrintOutcome) {
        self.reports.push(FileReport { file, outcome });
    }

    pub fn total(&self) -> usize {
        self.reports.len()
    }

    pub fn printed(&self) -> usize {
        self.count(|o| matches!(o, PrintOutcome::Printed))
    }

    pub fn already_printed(&self) -> usize {
        self.count(|o| matches!(o, PrintOutcome::AlreadyPrinted))
    }

    pub fn launch_failed(&self) -> usize {
        self.count(|o| matches!(o, PrintOutcome::LaunchFailed { .. }))
    }

    pub fn critical(&self) -> usize {
        self.count(PrintOutcome::is_critical)
    }

    pub fn unexpected(&self) -> usize {
        self.count(|o| matches!(o, PrintOutcome::Unexpected { .. }))
    }

    /// 没有得到输出文件的数量
    pub fn failed(&self) -> usize {
        self.total() - self.count(PrintOutcome::is_success)
    }

    fn count(&self, pred: impl Fn(&PrintOutcome) -> bool) -> usize {
        self.reports.iter().filter(|r| pred(&r.outcome)).count()
    }
}
