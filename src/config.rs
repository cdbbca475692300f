use crate::error::{AppError, AppResult, ConfigError};
use crate::infrastructure::Chord;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;

/// 默认配置文件名（位于当前工作目录）
pub const DEFAULT_CONFIG_FILE: &str = "print_bot.toml";

/// 日志中使用的程序名称
pub const DEFAULT_LOGGER_NAME: &str = concat!(
    "DWG Printer bot V. ",
    env!("CARGO_PKG_VERSION_MAJOR"),
    ".",
    env!("CARGO_PKG_VERSION_MINOR")
);

/// 程序配置
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 待打印图纸所在目录
    pub input_dir: PathBuf,
    /// 输入文件扩展名
    pub input_extension: String,
    /// 输出文件扩展名
    pub output_extension: String,
    /// CAD 程序进程名
    pub process_name: String,
    /// 打印对话框中选择 PDF 打印机所需输入的字符
    pub printer_selector: String,
    /// 打开打印对话框的快捷键
    pub print_hotkey: String,
    /// 关闭当前图纸的快捷键
    pub close_hotkey: String,
    /// 拒绝保存修改的按键
    pub decline_save_key: String,
    /// 弹出确认框前允许的严重错误数量
    pub error_threshold: usize,
    /// 运行日志文件
    pub log_file: PathBuf,
    /// 运行日志中的记录器名称
    pub logger_name: String,
    /// JSON 运行汇总输出路径
    pub summary_file: Option<PathBuf>,
    /// 是否显示详细日志
    pub verbose_logging: bool,
    /// 冷启动时轮询进程而不是盲等
    pub wait_for_process: bool,
    /// 各阶段等待时间
    pub timings: Timings,
}

/// 等待时间配置（毫秒）
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct Timings {
    /// CAD 已在运行时打开图纸后的等待
    pub warm_up_running_ms: u64,
    /// CAD 冷启动时的等待
    pub warm_up_cold_ms: u64,
    /// 选择打印机之后的等待
    pub after_printer_select_ms: u64,
    /// 输入文件名并确认之后的等待
    pub after_save_ms: u64,
    /// 每个文件结束后让 CAD 稳定下来的等待
    pub settle_ms: u64,
    /// 每次按键动作之后的停顿
    pub key_pause_ms: u64,
    /// 轮询进程的间隔
    pub process_poll_ms: u64,
}

impl Default for Timings {
    fn default() -> Self {
        Self {
            warm_up_running_ms: 5_000,
            warm_up_cold_ms: 30_000,
            after_printer_select_ms: 1_000,
            after_save_ms: 3_000,
            settle_ms: 1_000,
            key_pause_ms: 500,
            process_poll_ms: 500,
        }
    }
}

impl Timings {
    pub fn warm_up_running(&self) -> Duration {
        Duration::from_millis(self.warm_up_running_ms)
    }

    pub fn warm_up_cold(&self) -> Duration {
        Duration::from_millis(self.warm_up_cold_ms)
    }

    pub fn after_printer_select(&self) -> Duration {
        Duration::from_millis(self.after_printer_select_ms)
    }

    pub fn after_save(&self) -> Duration {
        Duration::from_millis(self.after_save_ms)
    }

    pub fn settle(&self) -> Duration {
        Duration::from_millis(self.settle_ms)
    }

    pub fn key_pause(&self) -> Duration {
        Duration::from_millis(self.key_pause_ms)
    }

    pub fn process_poll(&self) -> Duration {
        Duration::from_millis(self.process_poll_ms.max(1))
    }

    /// 所有等待均为零，测试用
    pub fn instant() -> Self {
        Self {
            warm_up_running_ms: 0,
            warm_up_cold_ms: 0,
            after_printer_select_ms: 0,
            after_save_ms: 0,
            settle_ms: 0,
            key_pause_ms: 0,
            process_poll_ms: 1,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input_dir: PathBuf::from("."),
            input_extension: "dwg".to_string(),
            output_extension: "pdf".to_string(),
            process_name: "acad.exe".to_string(),
            printer_selector: "mi".to_string(),
            print_hotkey: "ctrl+p".to_string(),
            close_hotkey: "ctrl+f4".to_string(),
            decline_save_key: "n".to_string(),
            error_threshold: 2,
            log_file: PathBuf::from("logfile.log"),
            logger_name: DEFAULT_LOGGER_NAME.to_string(),
            summary_file: None,
            verbose_logging: false,
            wait_for_process: false,
            timings: Timings::default(),
        }
    }
}

impl Config {
    /// 加载配置：配置文件（可选） + 环境变量覆盖，然后校验
    pub fn load() -> AppResult<Self> {
        let file_config = match std::env::var("PRINT_BOT_CONFIG") {
            Ok(path) => Some(Self::from_toml_file(Path::new(&path))?),
            Err(_) if Path::new(DEFAULT_CONFIG_FILE).exists() => {
                Some(Self::from_toml_file(Path::new(DEFAULT_CONFIG_FILE))?)
            }
            Err(_) => None,
        };

        let config = file_config.unwrap_or_default().with_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// 从 TOML 文件读取配置
    pub fn from_toml_file(path: &Path) -> AppResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| {
            crate::error::FileError::ReadFailed {
                path: path.to_path_buf(),
                source,
            }
        })?;
        Self::from_toml_str(&content, path)
    }

    /// 解析 TOML 文本，`origin` 仅用于错误信息
    pub fn from_toml_str(content: &str, origin: &Path) -> AppResult<Self> {
        toml::from_str(content).map_err(|source| {
            AppError::Config(ConfigError::TomlParseFailed {
                path: origin.to_path_buf(),
                source,
            })
        })
    }

    /// 用环境变量覆盖配置项
    pub fn with_env_overrides(self) -> AppResult<Self> {
        self.with_overrides(|key| std::env::var(key).ok())
    }

    fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> AppResult<Self> {
        if let Some(v) = lookup("INPUT_DIR") {
            self.input_dir = PathBuf::from(v);
        }
        if let Some(v) = lookup("INPUT_EXTENSION") {
            self.input_extension = v;
        }
        if let Some(v) = lookup("OUTPUT_EXTENSION") {
            self.output_extension = v;
        }
        if let Some(v) = lookup("PROCESS_NAME") {
            self.process_name = v;
        }
        if let Some(v) = lookup("PRINTER_SELECTOR") {
            self.printer_selector = v;
        }
        if let Some(v) = lookup("ERROR_THRESHOLD") {
            self.error_threshold = parse_env("ERROR_THRESHOLD", &v, "usize")?;
        }
        if let Some(v) = lookup("LOG_FILE") {
            self.log_file = PathBuf::from(v);
        }
        if let Some(v) = lookup("SUMMARY_FILE") {
            self.summary_file = Some(PathBuf::from(v));
        }
        if let Some(v) = lookup("VERBOSE_LOGGING") {
            self.verbose_logging = parse_env("VERBOSE_LOGGING", &v, "bool")?;
        }
        if let Some(v) = lookup("WAIT_FOR_PROCESS") {
            self.wait_for_process = parse_env("WAIT_FOR_PROCESS", &v, "bool")?;
        }
        Ok(self)
    }

    /// 校验配置
    pub fn validate(&self) -> AppResult<()> {
        for ext in [&self.input_extension, &self.output_extension] {
            if ext.is_empty() || ext.contains('.') {
                return Err(ConfigError::InvalidExtension(ext.clone()).into());
            }
        }
        if self.error_threshold == 0 {
            return Err(ConfigError::InvalidThreshold(self.error_threshold).into());
        }
        Chord::parse(&self.print_hotkey)?;
        Chord::parse(&self.close_hotkey)?;
        Chord::parse(&self.decline_save_key)?;
        Ok(())
    }
}

fn parse_env<T: FromStr>(var_name: &str, value: &str, expected_type: &str) -> AppResult<T> {
    value.trim().parse().map_err(|_| {
        AppError::Config(ConfigError::EnvVarParseFailed {
            var_name: var_name.to_string(),
            value: value.to_string(),
            expected_type: expected_type.to_string(),
        })
    })
}
