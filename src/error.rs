use std::path::PathBuf;
use thiserror::Error;

/// 应用程序错误类型
#[derive(Debug, Error)]
pub enum AppError {
    /// 文件操作错误
    #[error("文件错误: {0}")]
    File(#[from] FileError),
    /// 配置错误
    #[error("配置错误: {0}")]
    Config(#[from] ConfigError),
    /// 键盘注入错误
    #[error("键盘注入错误: {0}")]
    Input(#[from] InputError),
    /// 启动外部程序错误
    #[error("启动错误: {0}")]
    Launch(#[from] LaunchError),
    /// 操作员交互错误
    #[error("交互错误: {0}")]
    Operator(#[from] OperatorError),
    /// 其他错误
    #[error("错误: {0}")]
    Other(String),
}

/// 文件操作错误
#[derive(Debug, Error)]
pub enum FileError {
    /// 目录不存在
    #[error("目录不存在: {}", path.display())]
    DirectoryNotFound { path: PathBuf },
    /// 读取目录失败
    #[error("读取目录失败 ({}): {source}", path.display())]
    ReadDirFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// 读取文件失败
    #[error("读取文件失败 ({}): {source}", path.display())]
    ReadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// 写入文件失败
    #[error("写入文件失败 ({}): {source}", path.display())]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// 检查文件是否存在失败
    #[error("无法检查文件 ({}): {source}", path.display())]
    ProbeFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// 配置错误
#[derive(Debug, Error)]
pub enum ConfigError {
    /// 环境变量解析失败
    #[error("环境变量 {var_name} 解析失败: 值 '{value}' 无法转换为 {expected_type}")]
    EnvVarParseFailed {
        var_name: String,
        value: String,
        expected_type: String,
    },
    /// TOML 解析失败
    #[error("配置文件解析失败 ({}): {source}", path.display())]
    TomlParseFailed {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    /// 扩展名无效
    #[error("扩展名无效: '{0}' (不能为空且不能包含 '.')")]
    InvalidExtension(String),
    /// 阈值无效
    #[error("严重错误阈值必须 >= 1, 实际为 {0}")]
    InvalidThreshold(usize),
    /// 快捷键无法解析
    #[error("无法解析快捷键 '{binding}': {reason}")]
    InvalidHotkey { binding: String, reason: String },
}

/// 键盘注入错误
#[derive(Debug, Error)]
pub enum InputError {
    /// 无法连接输入设备
    #[error("无法初始化键盘注入: {0}")]
    ConnectionFailed(String),
    /// 发送按键失败
    #[error("发送按键失败 ({action}): {reason}")]
    SendFailed { action: String, reason: String },
}

/// 启动外部程序错误
#[derive(Debug, Error)]
pub enum LaunchError {
    /// 无法启动系统打开命令
    #[error("无法执行打开命令 {program} ({}): {source}", path.display())]
    SpawnFailed {
        program: String,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// 操作员交互错误
#[derive(Debug, Error)]
pub enum OperatorError {
    /// 对话框无法显示或读取
    #[error("无法显示对话框: {0}")]
    DialogFailed(String),
}

// ========== 便捷构造函数 ==========

impl AppError {
    /// 创建文件写入错误
    pub fn file_write_failed(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        AppError::File(FileError::WriteFailed {
            path: path.into(),
            source,
        })
    }

    /// 创建按键发送错误
    pub fn send_failed(action: impl Into<String>, reason: impl ToString) -> Self {
        AppError::Input(InputError::SendFailed {
            action: action.into(),
            reason: reason.to_string(),
        })
    }

    /// 创建快捷键解析错误
    pub fn invalid_hotkey(binding: impl Into<String>, reason: impl Into<String>) -> Self {
        AppError::Config(ConfigError::InvalidHotkey {
            binding: binding.into(),
            reason: reason.into(),
        })
    }
}

// ========== Result 类型别名 ==========

/// 应用程序结果类型
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_includes_path() {
        let err: AppError = FileError::DirectoryNotFound {
            path: PathBuf::from("drawings"),
        }
        .into();
        assert_eq!(err.to_string(), "文件错误: 目录不存在: drawings");
    }

    #[test]
    fn test_error_source_chain() {
        use std::error::Error;

        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err = AppError::file_write_failed("logfile.log", io);
        // 外层 -> FileError -> io::Error
        let inner = err.source().expect("应该有 FileError");
        assert!(inner.source().is_some());
    }
}
