//! 运行日志服务 - 业务能力层
//!
//! 追加写入 logfile.log，每条记录一行：`LEVEL:LoggerName:Message`。
//! 每条记录同时以对应级别输出到控制台。

use crate::error::{AppError, AppResult};
use chrono::{DateTime, Local};
use std::fmt;
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{error, info};

/// 时间戳格式
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// 日志级别
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Error,
    Critical,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Severity::Info => "INFO",
            Severity::Error => "ERROR",
            Severity::Critical => "CRITICAL",
        };
        f.write_str(name)
    }
}

/// 单条日志记录
#[derive(Debug, Clone)]
pub struct LogRecord {
    pub severity: Severity,
    pub message: String,
    pub logged_at: DateTime<Local>,
}

/// 运行日志
///
/// 只追加，不轮转。
pub struct RunLog {
    logger_name: String,
    path: PathBuf,
    file: File,
    records: Vec<LogRecord>,
    started_at: Option<DateTime<Local>>,
    ended_at: Option<DateTime<Local>>,
}

impl RunLog {
    /// 以追加模式打开日志文件
    pub fn open(path: impl Into<PathBuf>, logger_name: impl Into<String>) -> AppResult<Self> {
        let path = path.into();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .map_err(|e| AppError::file_write_failed(&path, e))?;

        Ok(Self {
            logger_name: logger_name.into(),
            path,
            file,
            records: Vec::new(),
            started_at: None,
            ended_at: None,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn records(&self) -> &[LogRecord] {
        &self.records
    }

    pub fn started_at(&self) -> Option<DateTime<Local>> {
        self.started_at
    }

    pub fn ended_at(&self) -> Option<DateTime<Local>> {
        self.ended_at
    }

    /// 记录运行开始
    pub fn start(&mut self, directory: &Path) -> AppResult<DateTime<Local>> {
        let now = Local::now();
        self.started_at = Some(now);
        self.info(format!(
            "Program ran at {}. Directory chosen: {}",
            now.format(TIMESTAMP_FORMAT),
            directory.display()
        ))?;
        Ok(now)
    }

    /// 记录运行结束，并在文件中留一个空行分隔下一次运行
    pub fn end(&mut self) -> AppResult<DateTime<Local>> {
        let now = Local::now();
        self.ended_at = Some(now);
        self.info(format!("Program ended at {}", now.format(TIMESTAMP_FORMAT)))?;
        self.write_raw("\n")?;
        Ok(now)
    }

    pub fn info(&mut self, message: impl Into<String>) -> AppResult<()> {
        self.record(Severity::Info, message)
    }

    pub fn error(&mut self, message: impl Into<String>) -> AppResult<()> {
        self.record(Severity::Error, message)
    }

    pub fn critical(&mut self, message: impl Into<String>) -> AppResult<()> {
        self.record(Severity::Critical, message)
    }

    /// 追加一条记录
    pub fn record(&mut self, severity: Severity, message: impl Into<String>) -> AppResult<()> {
        let message = message.into();

        match severity {
            Severity::Info => info!("{}", message),
            Severity::Error => error!("{}", message),
            Severity::Critical => error!("[CRITICAL] {}", message),
        }

        let line = format!("{}:{}:{}\n", severity, self.logger_name, message);
        self.write_raw(&line)?;

        self.records.push(LogRecord {
            severity,
            message,
            logged_at: Local::now(),
        });
        Ok(())
    }

    fn write_raw(&mut self, text: &str) -> AppResult<()> {
        self.file
            .write_all(text.as_bytes())
            .and_then(|_| self.file.flush())
            .map_err(|e| AppError::file_write_failed(&self.path, e))
    }
}
