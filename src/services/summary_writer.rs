//! 汇总写入服务 - 业务能力层
//!
//! 只负责把运行汇总写成 JSON，不关心流程

use crate::error::{AppError, AppResult};
use crate::models::RunSummary;
use std::path::{Path, PathBuf};
use tracing::debug;

/// 汇总写入服务
pub struct SummaryWriter {
    summary_path: PathBuf,
}

impl SummaryWriter {
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            summary_path: path.into(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.summary_path
    }

    /// 覆盖写入汇总文件
    pub async fn write(&self, summary: &RunSummary) -> AppResult<()> {
        debug!(
            "写入运行汇总: {} ({} 个文件)",
            self.summary_path.display(),
            summary.total()
        );

        let json = serde_json::to_string_pretty(summary)
            .map_err(|e| AppError::Other(format!("序列化运行汇总失败: {}", e)))?;

        tokio::fs::write(&self.summary_path, json)
            .await
            .map_err(|e| AppError::file_write_failed(&self.summary_path, e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PrintOutcome;

    #[tokio::test]
    async fn test_write_summary_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("summary.json");

        let mut summary = RunSummary::new(dir.path().to_path_buf(), "2017-09-03 21:35:09".into());
        summary.push(dir.path().join("Drawing2.dwg"), PrintOutcome::Printed);
        summary.push(dir.path().join("Drawing3.dwg"), PrintOutcome::VerifyFailed);

        let writer = SummaryWriter::with_path(&path);
        tokio_test::assert_ok!(writer.write(&summary).await);

        let value: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(value["started_at"], "2017-09-03 21:35:09");
        assert_eq!(value["aborted"], false);
        assert_eq!(value["reports"][0]["outcome"]["kind"], "printed");
        assert_eq!(value["reports"][1]["outcome"]["kind"], "verify_failed");
    }

    #[tokio::test]
    async fn test_write_into_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let writer = SummaryWriter::with_path(dir.path().join("missing").join("summary.json"));
        let summary = RunSummary::default();

        tokio_test::assert_err!(writer.write(&summary).await);
    }
}
