//! 文件枚举服务 - 业务能力层
//!
//! 只负责"找出目录中某种格式的文件"，不关心后续流程

use crate::error::{AppResult, FileError};
use crate::models::InputFile;
use std::path::Path;
use tokio::fs;
use tracing::{debug, info};

/// 列出目录中扩展名等于 `extension` 的文件（区分大小写），按文件名排序
///
/// 只看文件名中第一个 `.` 之后的那一段；没有扩展名的文件和子目录会被跳过。
pub async fn enumerate_inputs(directory: &Path, extension: &str) -> AppResult<Vec<InputFile>> {
    if !fs::try_exists(directory).await.unwrap_or(false) {
        return Err(FileError::DirectoryNotFound {
            path: directory.to_path_buf(),
        }
        .into());
    }

    let read_dir_failed = |source| FileError::ReadDirFailed {
        path: directory.to_path_buf(),
        source,
    };

    let mut entries = fs::read_dir(directory).await.map_err(read_dir_failed)?;
    let mut files = Vec::new();

    while let Some(entry) = entries.next_entry().await.map_err(read_dir_failed)? {
        let file_type = entry.file_type().await.map_err(read_dir_failed)?;
        if !file_type.is_file() {
            continue;
        }

        let name = entry.file_name();
        let Some(name) = name.to_str() else {
            debug!("跳过非 UTF-8 文件名: {:?}", name);
            continue;
        };

        match InputFile::new(directory, name) {
            Some(file) if file.extension() == extension => files.push(file),
            Some(_) => {}
            None => debug!("跳过没有扩展名的文件: {}", name),
        }
    }

    files.sort_by(|a, b| a.file_name().cmp(b.file_name()));
    info!("✓ 在 {} 中找到 {} 个 .{} 文件", directory.display(), files.len(), extension);

    Ok(files)
}
