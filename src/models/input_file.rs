use serde::Serialize;
use std::path::{Path, PathBuf};

/// 待打印的图纸文件
///
/// 枚举目录时创建，之后不再修改。
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InputFile {
    path: PathBuf,
    directory: PathBuf,
    file_name: String,
    base_name: String,
    extension: String,
}

impl InputFile {
    /// 从目录和文件名构造
    ///
    /// 扩展名取文件名中第一个 `.` 之后的那一段（`a.dwg.bak` 的扩展名是 `dwg`）。
    /// 没有 `.` 或主文件名为空时返回 `None`。
    pub fn new(directory: &Path, file_name: &str) -> Option<Self> {
        let mut segments = file_name.split('.');
        let base_name = segments.next()?;
        let extension = segments.next()?;
        if base_name.is_empty() {
            return None;
        }

        Some(Self {
            path: directory.join(file_name),
            directory: directory.to_path_buf(),
            file_name: file_name.to_string(),
            base_name: base_name.to_string(),
            extension: extension.to_string(),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn base_name(&self) -> &str {
        &self.base_name
    }

    pub fn extension(&self) -> &str {
        &self.extension
    }

    /// 预期输出文件名：把匹配到的扩展名段替换为 `output_extension`
    ///
    /// `Drawing2.dwg` -> `Drawing2.pdf`，`plan.dwg.v2` -> `plan.pdf.v2`
    pub fn output_name(&self, output_extension: &str) -> String {
        let rest = &self.file_name[self.base_name.len() + 1 + self.extension.len()..];
        format!("{}.{}{}", self.base_name, output_extension, rest)
    }

    /// 预期输出文件路径（与输入文件同目录）
    pub fn output_path(&self, output_extension: &str) -> PathBuf {
        self.directory.join(self.output_name(output_extension))
    }
}
