//! 打印上下文
//!
//! 封装"我正在打印第几个文件、输出到哪里"这一信息

use crate::models::InputFile;
use std::fmt::Display;
use std::path::PathBuf;

/// 单个文件的打印上下文
#[derive(Debug, Clone)]
pub struct PrintCtx {
    /// 输入图纸
    pub input: InputFile,

    /// 预期输出文件名（输入到打印对话框中的名字）
    pub output_name: String,

    /// 预期输出文件路径
    pub output_path: PathBuf,

    /// 文件序号（从1开始，仅用于日志显示）
    pub file_index: usize,

    /// 本次运行的文件总数
    pub total_files: usize,
}

impl PrintCtx {
    /// 创建新的打印上下文
    pub fn new(
        input: InputFile,
        output_extension: &str,
        file_index: usize,
        total_files: usize,
    ) -> Self {
        let output_name = input.output_name(output_extension);
        let output_path = input.output_path(output_extension);
        Self {
            input,
            output_name,
            output_path,
            file_index,
            total_files,
        }
    }

    /// 输入文件名
    pub fn name(&self) -> &str {
        self.input.file_name()
    }
}

impl Display for PrintCtx {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "[文件 {}/{} {}]",
            self.file_index,
            self.total_files,
            self.input.file_name()
        )
    }
}
