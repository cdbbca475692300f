//! 操作员对话框 - 基础设施层
//!
//! 阻塞式确认框和提示框，运行期间唯一需要人工参与的地方。

use crate::error::{AppResult, OperatorError};
use dialoguer::{Confirm, Input};

/// 与操作员交互的能力
pub trait Operator {
    /// 确认框：true 表示继续（OK），false 表示取消（Cancel）
    fn confirm(&mut self, message: &str) -> AppResult<bool>;

    /// 提示框，等待操作员确认后返回
    fn alert(&mut self, message: &str) -> AppResult<()>;
}

/// 终端对话框
#[derive(Debug, Default)]
pub struct TerminalOperator;

impl TerminalOperator {
    pub fn new() -> Self {
        Self
    }
}

impl Operator for TerminalOperator {
    fn confirm(&mut self, message: &str) -> AppResult<bool> {
        Confirm::new()
            .with_prompt(message)
            .default(true)
            .interact()
            .map_err(|e| OperatorError::DialogFailed(e.to_string()).into())
    }

    fn alert(&mut self, message: &str) -> AppResult<()> {
        Input::<String>::new()
            .with_prompt(format!("{} (按回车键关闭)", message))
            .allow_empty(true)
            .interact_text()
            .map(|_| ())
            .map_err(|e| OperatorError::DialogFailed(e.to_string()).into())
    }
}
