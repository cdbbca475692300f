//! 严重错误升级服务 - 业务能力层
//!
//! 累计严重错误，达到阈值后每出现一次新的严重错误就询问操作员是否继续

use crate::error::AppResult;
use crate::infrastructure::Operator;
use crate::models::PrintOutcome;
use tracing::{info, warn};

/// 操作员的决定
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Continue,
    Abort,
}

/// 严重错误计数器
///
/// 生命周期与一次运行相同。
#[derive(Debug)]
pub struct ErrorEscalator {
    threshold: usize,
    critical_count: usize,
}

impl ErrorEscalator {
    pub fn new(threshold: usize) -> Self {
        Self {
            threshold,
            critical_count: 0,
        }
    }

    pub fn critical_count(&self) -> usize {
        self.critical_count
    }

    pub fn threshold(&self) -> usize {
        self.threshold
    }

    /// 确认框中的提示文字
    pub fn prompt_message(&self) -> String {
        format!(
            "{} or more critical errors have occurred.\nWould you like to continue (click \"ok\") or cancel?",
            self.threshold
        )
    }

    /// 登记一个文件的结果；严重错误累计达到阈值时询问操作员
    ///
    /// 对话框无法显示时视为取消。
    pub fn observe(
        &mut self,
        outcome: &PrintOutcome,
        operator: &mut impl Operator,
    ) -> AppResult<Decision> {
        if !outcome.is_critical() {
            return Ok(Decision::Continue);
        }

        self.critical_count += 1;
        if self.critical_count < self.threshold {
            return Ok(Decision::Continue);
        }

        warn!(
            "⚠️ 已发生 {} 个严重错误 (阈值 {})，等待操作员确认...",
            self.critical_count, self.threshold
        );

        let proceed = match operator.confirm(&self.prompt_message()) {
            Ok(proceed) => proceed,
            Err(e) => {
                warn!("⚠️ 确认框失败，按取消处理: {}", e);
                false
            }
        };

        if proceed {
            info!("操作员选择继续");
            Ok(Decision::Continue)
        } else {
            warn!("❌ 操作员选择取消，停止运行");
            Ok(Decision::Abort)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::OperatorError;
    use std::collections::VecDeque;

    /// 按预设答案回答的操作员
    struct ScriptedOperator {
        answers: VecDeque<AppResult<bool>>,
        prompts: Vec<String>,
    }

    impl ScriptedOperator {
        fn new(answers: Vec<AppResult<bool>>) -> Self {
            Self {
                answers: answers.into(),
                prompts: Vec::new(),
            }
        }
    }

    impl Operator for ScriptedOperator {
        fn confirm(&mut self, message: &str) -> AppResult<bool> {
            self.prompts.push(message.to_string());
            self.answers.pop_front().unwrap_or(Ok(true))
        }

        fn alert(&mut self, _message: &str) -> AppResult<()> {
            Ok(())
        }
    }

    #[test]
    fn test_prompts_once_per_critical_error_at_threshold() {
        let mut escalator = ErrorEscalator::new(2);
        let mut operator = ScriptedOperator::new(vec![Ok(true), Ok(true)]);

        let outcomes = [
            PrintOutcome::VerifyFailed, // 1: 低于阈值
            PrintOutcome::Printed,
            PrintOutcome::VerifyFailed, // 2: 询问
            PrintOutcome::Printed,      // 非严重错误不询问
            PrintOutcome::LaunchFailed { exit_code: 1 },
            PrintOutcome::VerifyFailed, // 3: 询问
        ];
        for outcome in &outcomes {
            let decision = escalator.observe(outcome, &mut operator).unwrap();
            assert_eq!(decision, Decision::Continue);
        }

        assert_eq!(escalator.critical_count(), 3);
        assert_eq!(operator.prompts.len(), 2);
        assert!(operator.prompts[0].starts_with("2 or more critical errors"));
    }

    #[test]
    fn test_cancel_aborts() {
        let mut escalator = ErrorEscalator::new(1);
        let mut operator = ScriptedOperator::new(vec![Ok(false)]);

        let decision = escalator
            .observe(&PrintOutcome::VerifyFailed, &mut operator)
            .unwrap();
        assert_eq!(decision, Decision::Abort);
    }

    #[test]
    fn test_launch_failures_are_not_counted() {
        let mut escalator = ErrorEscalator::new(1);
        let mut operator = ScriptedOperator::new(vec![]);

        for _ in 0..3 {
            escalator
                .observe(&PrintOutcome::LaunchFailed { exit_code: 1 }, &mut operator)
                .unwrap();
        }
        assert_eq!(escalator.critical_count(), 0);
        assert!(operator.prompts.is_empty());
    }

    #[test]
    fn test_dialog_failure_counts_as_cancel() {
        let mut escalator = ErrorEscalator::new(1);
        let mut operator = ScriptedOperator::new(vec![Err(OperatorError::DialogFailed(
            "not a terminal".into(),
        )
        .into())]);

        let decision = escalator
            .observe(&PrintOutcome::VerifyFailed, &mut operator)
            .unwrap();
        assert_eq!(decision, Decision::Abort);
    }
}
