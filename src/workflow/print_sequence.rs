//! 打印按键序列
//!
//! 打开打印对话框 → 选择打印机 → 回车 → 等待 → 输入输出文件名 → 回车 → 等待 →
//! 关闭图纸 → 拒绝保存。整个序列是盲发的，不观察窗口状态。

use crate::config::{Config, Timings};
use crate::error::AppResult;
use crate::infrastructure::{Chord, Key};
use std::time::Duration;

/// 序列中的一步
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InjectionStep {
    /// 按下组合键
    Press(Chord),
    /// 输入文本
    Type(String),
    /// 固定等待
    Wait(Duration),
}

/// 与按键相关的设置（从配置解析而来）
#[derive(Debug, Clone)]
pub struct KeyBindings {
    pub print: Chord,
    pub close: Chord,
    pub decline_save: Chord,
    pub printer_selector: String,
}

impl KeyBindings {
    pub fn from_config(config: &Config) -> AppResult<Self> {
        Ok(Self {
            print: Chord::parse(&config.print_hotkey)?,
            close: Chord::parse(&config.close_hotkey)?,
            decline_save: Chord::parse(&config.decline_save_key)?,
            printer_selector: config.printer_selector.clone(),
        })
    }
}

/// 为一个输出文件生成完整的按键序列
pub fn build_sequence(
    bindings: &KeyBindings,
    timings: &Timings,
    output_name: &str,
) -> Vec<InjectionStep> {
    let enter = Chord::single(Key::Enter);
    vec![
        InjectionStep::Press(bindings.print.clone()),
        InjectionStep::Type(bindings.printer_selector.clone()),
        InjectionStep::Press(enter.clone()),
        InjectionStep::Wait(timings.after_printer_select()),
        InjectionStep::Type(output_name.to_string()),
        InjectionStep::Press(enter),
        InjectionStep::Wait(timings.after_save()),
        InjectionStep::Press(bindings.close.clone()),
        InjectionStep::Press(bindings.decline_save.clone()),
    ]
}
