//! 编排层（Orchestration Layer）
//!
//! ## 职责
//!
//! 本层负责整批图纸的调度，是整个系统的"指挥中心"。
//!
//! ## 层次关系
//!
//! ```text
//! batch_printer (处理 Vec<InputFile>，持有运行日志和错误计数)
//!     ↓
//! workflow::PrintFlow (处理单个文件)
//!     ↓
//! services (能力层：枚举 / 运行日志 / 错误升级 / 汇总)
//!     ↓
//! infrastructure (基础设施：键盘 / 启动器 / 进程表 / 对话框)
//! ```
//!
//! ## 设计原则
//!
//! 1. **顺序执行**：CAD 窗口同一时刻只能接收一个文件的按键
//! 2. **资源隔离**：只有编排层持有运行日志和操作员对话框
//! 3. **向下依赖**：编排层 → workflow → services → infrastructure

pub mod batch_printer;

// 重新导出主要类型
pub use batch_printer::{App, JOB_ENDED_MESSAGE};
