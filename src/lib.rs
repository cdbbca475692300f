//! # DWG Print Bot
//!
//! 把目录中的 CAD 图纸（.dwg）逐个用默认程序打开，模拟键盘打印成 PDF 的 Rust 程序
//!
//! ## 架构设计
//!
//! 本系统采用四层架构：
//!
//! ### ① 基础设施层（Infrastructure）
//! - `infrastructure/` - 持有外部资源，只暴露能力
//! - `EnigoInjector` - 键盘注入（发送到当前焦点窗口）
//! - `SystemLauncher` - 系统默认打开方式
//! - `SysinfoProbe` - 进程表查询
//! - `TerminalOperator` - 确认框 / 提示框
//!
//! ### ② 业务能力层（Services）
//! - `services/` - 描述"我能做什么"
//! - `enumerate_inputs` - 按扩展名枚举图纸
//! - `RunLog` - 追加写 logfile.log
//! - `ErrorEscalator` - 严重错误计数与升级
//! - `SummaryWriter` - 写 JSON 运行汇总
//!
//! ### ③ 流程层（Workflow）
//! - `workflow/` - 定义"一张图纸"的完整处理流程
//! - `PrintCtx` - 上下文封装（输入文件 + 预期输出）
//! - `PrintFlow` - 流程编排（检查 → 打开 → 预热 → 按键 → 校验）
//!
//! ### ④ 编排层（Orchestration）
//! - `orchestrator/batch_printer` - 批量打印器，顺序处理、错误升级、统计
//!
//! ## 已知限制
//!
//! 所有等待都是固定时长，按键盲发到焦点窗口，不检测 CAD 是否真正就绪。

pub mod config;
pub mod error;
pub mod infrastructure;
pub mod models;
pub mod orchestrator;
pub mod services;
pub mod utils;
pub mod workflow;

// 重新导出常用类型
pub use config::{Config, Timings};
pub use error::{AppError, AppResult};
pub use models::{InputFile, PrintOutcome, RunSummary};
pub use orchestrator::App;
pub use workflow::{PrintCtx, PrintFlow};
