//! 基础设施层：持有外部资源（输入设备、进程表、系统启动器、终端），只暴露能力

pub mod keyboard;
pub mod launcher;
pub mod operator;
pub mod process_probe;

pub use keyboard::{Chord, EnigoInjector, InputInjector, Key, Modifier};
pub use launcher::{Launcher, SystemLauncher};
pub use operator::{Operator, TerminalOperator};
pub use process_probe::{ProcessProbe, SysinfoProbe};
