pub mod print_ctx;
pub mod print_flow;
pub mod print_sequence;

pub use print_ctx::PrintCtx;
pub use print_flow::{PrintFlow, PrintSettings};
pub use print_sequence::{build_sequence, InjectionStep, KeyBindings};
