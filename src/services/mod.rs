pub mod error_escalator;
pub mod file_enumerator;
pub mod run_log;
pub mod summary_writer;

pub use error_escalator::{Decision, ErrorEscalator};
pub use file_enumerator::enumerate_inputs;
pub use run_log::{LogRecord, RunLog, Severity, TIMESTAMP_FORMAT};
pub use summary_writer::SummaryWriter;
