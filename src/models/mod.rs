pub mod input_file;
pub mod outcome;

pub use input_file::InputFile;
pub use outcome::{FileReport, PrintOutcome, RunSummary};
