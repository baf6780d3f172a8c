pub mod check;
pub mod digits;
pub mod error;
pub mod input;
pub mod interactive;

pub use check::{check, run_once, write_verdict, OutputFormat, Report};
pub use digits::{is_armstrong, Digits, Verdict};
pub use error::{CheckError, Result};
