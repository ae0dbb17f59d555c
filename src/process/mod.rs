use std::fmt;

pub mod executor;
pub mod signal;

pub use executor::ProcessLauncher;

#[derive(Debug)]
pub enum ProcessError {
    CommandNotFound(String),
    Other(String),
}

impl fmt::Display for ProcessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProcessError::CommandNotFound(cmd) => write!(f, "command not found: {}", cmd),
            ProcessError::Other(msg) => write!(f, "{}", msg),
        }
    }
}
