use super::{Command, CommandError, LoopAction};

/// `exit` only asks the read loop to stop; the process winds down through
/// `main` so destructors and terminal state cleanup still run.
#[derive(Clone)]
pub struct ExitCommand;

impl Default for ExitCommand {
    fn default() -> Self {
        Self::new()
    }
}

impl ExitCommand {
    pub fn new() -> Self {
        Self
    }
}

impl Command for ExitCommand {
    fn execute(&self, _args: &[String]) -> Result<LoopAction, CommandError> {
        Ok(LoopAction::Exit)
    }
}
