use std::io::{self, Write};

use super::{Command, CommandError, LoopAction};

/// Cursor-home plus erase-to-end, the classic full-screen wipe.
const CLEAR_SEQUENCE: &str = "\x1b[H\x1b[J";

#[derive(Clone)]
pub struct ClearCommand;

impl Default for ClearCommand {
    fn default() -> Self {
        Self::new()
    }
}

impl ClearCommand {
    pub fn new() -> Self {
        Self
    }
}

impl Command for ClearCommand {
    fn execute(&self, _args: &[String]) -> Result<LoopAction, CommandError> {
        print!("{}", CLEAR_SEQUENCE);
        io::stdout()
            .flush()
            .map_err(|e| CommandError::IoError("clear".to_string(), e))?;
        Ok(LoopAction::Continue)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clear_continues_loop() {
        let cmd = ClearCommand::new();
        assert_eq!(cmd.execute(&[]).unwrap(), LoopAction::Continue);
    }

    #[test]
    fn test_clear_ignores_arguments() {
        let cmd = ClearCommand::new();
        assert!(cmd.execute(&["extra".to_string()]).is_ok());
    }
}
