use super::{Command, CommandError, LoopAction, BUILTINS};

#[derive(Clone)]
pub struct HelpCommand;

impl Default for HelpCommand {
    fn default() -> Self {
        Self::new()
    }
}

impl HelpCommand {
    pub fn new() -> Self {
        Self
    }
}

impl Command for HelpCommand {
    fn execute(&self, _args: &[String]) -> Result<LoopAction, CommandError> {
        println!("\n--- microshell ---");
        println!("Builtin commands:");
        for (name, summary) in BUILTINS {
            println!("  {:<10} {}", name, summary);
        }
        println!("Anything else runs as an external program.\n");
        Ok(LoopAction::Continue)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_help_continues_loop() {
        let cmd = HelpCommand::new();
        assert_eq!(cmd.execute(&[]).unwrap(), LoopAction::Continue);
    }

    #[test]
    fn test_summaries_cover_every_builtin() {
        let names: Vec<&str> = BUILTINS.iter().map(|(name, _)| *name).collect();
        for expected in ["cd", "clear", "cp", "exit", "help", "history", "stat", "touch"] {
            assert!(names.contains(&expected), "{} missing from help", expected);
        }
        assert!(BUILTINS.iter().all(|(_, summary)| !summary.is_empty()));
    }
}
