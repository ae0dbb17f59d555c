use std::env;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use super::{Command, CommandError, LoopAction};
use crate::path::PathExpander;

/// `cd` remembers the directory that was current before the last successful
/// change, so `cd -` can hop back.
#[derive(Clone)]
pub struct CdCommand {
    path_expander: PathExpander,
    previous_dir: Arc<Mutex<Option<PathBuf>>>,
}

impl CdCommand {
    pub fn new(previous_dir: Arc<Mutex<Option<PathBuf>>>) -> Self {
        Self {
            path_expander: PathExpander::new(),
            previous_dir,
        }
    }

    fn resolve_target(&self, arg: Option<&str>) -> Result<PathBuf, CommandError> {
        match arg {
            None => self.path_expander.home_dir().ok_or(CommandError::HomeNotSet),
            Some("-") => {
                let previous = self.previous_dir.lock().map_err(|_| {
                    CommandError::ExecutionError("previous directory unavailable".to_string())
                })?;
                previous.clone().ok_or(CommandError::NoPreviousDirectory)
            }
            Some(path) => self
                .path_expander
                .expand(path)
                .ok_or(CommandError::HomeNotSet),
        }
    }
}

impl Command for CdCommand {
    fn execute(&self, args: &[String]) -> Result<LoopAction, CommandError> {
        let current = env::current_dir()
            .map_err(|e| CommandError::IoError("cd: getcwd".to_string(), e))?;

        let arg = args.first().map(String::as_str);
        let target = self.resolve_target(arg)?;
        env::set_current_dir(&target).map_err(|e| CommandError::IoError("cd".to_string(), e))?;

        // cd - echoes its destination.
        if arg == Some("-") {
            println!("{}", target.display());
        }

        let mut previous = self.previous_dir.lock().map_err(|_| {
            CommandError::ExecutionError("previous directory unavailable".to_string())
        })?;
        *previous = Some(current);

        Ok(LoopAction::Continue)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = env::temp_dir().join(name);
        fs::create_dir_all(&dir).unwrap();
        dir.canonicalize().unwrap()
    }

    // One test drives the whole journey: parallel tests sharing the process
    // working directory would trip over each other.
    #[test]
    fn test_cd_journey() {
        let cmd = CdCommand::new(Arc::new(Mutex::new(None)));
        let first = scratch_dir("microshell_cd_first");
        let second = scratch_dir("microshell_cd_second");

        // No previous directory recorded yet.
        let result = cmd.execute(&["-".to_string()]);
        assert!(matches!(result, Err(CommandError::NoPreviousDirectory)));

        assert_eq!(
            cmd.execute(&[first.display().to_string()]).unwrap(),
            LoopAction::Continue
        );
        assert_eq!(env::current_dir().unwrap(), first);

        cmd.execute(&[second.display().to_string()]).unwrap();
        assert_eq!(env::current_dir().unwrap(), second);

        // cd - returns to the first directory.
        cmd.execute(&["-".to_string()]).unwrap();
        assert_eq!(env::current_dir().unwrap(), first);

        // And a second cd - bounces back again.
        cmd.execute(&["-".to_string()]).unwrap();
        assert_eq!(env::current_dir().unwrap(), second);

        // A failed change keeps both the working directory and the
        // previous-directory slot as they were.
        let result = cmd.execute(&["/path/that/does/not/exist".to_string()]);
        assert!(matches!(result, Err(CommandError::IoError(_, _))));
        assert_eq!(env::current_dir().unwrap(), second);
        cmd.execute(&["-".to_string()]).unwrap();
        assert_eq!(env::current_dir().unwrap(), first);

        // Plain cd lands in HOME.
        let home = PathBuf::from(env::var("HOME").unwrap()).canonicalize().unwrap();
        cmd.execute(&[]).unwrap();
        assert_eq!(env::current_dir().unwrap(), home);
    }
}
