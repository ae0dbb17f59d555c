use std::collections::BTreeMap;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

mod cd;
mod clear;
mod cp;
mod exit;
mod help;
mod history;
mod stat;
mod touch;

pub use cd::CdCommand;
pub use clear::ClearCommand;
pub use cp::CpCommand;
pub use exit::ExitCommand;
pub use help::HelpCommand;
pub use history::HistoryCommand;
pub use stat::StatCommand;
pub use touch::TouchCommand;

use crate::input::HistoryRing;
use crate::process::{ProcessError, ProcessLauncher};

/// Builtin names and the one-line summaries `help` prints for them.
pub const BUILTINS: &[(&str, &str)] = &[
    ("cd", "change directory; plain cd goes home, cd - goes back"),
    ("clear", "clear the screen"),
    ("cp", "copy a file, carrying over its permission bits"),
    ("exit", "leave the shell"),
    ("help", "show this summary"),
    ("history", "list the commands entered this session"),
    ("stat", "show file metadata"),
    ("touch", "create a file or refresh its timestamps"),
];

#[derive(Debug)]
pub enum CommandError {
    HomeNotSet,
    NoPreviousDirectory,
    InvalidArguments(&'static str),
    SameFile(String, String),
    ExecutionError(String),
    IoError(String, std::io::Error),
    ProcessError(ProcessError),
}

impl std::fmt::Display for CommandError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CommandError::HomeNotSet => write!(f, "cd: HOME not set"),
            CommandError::NoPreviousDirectory => write!(f, "cd: no previous directory"),
            CommandError::InvalidArguments(msg) => write!(f, "{}", msg),
            CommandError::SameFile(src, dst) => {
                write!(f, "cp: '{}' and '{}' are the same file", src, dst)
            }
            CommandError::ExecutionError(msg) => write!(f, "execution error: {}", msg),
            CommandError::IoError(context, err) => write!(f, "{}: {}", context, err),
            CommandError::ProcessError(err) => write!(f, "{}", err),
        }
    }
}

impl From<ProcessError> for CommandError {
    fn from(err: ProcessError) -> Self {
        CommandError::ProcessError(err)
    }
}

/// What the read loop should do after a command has run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopAction {
    Continue,
    Exit,
}

pub trait Command {
    fn execute(&self, args: &[String]) -> Result<LoopAction, CommandError>;
}

#[derive(Clone)]
enum CommandType {
    Cd(CdCommand),
    Clear(ClearCommand),
    Cp(CpCommand),
    Exit(ExitCommand),
    Help(HelpCommand),
    History(HistoryCommand),
    Stat(StatCommand),
    Touch(TouchCommand),
}

impl Command for CommandType {
    fn execute(&self, args: &[String]) -> Result<LoopAction, CommandError> {
        match self {
            CommandType::Cd(cmd) => cmd.execute(args),
            CommandType::Clear(cmd) => cmd.execute(args),
            CommandType::Cp(cmd) => cmd.execute(args),
            CommandType::Exit(cmd) => cmd.execute(args),
            CommandType::Help(cmd) => cmd.execute(args),
            CommandType::History(cmd) => cmd.execute(args),
            CommandType::Stat(cmd) => cmd.execute(args),
            CommandType::Touch(cmd) => cmd.execute(args),
        }
    }
}

/// Dispatches a command name to its builtin, or hands anything unknown to
/// the process launcher.
pub struct CommandExecutor {
    commands: BTreeMap<String, CommandType>,
    launcher: ProcessLauncher,
}

impl CommandExecutor {
    pub fn new(history: Arc<Mutex<HistoryRing>>) -> Self {
        let previous_dir: Arc<Mutex<Option<PathBuf>>> = Arc::new(Mutex::new(None));
        let mut commands = BTreeMap::new();

        commands.insert(
            "cd".to_string(),
            CommandType::Cd(CdCommand::new(previous_dir)),
        );
        commands.insert("clear".to_string(), CommandType::Clear(ClearCommand::new()));
        commands.insert("cp".to_string(), CommandType::Cp(CpCommand::new()));
        commands.insert("exit".to_string(), CommandType::Exit(ExitCommand::new()));
        commands.insert("help".to_string(), CommandType::Help(HelpCommand::new()));
        commands.insert(
            "history".to_string(),
            CommandType::History(HistoryCommand::new(history)),
        );
        commands.insert("stat".to_string(), CommandType::Stat(StatCommand::new()));
        commands.insert("touch".to_string(), CommandType::Touch(TouchCommand::new()));

        Self {
            commands,
            launcher: ProcessLauncher::new(),
        }
    }

    pub fn execute(&self, command: &str, args: &[String]) -> Result<LoopAction, CommandError> {
        if let Some(cmd) = self.commands.get(command) {
            cmd.execute(args)
        } else {
            self.launcher.run(command, args)?;
            Ok(LoopAction::Continue)
        }
    }

    pub fn is_builtin(&self, command: &str) -> bool {
        self.commands.contains_key(command)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::{HistoryRing, HISTORY_MAX};

    fn test_executor() -> CommandExecutor {
        let history = Arc::new(Mutex::new(HistoryRing::new(HISTORY_MAX)));
        CommandExecutor::new(history)
    }

    #[test]
    fn test_builtin_command_detection() {
        let executor = test_executor();

        for (name, _) in BUILTINS {
            assert!(executor.is_builtin(name), "{} should be builtin", name);
        }
        assert!(!executor.is_builtin("ls"));
        assert!(!executor.is_builtin(""));
    }

    #[test]
    fn test_registry_matches_help_table() {
        let executor = test_executor();
        assert_eq!(executor.commands.len(), BUILTINS.len());
    }

    #[test]
    fn test_execute_exit_requests_loop_exit() {
        let executor = test_executor();
        assert_eq!(executor.execute("exit", &[]).unwrap(), LoopAction::Exit);
    }

    #[test]
    fn test_builtins_request_loop_continue() {
        let executor = test_executor();
        assert_eq!(executor.execute("help", &[]).unwrap(), LoopAction::Continue);
        assert_eq!(
            executor.execute("history", &[]).unwrap(),
            LoopAction::Continue
        );
    }

    #[test]
    fn test_execute_unknown_command() {
        let executor = test_executor();

        let result = executor.execute("unknown_command", &[]);
        assert!(matches!(
            result,
            Err(CommandError::ProcessError(ProcessError::CommandNotFound(_)))
        ));
    }

    #[test]
    fn test_execute_external_command() {
        let executor = test_executor();
        let args = ["-c".to_string(), "exit 3".to_string()];
        assert_eq!(executor.execute("sh", &args).unwrap(), LoopAction::Continue);
    }

    #[test]
    fn test_command_error_display() {
        let errors = vec![
            CommandError::HomeNotSet,
            CommandError::NoPreviousDirectory,
            CommandError::InvalidArguments("stat: missing file operand"),
            CommandError::SameFile("a".to_string(), "a".to_string()),
            CommandError::ExecutionError("failed".to_string()),
            CommandError::IoError(
                "cp: source".to_string(),
                std::io::Error::new(std::io::ErrorKind::NotFound, "io error"),
            ),
        ];

        for error in errors {
            assert!(!error.to_string().is_empty());
        }
    }

    #[test]
    fn test_not_found_message_names_command() {
        let executor = test_executor();
        let message = executor
            .execute("no_such_tool_here", &[])
            .unwrap_err()
            .to_string();
        assert_eq!(message, "command not found: no_such_tool_here");
    }
}
