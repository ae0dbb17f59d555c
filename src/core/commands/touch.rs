use std::fs::{FileTimes, OpenOptions};
use std::io::Write;
use std::time::SystemTime;

use super::{Command, CommandError, LoopAction};

/// Paragraph appended by `touch -lo`.
const LOREM_IPSUM: &str = "Lorem ipsum dolor sit amet, consectetur adipiscing elit. \
Sed do eiusmod tempor incididunt ut labore et dolore magna aliqua. \
Ut enim ad minim veniam, quis nostrud exercitation ullamco laboris \
nisi ut aliquip ex ea commodo consequat.\n";

/// Creates the named file if it is missing and stamps both of its times
/// with the current time. With `-lo` it also appends a sample paragraph.
#[derive(Clone)]
pub struct TouchCommand;

impl Default for TouchCommand {
    fn default() -> Self {
        Self::new()
    }
}

impl TouchCommand {
    pub fn new() -> Self {
        Self
    }
}

impl Command for TouchCommand {
    fn execute(&self, args: &[String]) -> Result<LoopAction, CommandError> {
        let (fill, path) = match args.first().map(String::as_str) {
            None => {
                return Err(CommandError::InvalidArguments("touch: missing file operand"));
            }
            Some("-lo") => match args.get(1) {
                Some(path) => (true, path.as_str()),
                None => {
                    return Err(CommandError::InvalidArguments(
                        "touch: missing file operand after -lo",
                    ));
                }
            },
            Some(path) => (false, path),
        };

        let mut file = OpenOptions::new()
            .append(true)
            .create(true)
            .open(path)
            .map_err(|e| CommandError::IoError("touch".to_string(), e))?;

        if fill {
            file.write_all(LOREM_IPSUM.as_bytes())
                .map_err(|e| CommandError::IoError("touch: write".to_string(), e))?;
            println!("File '{}' filled with Lorem Ipsum content.", path);
        }

        let now = SystemTime::now();
        let times = FileTimes::new().set_accessed(now).set_modified(now);
        file.set_times(times)
            .map_err(|e| CommandError::IoError("touch: set times".to_string(), e))?;

        Ok(LoopAction::Continue)
    }
}
