use std::fs;
use std::os::unix::fs::MetadataExt;

use chrono::{DateTime, Local};

use super::{Command, CommandError, LoopAction};

#[derive(Clone)]
pub struct StatCommand;

impl Default for StatCommand {
    fn default() -> Self {
        Self::new()
    }
}

impl StatCommand {
    pub fn new() -> Self {
        Self
    }
}

impl Command for StatCommand {
    fn execute(&self, args: &[String]) -> Result<LoopAction, CommandError> {
        let path = args
            .first()
            .ok_or(CommandError::InvalidArguments("stat: missing file operand"))?;

        let meta =
            fs::metadata(path).map_err(|e| CommandError::IoError("stat".to_string(), e))?;
        let modified: DateTime<Local> = meta
            .modified()
            .map_err(|e| CommandError::IoError("stat".to_string(), e))?
            .into();

        println!(" File: {}", path);
        println!(" Size: {}", meta.len());
        println!(" Inode: {}", meta.ino());
        println!(
            " Type: {}",
            if meta.is_dir() { "directory" } else { "regular file" }
        );
        println!(" Access: ({:04o})", meta.mode() & 0o777);
        println!(" Uid: {}    Gid: {}", meta.uid(), meta.gid());
        println!(" Modify: {}", modified.format("%c"));

        Ok(LoopAction::Continue)
    }
}
