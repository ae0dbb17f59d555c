use std::fs::{self, File};
use std::io::{Read, Write};
use std::os::unix::fs::MetadataExt;

use super::{Command, CommandError, LoopAction};

/// Chunk size for the copy loop.
const COPY_BUF_SIZE: usize = 16 * 1024;

/// Copies one regular file to another in fixed-size chunks and carries the
/// source's permission bits over to the destination.
#[derive(Clone)]
pub struct CpCommand;

impl Default for CpCommand {
    fn default() -> Self {
        Self::new()
    }
}

impl CpCommand {
    pub fn new() -> Self {
        Self
    }
}

impl Command for CpCommand {
    fn execute(&self, args: &[String]) -> Result<LoopAction, CommandError> {
        let (src, dst) = match (args.first(), args.get(1)) {
            (Some(src), Some(dst)) => (src, dst),
            _ => return Err(CommandError::InvalidArguments("cp: missing file operand")),
        };

        let src_meta =
            fs::metadata(src).map_err(|e| CommandError::IoError("cp: stat".to_string(), e))?;

        // Refuse to copy a file onto itself before the destination is
        // opened, so it is left untouched.
        if let Ok(dst_meta) = fs::metadata(dst) {
            if src_meta.dev() == dst_meta.dev() && src_meta.ino() == dst_meta.ino() {
                return Err(CommandError::SameFile(src.clone(), dst.clone()));
            }
        }

        let mut source =
            File::open(src).map_err(|e| CommandError::IoError("cp: source".to_string(), e))?;
        let mut destination = File::create(dst)
            .map_err(|e| CommandError::IoError("cp: destination".to_string(), e))?;

        let mut buffer = [0u8; COPY_BUF_SIZE];
        loop {
            let n = source
                .read(&mut buffer)
                .map_err(|e| CommandError::IoError("cp: read".to_string(), e))?;
            if n == 0 {
                break;
            }
            destination
                .write_all(&buffer[..n])
                .map_err(|e| CommandError::IoError("cp: write".to_string(), e))?;
        }

        fs::set_permissions(dst, src_meta.permissions())
            .map_err(|e| CommandError::IoError("cp: permissions".to_string(), e))?;

        Ok(LoopAction::Continue)
    }
}
