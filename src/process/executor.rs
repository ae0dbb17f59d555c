use std::io;
use std::process::{Command, Stdio};

use super::{signal, ProcessError};

/// Runs non-builtin commands as child processes, blocking until they finish.
#[derive(Clone)]
pub struct ProcessLauncher;

impl Default for ProcessLauncher {
    fn default() -> Self {
        Self::new()
    }
}

impl ProcessLauncher {
    pub fn new() -> Self {
        ProcessLauncher
    }

    /// Spawns `program` with `args` on the inherited streams and waits for
    /// it to finish. A wait interrupted by a signal is retried; the child's
    /// exit status is discarded either way.
    pub fn run(&self, program: &str, args: &[String]) -> Result<(), ProcessError> {
        let mut command = Command::new(program);
        command
            .args(args)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit());
        signal::reset_child_interrupt(&mut command);

        let mut child = match command.spawn() {
            Ok(child) => child,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return Err(ProcessError::CommandNotFound(program.to_string()));
            }
            Err(e) => return Err(ProcessError::Other(format!("{}: {}", program, e))),
        };

        loop {
            match child.wait() {
                Ok(_status) => break,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(ProcessError::Other(format!("wait: {}", e))),
            }
        }

        Ok(())
    }
}
