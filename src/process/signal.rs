use std::io::{self, Write};
use std::os::unix::process::CommandExt;
use std::process::Command;

use libc::{signal, SIG_DFL, SIGINT};

/// Installs the shell's Ctrl-C handler. The handler only writes a newline;
/// the interrupted read already comes back as a fresh prompt.
pub fn install_interrupt_handler() -> Result<(), ctrlc::Error> {
    ctrlc::set_handler(|| {
        let _ = io::stdout().write_all(b"\n");
    })
}

/// Reverts SIGINT to its default disposition in the child between fork and
/// exec, so Ctrl-C kills the foreground command while the shell survives.
pub fn reset_child_interrupt(command: &mut Command) {
    unsafe {
        command.pre_exec(|| {
            signal(SIGINT, SIG_DFL);
            Ok(())
        });
    }
}
