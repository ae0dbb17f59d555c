use std::env;
use std::sync::{Arc, Mutex};

use rustyline::{error::ReadlineError, history::FileHistory, Editor};

use crate::{
    core::commands::{CommandExecutor, LoopAction},
    error::ShellError,
    flags::Flags,
    input::{tokenize, HistoryRing, HISTORY_MAX},
    process::signal,
    prompt::{self, PromptHighlighter},
    style::Styler,
};

pub struct Shell {
    editor: Editor<PromptHighlighter, FileHistory>,
    executor: CommandExecutor,
    history: Arc<Mutex<HistoryRing>>,
    styler: Styler,
    user: String,
    flags: Flags,
}

impl Shell {
    pub fn new(flags: Flags) -> Result<Self, ShellError> {
        let mut editor = Editor::<PromptHighlighter, FileHistory>::new()?;
        editor.set_helper(Some(PromptHighlighter::new()));

        let history = Arc::new(Mutex::new(HistoryRing::new(HISTORY_MAX)));
        let executor = CommandExecutor::new(history.clone());

        // Resolved once; the prompt reuses it every iteration.
        let user = env::var("USER").unwrap_or_else(|_| "unknown".to_string());

        signal::install_interrupt_handler()?;

        Ok(Shell {
            editor,
            executor,
            history,
            styler: Styler::new(),
            user,
            flags,
        })
    }

    pub fn run(&mut self) -> Result<(), ShellError> {
        loop {
            let prompt = self.refresh_prompt();
            match self.editor.readline(&prompt) {
                Ok(line) => {
                    if line.trim().is_empty() {
                        continue;
                    }
                    self.remember(&line);

                    if self.dispatch(&line) == LoopAction::Exit {
                        break;
                    }
                }
                Err(ReadlineError::Interrupted) => continue,
                Err(ReadlineError::Eof) => {
                    println!();
                    break;
                }
                Err(e) => {
                    eprintln!("{}", self.styler.error(&format!("read error: {}", e)));
                    break;
                }
            }
        }
        Ok(())
    }

    /// Builds this iteration's prompt and hands its styled twin to the line
    /// editor. Returns the plain form that readline measures against.
    fn refresh_prompt(&mut self) -> String {
        let cwd = match env::current_dir() {
            Ok(dir) => dir.display().to_string(),
            Err(e) => {
                eprintln!("getcwd error: {}", e);
                "?".to_string()
            }
        };

        let styled = prompt::render_styled(&self.user, &cwd, &self.styler);
        if let Some(helper) = self.editor.helper_mut() {
            helper.set_colored_prompt(styled);
        }
        prompt::render_plain(&self.user, &cwd)
    }

    fn remember(&mut self, line: &str) {
        if let Err(e) = self.editor.add_history_entry(line) {
            if !self.flags.is_set("quiet") {
                eprintln!("Warning: couldn't add to history: {}", e);
            }
        }
        if let Ok(mut ring) = self.history.lock() {
            ring.record(line);
        }
    }

    fn dispatch(&self, line: &str) -> LoopAction {
        let args = tokenize(line);
        let Some((name, rest)) = args.split_first() else {
            return LoopAction::Continue;
        };

        match self.executor.execute(name, rest) {
            Ok(action) => action,
            Err(e) => {
                eprintln!("{}", self.styler.error(&e.to_string()));
                LoopAction::Continue
            }
        }
    }
}
