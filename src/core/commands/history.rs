use std::sync::{Arc, Mutex};

use super::{Command, CommandError, LoopAction};
use crate::input::HistoryRing;

#[derive(Clone)]
pub struct HistoryCommand {
    history: Arc<Mutex<HistoryRing>>,
}

impl HistoryCommand {
    pub fn new(history: Arc<Mutex<HistoryRing>>) -> Self {
        Self { history }
    }
}

impl Command for HistoryCommand {
    fn execute(&self, _args: &[String]) -> Result<LoopAction, CommandError> {
        let history = self
            .history
            .lock()
            .map_err(|_| CommandError::ExecutionError("history unavailable".to_string()))?;

        for line in history.list() {
            println!("{}", line);
        }
        Ok(LoopAction::Continue)
    }
}
