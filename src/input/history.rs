use std::collections::VecDeque;

/// Number of command lines the shell remembers.
pub const HISTORY_MAX: usize = 20;

/// In-memory record of the lines entered this session, oldest first. Once
/// full, recording a new line drops the oldest one. Nothing touches disk.
pub struct HistoryRing {
    entries: VecDeque<String>,
    max_entries: usize,
}

impl HistoryRing {
    pub fn new(max_entries: usize) -> Self {
        HistoryRing {
            entries: VecDeque::with_capacity(max_entries),
            max_entries,
        }
    }

    /// Records a line. Blank lines are ignored; surrounding whitespace is
    /// not stored.
    pub fn record(&mut self, line: &str) {
        let line = line.trim();
        if line.is_empty() {
            return;
        }

        self.entries.push_back(line.to_owned());
        self.trim_entries();
    }

    /// Retained lines, oldest first.
    pub fn list(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn trim_entries(&mut self) {
        while self.entries.len() > self.max_entries {
            self.entries.pop_front();
        }
    }
}
