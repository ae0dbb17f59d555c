use std::env;
use std::path::PathBuf;

#[derive(Clone)]
pub struct PathExpander;

impl Default for PathExpander {
    fn default() -> Self {
        Self::new()
    }
}

impl PathExpander {
    pub fn new() -> Self {
        Self
    }

    /// Value of `HOME`, or `None` when the variable is absent.
    pub fn home_dir(&self) -> Option<PathBuf> {
        env::var("HOME").ok().map(PathBuf::from)
    }

    /// Expands a leading `~` by splicing `HOME` in front of the rest of the
    /// string, so `~/src` becomes `$HOME/src`. Paths without a leading tilde
    /// come back unchanged. `None` means the expansion needed `HOME` and the
    /// variable is absent.
    pub fn expand(&self, path: &str) -> Option<PathBuf> {
        match path.strip_prefix('~') {
            Some(rest) => {
                let home = env::var("HOME").ok()?;
                Some(PathBuf::from(format!("{}{}", home, rest)))
            }
            None => Some(PathBuf::from(path)),
        }
    }
}
