use std::borrow::Cow;

use rustyline::{
    completion::Completer,
    highlight::{CmdKind, Highlighter},
    hint::Hinter,
    validate::Validator,
    Helper,
};

use crate::style::Styler;

/// Plain `[user:cwd] $ ` prompt. This is what the line editor measures
/// cursor positions against, so it carries no escape sequences.
pub fn render_plain(user: &str, cwd: &str) -> String {
    format!("[{}:{}] $ ", user, cwd)
}

/// Styled twin of [`render_plain`], shown in place of it at display time.
pub fn render_styled(user: &str, cwd: &str, styler: &Styler) -> String {
    format!("[{}:{}] $ ", styler.user(user), styler.path(cwd))
}

/// rustyline helper that substitutes the styled prompt for the plain one
/// when the line is drawn.
pub struct PromptHighlighter {
    colored_prompt: String,
}

impl Default for PromptHighlighter {
    fn default() -> Self {
        Self::new()
    }
}

impl PromptHighlighter {
    pub fn new() -> Self {
        PromptHighlighter {
            colored_prompt: String::new(),
        }
    }

    pub fn set_colored_prompt(&mut self, styled: String) {
        self.colored_prompt = styled;
    }
}

impl Helper for PromptHighlighter {}

impl Highlighter for PromptHighlighter {
    fn highlight_prompt<'b, 's: 'b, 'p: 'b>(
        &'s self,
        prompt: &'p str,
        default: bool,
    ) -> Cow<'b, str> {
        if default && !self.colored_prompt.is_empty() {
            Cow::Borrowed(&self.colored_prompt)
        } else {
            Cow::Borrowed(prompt)
        }
    }

    fn highlight_char(&self, _line: &str, _pos: usize, _kind: CmdKind) -> bool {
        false
    }
}

impl Hinter for PromptHighlighter {
    type Hint = String;
}

impl Validator for PromptHighlighter {}

impl Completer for PromptHighlighter {
    type Candidate = String;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_prompt_format() {
        assert_eq!(render_plain("alice", "/tmp"), "[alice:/tmp] $ ");
    }

    #[test]
    fn test_styled_prompt_keeps_segments() {
        let styler = Styler::new();
        let styled = render_styled("alice", "/tmp", &styler);
        assert!(styled.contains("alice"));
        assert!(styled.contains("/tmp"));
        assert!(styled.starts_with('['));
        assert!(styled.ends_with("] $ "));
    }

    #[test]
    fn test_helper_prefers_colored_prompt() {
        let mut helper = PromptHighlighter::new();
        helper.set_colored_prompt("[styled] $ ".to_string());
        assert_eq!(helper.highlight_prompt("[plain] $ ", true), "[styled] $ ");
        assert_eq!(helper.highlight_prompt("[plain] $ ", false), "[plain] $ ");
    }
}
