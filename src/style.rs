use inksac::prelude::*;

/// Styles the prompt segments and diagnostics, falling back to plain text
/// when the terminal reports no color support.
#[derive(Debug, Clone, Copy)]
pub struct Styler {
    color_support: ColorSupport,
}

impl Default for Styler {
    fn default() -> Self {
        Self::new()
    }
}

impl Styler {
    pub fn new() -> Self {
        let support = check_color_support().unwrap_or(ColorSupport::NoColor);
        Self {
            color_support: support,
        }
    }

    /// User segment of the prompt.
    pub fn user(&self, name: &str) -> String {
        if matches!(self.color_support, ColorSupport::NoColor) {
            return name.to_string();
        }

        let user_style = Style::builder().foreground(Color::Red).bold().build();

        name.style(user_style).to_string()
    }

    /// Working-directory segment of the prompt.
    pub fn path(&self, dir: &str) -> String {
        if matches!(self.color_support, ColorSupport::NoColor) {
            return dir.to_string();
        }

        let path_style = Style::builder().foreground(Color::Blue).bold().build();

        dir.style(path_style).to_string()
    }

    /// Diagnostics printed to standard error.
    pub fn error(&self, message: &str) -> String {
        if matches!(self.color_support, ColorSupport::NoColor) {
            return message.to_string();
        }

        let error_style = Style::builder().foreground(Color::Red).bold().build();

        message.style(error_style).to_string()
    }
}
