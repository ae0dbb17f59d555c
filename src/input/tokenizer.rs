/// Size of the argument table. Following the `execvp` argv convention one
/// slot belongs to the terminator, so a line yields at most `MAX_ARGS - 1`
/// tokens; anything past that is silently dropped.
pub const MAX_ARGS: usize = 64;

/// Splits a command line into tokens.
///
/// Outside double quotes, runs of spaces and tabs separate tokens. A double
/// quote toggles quoting and is never copied into a token: while quoting is
/// on, whitespace is kept verbatim, and the quote that turns it off also
/// closes the current token. A quote left open at the end of the line keeps
/// everything up to the end, trailing whitespace included.
pub fn tokenize(line: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;

    for ch in line.chars() {
        if ch == '"' {
            in_quotes = !in_quotes;
            if !in_quotes {
                close_token(&mut tokens, &mut current);
            }
            continue;
        }

        if !in_quotes && is_separator(ch) {
            close_token(&mut tokens, &mut current);
        } else {
            current.push(ch);
        }
    }
    close_token(&mut tokens, &mut current);

    tokens
}

fn is_separator(ch: char) -> bool {
    ch == ' ' || ch == '\t'
}

fn close_token(tokens: &mut Vec<String>, current: &mut String) {
    if !current.is_empty() && tokens.len() < MAX_ARGS - 1 {
        tokens.push(std::mem::take(current));
    }
    current.clear();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_splits_on_spaces_and_tabs() {
        assert_eq!(tokenize("ls -l /tmp"), ["ls", "-l", "/tmp"]);
        assert_eq!(tokenize("ls\t-l\t \t/tmp"), ["ls", "-l", "/tmp"]);
    }

    #[test]
    fn test_collapses_separator_runs() {
        assert_eq!(tokenize("  echo    hi  "), ["echo", "hi"]);
    }

    #[test]
    fn test_blank_line_yields_nothing() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("   \t  ").is_empty());
    }

    #[test]
    fn test_quoted_group_keeps_whitespace() {
        assert_eq!(
            tokenize(r#"echo "hello   world" done"#),
            ["echo", "hello   world", "done"]
        );
        assert_eq!(tokenize("grep \"a\tb\""), ["grep", "a\tb"]);
    }

    #[test]
    fn test_quote_characters_never_copied() {
        for line in [r#""quoted""#, r#"a "b c" d"#, r#"""#, r#"x "y"#] {
            for token in tokenize(line) {
                assert!(!token.contains('"'), "quote leaked in {:?}", token);
            }
        }
    }

    #[test]
    fn test_closing_quote_ends_token() {
        assert_eq!(tokenize(r#""foo"bar"#), ["foo", "bar"]);
        assert_eq!(tokenize(r#""a b"c d"#), ["a b", "c", "d"]);
    }

    #[test]
    fn test_empty_quotes_yield_no_token() {
        assert!(tokenize(r#""""#).is_empty());
        assert_eq!(tokenize(r#""" x"#), ["x"]);
    }

    #[test]
    fn test_unterminated_quote_keeps_remainder() {
        assert_eq!(tokenize(r#"echo "one two"#), ["echo", "one two"]);
        // Trailing whitespace inside the open quote is part of the token.
        assert_eq!(tokenize("echo \"one two   "), ["echo", "one two   "]);
    }

    #[test]
    fn test_token_cap_drops_overflow() {
        let words: Vec<String> = (0..100).map(|i| format!("w{}", i)).collect();
        let line = words.join(" ");

        let tokens = tokenize(&line);
        assert_eq!(tokens.len(), MAX_ARGS - 1);
        assert_eq!(tokens[0], "w0");
        assert_eq!(tokens[MAX_ARGS - 2], format!("w{}", MAX_ARGS - 2));
    }
}
