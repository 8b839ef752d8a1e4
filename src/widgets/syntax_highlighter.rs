// ABOUTME: Syntax highlighting for the generated Python blocks on the code panel
// Produces ANSI-colored lines that the code viewer converts into ratatui text

use lazy_static::lazy_static;
use syntect::easy::HighlightLines;
use syntect::highlighting::ThemeSet;
use syntect::parsing::SyntaxSet;
use syntect::util::{as_24_bit_terminal_escaped, LinesWithEndings};
use tracing::warn;

/// Language token of every generated code block
pub const CODE_LANGUAGE: &str = "python";

const THEME_NAME: &str = "base16-ocean.dark";

lazy_static! {
    static ref SYNTAX_SET: SyntaxSet = SyntaxSet::load_defaults_newlines();
    static ref THEME_SET: ThemeSet = ThemeSet::load_defaults();
}

/// Apply syntax highlighting to code and return an ANSI-colored string.
///
/// Falls back to the plain text when the language or theme is unknown or a
/// line fails to highlight.
pub fn highlight_code(code: &str, language: &str) -> String {
    let Some(syntax) = SYNTAX_SET.find_syntax_by_token(language) else {
        return code.to_string();
    };
    let Some(theme) = THEME_SET.themes.get(THEME_NAME) else {
        return code.to_string();
    };
    let mut highlighter = HighlightLines::new(syntax, theme);

    let mut colored = String::new();
    for line in LinesWithEndings::from(code) {
        match highlighter.highlight_line(line, &SYNTAX_SET) {
            Ok(ranges) => {
                let escaped = as_24_bit_terminal_escaped(&ranges[..], false);
                // Reset at the end of every line so styles never bleed into the gutter
                colored.push_str(escaped.trim_end_matches('\n'));
                colored.push_str("\x1b[0m");
                if line.ends_with('\n') {
                    colored.push('\n');
                }
            }
            Err(e) => {
                warn!("Syntax highlighting failed, showing plain code: {}", e);
                return code.to_string();
            }
        }
    }

    colored
}

/// Format code block with a line-number gutter and optional highlighting
pub fn format_code_block(code: &str, use_highlighting: bool) -> Vec<String> {
    let body = if use_highlighting {
        highlight_code(code, CODE_LANGUAGE)
    } else {
        code.to_string()
    };

    body.lines()
        .enumerate()
        .map(|(i, line)| format!("{:>4} │ {}", i + 1, line))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::code::CONFIGURATION;

    #[test]
    fn test_plain_block_numbers_every_line() {
        let formatted = format_code_block(CONFIGURATION, false);

        assert_eq!(formatted.len(), CONFIGURATION.lines().count());
        assert_eq!(formatted[0], "   1 │ # Configuration settings");
        assert!(formatted[1].starts_with("   2 │ "));
    }

    #[test]
    fn test_highlighting_adds_ansi_codes() {
        let colored = highlight_code("def check(amount):\n    return amount > 9000\n", CODE_LANGUAGE);
        assert!(colored.contains("\x1b["));
        assert!(colored.contains("check"));
    }

    #[test]
    fn test_highlighted_block_keeps_line_count() {
        let formatted = format_code_block(CONFIGURATION, true);
        assert_eq!(formatted.len(), CONFIGURATION.lines().count());
        assert!(formatted[0].starts_with("   1 │ "));
    }

    #[test]
    fn test_unknown_language_is_left_plain() {
        let code = "plain words";
        assert_eq!(highlight_code(code, "no-such-language"), code);
    }
}
