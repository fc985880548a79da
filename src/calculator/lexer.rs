use logos::Logos;

/// Represents a lexical token in a single line of user input.
///
/// The calculator never parses expressions; it only needs to recognize a lone
/// operator symbol or the exit keyword. Whitespace is skipped, and anything
/// else is a lexing error.
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy)]
#[logos(skip r"[ \t\r\n\f]+")]
pub enum Token {
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `quit`, in any letter case.
    #[token("quit", ignore(ascii_case))]
    Quit,
}

/// Lexes `input` and returns its token if it consists of exactly one.
///
/// # Example
/// ```
/// use quickcalc::calculator::lexer::{Token, single_token};
///
/// assert_eq!(single_token(" QUIT "), Some(Token::Quit));
/// assert_eq!(single_token("+"), Some(Token::Plus));
/// assert_eq!(single_token("+ +"), None);
/// assert_eq!(single_token("42"), None);
/// ```
#[must_use]
pub fn single_token(input: &str) -> Option<Token> {
    let mut lexer = Token::lexer(input);

    match (lexer.next(), lexer.next()) {
        (Some(Ok(token)), None) => Some(token),
        _ => None,
    }
}

/// Returns `true` if `input` is the exit keyword.
#[must_use]
pub fn is_quit(input: &str) -> bool {
    single_token(input) == Some(Token::Quit)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quit_is_case_insensitive() {
        for text in ["quit", "QUIT", "Quit", "qUiT", "  quit\n"] {
            assert!(is_quit(text), "'{text}' should quit");
        }
    }

    #[test]
    fn quit_must_stand_alone() {
        for text in ["", "q", "exit", "quit now", "quitquit", "quit!", "5"] {
            assert!(!is_quit(text), "'{text}' should not quit");
        }
    }

    #[test]
    fn lexes_operator_symbols() {
        assert_eq!(single_token("+"), Some(Token::Plus));
        assert_eq!(single_token("-"), Some(Token::Minus));
        assert_eq!(single_token("*"), Some(Token::Star));
        assert_eq!(single_token("/"), Some(Token::Slash));
    }

    #[test]
    fn blank_input_has_no_token() {
        assert_eq!(single_token(""), None);
        assert_eq!(single_token(" \t "), None);
    }
}
