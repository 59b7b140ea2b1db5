//! Lexer for the text grid format using logos
//!
//! One line per grid row. `#`, `X`, `x` or `1` mark a filled cell, `.`, `_`
//! or `0` an empty one. Spaces and tabs between cells are ignored, and `;` starts a
//! comment that runs to the end of the line.

use logos::Logos;

use crate::error::Span;

#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
#[logos(skip r"([ \t\r]+|;[^\n]*)")]
pub enum Token {
    #[regex(r"[#Xx1]")]
    Filled,

    #[regex(r"[._0]")]
    Empty,

    #[token("\n")]
    Newline,
}

/// Tokenize a text grid. Unrecognized characters come back as `Err(())`
/// with their span so the parser can report them.
pub fn lex(input: &str) -> impl Iterator<Item = (Result<Token, ()>, Span)> + '_ {
    Token::lexer(input).spanned()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(input: &str) -> Vec<Result<Token, ()>> {
        lex(input).map(|(t, _)| t).collect()
    }

    #[test]
    fn test_cell_tokens() {
        assert_eq!(
            tokens("#.X_10x"),
            vec![
                Ok(Token::Filled),
                Ok(Token::Empty),
                Ok(Token::Filled),
                Ok(Token::Empty),
                Ok(Token::Filled),
                Ok(Token::Empty),
                Ok(Token::Filled),
            ]
        );
    }

    #[test]
    fn test_whitespace_and_comments_skipped() {
        assert_eq!(
            tokens("# . ; a comment\r\n#"),
            vec![
                Ok(Token::Filled),
                Ok(Token::Empty),
                Ok(Token::Newline),
                Ok(Token::Filled),
            ]
        );
    }

    #[test]
    fn test_unknown_character_is_error() {
        let lexed: Vec<_> = lex("#?").collect();
        assert_eq!(lexed[1], (Err(()), 1..2));
    }
}
