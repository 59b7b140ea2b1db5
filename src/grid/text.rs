//! Parser for the text grid format (see [`super::lexer`])

use crate::error::{GridParseError, Span};

use super::lexer::{lex, Token};
use super::{Grid, GridError, MIN_SIZE};

/// Parse a text grid. Blank lines and comments are ignored.
///
/// Border cells written as empty are filled in, like every other grid
/// constructor does.
pub fn parse_grid(input: &str) -> Result<Grid, GridParseError> {
    let mut rows: Vec<Vec<bool>> = Vec::new();
    let mut row_spans: Vec<Span> = Vec::new();
    let mut current: Vec<bool> = Vec::new();
    let mut current_span: Option<Span> = None;

    for (token, span) in lex(input) {
        match token {
            Ok(Token::Filled) | Ok(Token::Empty) => {
                current.push(token == Ok(Token::Filled));
                current_span = Some(match current_span {
                    Some(s) => s.start..span.end,
                    None => span,
                });
            }
            Ok(Token::Newline) => {
                if let Some(s) = current_span.take() {
                    rows.push(std::mem::take(&mut current));
                    row_spans.push(s);
                }
            }
            Err(()) => {
                let found = input[span.clone()].chars().next().unwrap_or('?');
                return Err(GridParseError::UnexpectedChar { span, found });
            }
        }
    }
    if let Some(s) = current_span {
        rows.push(current);
        row_spans.push(s);
    }

    Grid::from_rows(&rows).map_err(|err| match err {
        GridError::TooSmall { size } => GridParseError::TooSmall {
            span: 0..input.len(),
            size,
            min: MIN_SIZE,
        },
        GridError::NotSquare {
            row,
            expected,
            found,
        } => GridParseError::RowLength {
            span: row_spans[row].clone(),
            row,
            expected,
            found,
        },
    })
}
