//! Error types for reading text grids

use ariadne::{Color, Label, Report, ReportKind, Source};
use thiserror::Error;

/// Byte range in source text
pub type Span = std::ops::Range<usize>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GridParseError {
    #[error("unexpected character '{found}' at {span:?}")]
    UnexpectedChar { span: Span, found: char },

    #[error("row {row} has {found} cells, expected {expected}")]
    RowLength {
        span: Span,
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("grid has {size} rows, at least {min} are needed")]
    TooSmall { span: Span, size: usize, min: usize },
}

impl GridParseError {
    /// Source span the error points at
    pub fn span(&self) -> &Span {
        match self {
            Self::UnexpectedChar { span, .. }
            | Self::RowLength { span, .. }
            | Self::TooSmall { span, .. } => span,
        }
    }

    fn hint(&self) -> Option<&'static str> {
        match self {
            Self::UnexpectedChar { .. } => Some("use '#' for filled cells and '.' for empty ones"),
            Self::RowLength { .. } => Some("every row needs as many cells as there are rows"),
            Self::TooSmall { .. } => None,
        }
    }

    /// Format the error with source context using ariadne
    pub fn format(&self, source: &str, filename: &str) -> String {
        let mut buf = Vec::new();
        let span = self.span().clone();
        let message = self.to_string();

        let mut report = Report::build(ReportKind::Error, filename, span.start)
            .with_message(&message)
            .with_label(
                Label::new((filename, span))
                    .with_message(&message)
                    .with_color(Color::Red),
            );
        if let Some(hint) = self.hint() {
            report = report.with_help(hint);
        }

        if report
            .finish()
            .write((filename, Source::from(source)), &mut buf)
            .is_err()
        {
            return message;
        }
        String::from_utf8_lossy(&buf).into_owned()
    }
}
