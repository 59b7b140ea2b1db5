//! Compact hexadecimal code for sharing a grid (e.g. in a URL fragment)
//!
//! The interior of the grid is read row-major as a bitstring (filled = 1),
//! zero-padded to a whole number of nibbles and written one hex digit per
//! nibble, most significant bit first. Every code for a grid of side `S`
//! has exactly ⌈(S-2)²/4⌉ digits, except that a grid with an empty interior
//! encodes to the empty string.

use thiserror::Error;

use super::{Grid, GridError};

/// Errors raised while decoding a grid code
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GridCodeError {
    #[error("invalid character '{found}' at position {position} (expected a hex digit)")]
    InvalidDigit { position: usize, found: char },

    #[error("code has {len} digits but a grid of this size needs {expected}")]
    WrongLength { len: usize, expected: usize },

    #[error("padding bits after the last cell must be zero")]
    NonZeroPadding,

    #[error(transparent)]
    Grid(#[from] GridError),
}

/// Encode the interior of a grid
pub fn encode(grid: &Grid) -> String {
    if grid.is_interior_empty() {
        return String::new();
    }

    let bits: Vec<bool> = grid
        .interior()
        .map(|p| grid.is_filled(p.row, p.col))
        .collect();

    bits
        .chunks(4)
        .map(|chunk| {
            let nibble = chunk
                .iter()
                .enumerate()
                .fold(0u32, |acc, (i, &bit)| acc | (u32::from(bit) << (3 - i)));
            char::from_digit(nibble, 16).unwrap_or('0')
        })
        .collect()
}

/// Decode a grid code for a grid with the given side length
pub fn decode(code: &str, size: usize) -> Result<Grid, GridCodeError> {
    let mut grid = Grid::new(size)?;
    let interior = size - 2;
    let cell_count = interior * interior;
    let expected = cell_count.div_ceil(4);

    if code.is_empty() {
        return Ok(grid);
    }
    let len = code.chars().count();
    if len != expected {
        return Err(GridCodeError::WrongLength { len, expected });
    }

    for (position, found) in code.chars().enumerate() {
        let nibble = found
            .to_digit(16)
            .ok_or(GridCodeError::InvalidDigit { position, found })?;
        for bit in 0..4 {
            if nibble & (1 << (3 - bit)) == 0 {
                continue;
            }
            let index = position * 4 + bit;
            if index >= cell_count {
                return Err(GridCodeError::NonZeroPadding);
            }
            grid.set(1 + index / interior, 1 + index % interior, true);
        }
    }

    Ok(grid)
}

/// Decode a grid code, falling back to a border-only grid on malformed input.
///
/// A `size` below [`MIN_SIZE`](super::MIN_SIZE) cannot hold any grid. The
/// fallback is then the reference-size [`Grid::default`], so check `size()`
/// on the result if the size came from untrusted input.
pub fn decode_or_default(code: &str, size: usize) -> Grid {
    match decode(code, size) {
        Ok(grid) => grid,
        Err(err) => {
            tracing::debug!(%err, "malformed grid code, using an empty design");
            Grid::new(size).unwrap_or_else(|err| {
                tracing::warn!(%err, size, "unusable grid size, using the reference size");
                Grid::default()
            })
        }
    }
}
