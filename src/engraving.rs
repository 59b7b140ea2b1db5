//! Engraved text placed in the border bands of the panel

/// Longest engraving that fits along one band
pub const MAX_ENGRAVING_LEN: usize = 28;

/// Text rotation, clockwise
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Rotation {
    #[default]
    Deg0,
    Deg90,
    Deg180,
    Deg270,
}

impl Rotation {
    pub fn degrees(self) -> u16 {
        match self {
            Rotation::Deg0 => 0,
            Rotation::Deg90 => 90,
            Rotation::Deg180 => 180,
            Rotation::Deg270 => 270,
        }
    }

    /// Whether the text runs vertically
    pub fn is_vertical(self) -> bool {
        matches!(self, Rotation::Deg90 | Rotation::Deg270)
    }

    pub fn from_degrees(degrees: u16) -> Option<Self> {
        match degrees % 360 {
            0 => Some(Rotation::Deg0),
            90 => Some(Rotation::Deg90),
            180 => Some(Rotation::Deg180),
            270 => Some(Rotation::Deg270),
            _ => None,
        }
    }
}

/// One of the four border bands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Band {
    Top,
    Right,
    Bottom,
    Left,
}

impl Band {
    /// Band containing a border cell, or `None` for corners and interior cells
    pub fn at(row: usize, col: usize, grid_size: usize) -> Option<Band> {
        let last = grid_size.checked_sub(1)?;
        let inside = |i: usize| i > 0 && i < last;
        if row == 0 && inside(col) {
            Some(Band::Top)
        } else if col == last && inside(row) {
            Some(Band::Right)
        } else if row == last && inside(col) {
            Some(Band::Bottom)
        } else if col == 0 && inside(row) {
            Some(Band::Left)
        } else {
            None
        }
    }
}

/// A line of text anchored at a grid cell
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Engraving {
    pub text: String,
    pub row: usize,
    pub col: usize,
    pub rotation: Rotation,
}

impl Engraving {
    /// Create an engraving. The text is upper-cased and cut to
    /// [`MAX_ENGRAVING_LEN`] characters.
    pub fn new(text: &str, row: usize, col: usize, rotation: Rotation) -> Self {
        Self {
            text: normalize_text(text),
            row,
            col,
            rotation,
        }
    }

    /// Place text in a border band, reading clockwise around the panel
    pub fn in_band(text: &str, band: Band, grid_size: usize) -> Self {
        let last = grid_size.saturating_sub(1);
        match band {
            Band::Top => Self::new(text, 0, 1, Rotation::Deg0),
            Band::Right => Self::new(text, 1, last, Rotation::Deg90),
            Band::Bottom => Self::new(text, last, 1, Rotation::Deg180),
            Band::Left => Self::new(text, 1, 0, Rotation::Deg270),
        }
    }
}

/// Upper-case and truncate engraving text
pub fn normalize_text(text: &str) -> String {
    text.to_uppercase().chars().take(MAX_ENGRAVING_LEN).collect()
}
