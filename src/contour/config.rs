//! Physical dimensions of the panel
//!
//! Sizes that scale with the grid are given as fractions of one cell; the
//! rest are absolute and in inches. A profile can be loaded from TOML, with
//! any missing key taking its default:
//!
//! ```toml
//! total_width = 4.5
//! interior_fillet = 0.2
//! alignment_holes = [[1, 1], [14, 14]]
//! ```

use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::grid::CellPos;

/// Errors that can occur when loading a dimensions profile
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read dimensions file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse dimensions TOML: {0}")]
    ParseError(#[from] toml::de::Error),
    #[error("invalid value for '{field}': {reason}")]
    Invalid { field: &'static str, reason: String },
}

/// Configuration of the panel geometry
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PanelDimensions {
    /// Side length of the finished panel, in inches
    pub total_width: f64,

    /// Corner radius of the outer border (cells)
    pub border_radius: f64,

    /// Radius of the four corner screw holes (cells)
    pub screw_hole_radius: f64,

    /// How far the screw holes move towards the center on both axes (inches)
    pub screw_hole_offset: f64,

    /// Radius of the ball/peg alignment holes (cells)
    pub alignment_hole_radius: f64,

    /// Fillet at concave corners (cells)
    pub interior_fillet: f64,

    /// Fillet at convex corners (cells)
    pub exterior_fillet: f64,

    /// Fillet at corners where two cells touch only diagonally (cells)
    pub diagonal_fillet: f64,

    /// Engraving font size (inches)
    pub font_size: f64,

    /// Baseline shift that centers engraving text in its band (inches)
    pub text_baseline_offset: f64,

    /// Width of cut lines (inches)
    pub stroke_width: f64,

    /// Cells that must stay open. Defaults to two opposite interior corners.
    pub alignment_holes: Option<Vec<[usize; 2]>>,
}

impl Default for PanelDimensions {
    fn default() -> Self {
        Self {
            total_width: 3.95,
            border_radius: 0.5,
            screw_hole_radius: 0.25,
            screw_hole_offset: 0.01875,
            alignment_hole_radius: 0.4,
            interior_fillet: 1.0 / 6.0,
            exterior_fillet: 0.1,
            diagonal_fillet: 0.25,
            font_size: 0.13,
            text_baseline_offset: 0.045,
            stroke_width: 0.01,
            alignment_holes: None,
        }
    }
}

/// Fillet radii in absolute units
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FilletRadii {
    pub interior: f64,
    pub exterior: f64,
    pub diagonal: f64,
}

/// Dimensions resolved for a grid of a particular size, all in inches
#[derive(Debug, Clone, PartialEq)]
pub struct PanelMetrics {
    pub grid_size: usize,
    pub total_width: f64,
    pub cell_size: f64,
    pub border_radius: f64,
    pub screw_hole_radius: f64,
    pub screw_hole_offset: f64,
    pub alignment_hole_radius: f64,
    pub fillets: FilletRadii,
    pub font_size: f64,
    pub text_baseline_offset: f64,
    pub stroke_width: f64,
    pub alignment_holes: Vec<CellPos>,
}

impl PanelDimensions {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Load dimensions from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// Load dimensions from a TOML string
    pub fn from_str(content: &str) -> Result<Self, ConfigError> {
        let dims: PanelDimensions = toml::from_str(content)?;
        dims.validate()?;
        Ok(dims)
    }

    /// Set the panel width in inches
    pub fn with_total_width(mut self, width: f64) -> Self {
        self.total_width = width;
        self
    }

    /// Set the alignment hole cells
    pub fn with_alignment_holes(mut self, holes: Vec<[usize; 2]>) -> Self {
        self.alignment_holes = Some(holes);
        self
    }

    /// Check that every size is usable
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("total_width", self.total_width),
            ("screw_hole_radius", self.screw_hole_radius),
            ("alignment_hole_radius", self.alignment_hole_radius),
            ("font_size", self.font_size),
            ("stroke_width", self.stroke_width),
        ];
        for (field, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::Invalid {
                    field,
                    reason: format!("{} must be a positive number", value),
                });
            }
        }

        // A fillet wider than half a cell would run past the neighbouring corner
        let fractions = [
            ("border_radius", self.border_radius),
            ("interior_fillet", self.interior_fillet),
            ("exterior_fillet", self.exterior_fillet),
            ("diagonal_fillet", self.diagonal_fillet),
        ];
        for (field, value) in fractions {
            if !(value.is_finite() && value > 0.0 && value <= 0.5) {
                return Err(ConfigError::Invalid {
                    field,
                    reason: format!("{} must be in (0, 0.5] cells", value),
                });
            }
        }

        for (field, value) in [
            ("screw_hole_offset", self.screw_hole_offset),
            ("text_baseline_offset", self.text_baseline_offset),
        ] {
            if !value.is_finite() {
                return Err(ConfigError::Invalid {
                    field,
                    reason: "must be finite".to_string(),
                });
            }
        }
        Ok(())
    }

    /// Alignment hole cells for a grid of the given size.
    ///
    /// Configured holes outside the interior are dropped.
    pub fn alignment_holes(&self, grid_size: usize) -> Vec<CellPos> {
        let last = grid_size.saturating_sub(2);
        let mut holes: Vec<CellPos> = match &self.alignment_holes {
            Some(holes) => holes
                .iter()
                .map(|&[row, col]| CellPos::new(row, col))
                .filter(|p| (1..=last).contains(&p.row) && (1..=last).contains(&p.col))
                .collect(),
            None if last >= 1 => vec![CellPos::new(1, 1), CellPos::new(last, last)],
            None => Vec::new(),
        };
        holes.dedup();
        holes
    }

    /// Resolve the dimensions for a grid of the given size
    pub fn metrics(&self, grid_size: usize) -> PanelMetrics {
        let cell_size = self.total_width / grid_size.max(1) as f64;
        PanelMetrics {
            grid_size,
            total_width: self.total_width,
            cell_size,
            border_radius: self.border_radius * cell_size,
            screw_hole_radius: self.screw_hole_radius * cell_size,
            screw_hole_offset: self.screw_hole_offset,
            alignment_hole_radius: self.alignment_hole_radius * cell_size,
            fillets: FilletRadii {
                interior: self.interior_fillet * cell_size,
                exterior: self.exterior_fillet * cell_size,
                diagonal: self.diagonal_fillet * cell_size,
            },
            font_size: self.font_size,
            text_baseline_offset: self.text_baseline_offset,
            stroke_width: self.stroke_width,
            alignment_holes: self.alignment_holes(grid_size),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let dims = PanelDimensions::default();
        assert_eq!(dims.total_width, 3.95);
        assert!(dims.validate().is_ok());
        assert!(dims.diagonal_fillet > dims.interior_fillet);
    }

    #[test]
    fn test_metrics_scale_with_cell() {
        let metrics = PanelDimensions::new().with_total_width(4.0).metrics(16);
        assert_eq!(metrics.cell_size, 0.25);
        assert_eq!(metrics.border_radius, 0.125);
        assert_eq!(metrics.fillets.exterior, 0.025);
        assert_eq!(metrics.fillets.diagonal, 0.0625);
    }

    #[test]
    fn test_default_alignment_holes() {
        let dims = PanelDimensions::default();
        assert_eq!(
            dims.alignment_holes(16),
            vec![CellPos::new(1, 1), CellPos::new(14, 14)]
        );
        assert_eq!(dims.alignment_holes(3), vec![CellPos::new(1, 1)]);
    }

    #[test]
    fn test_configured_holes_outside_interior_dropped() {
        let dims = PanelDimensions::new().with_alignment_holes(vec![[0, 3], [5, 5], [15, 2]]);
        assert_eq!(dims.alignment_holes(16), vec![CellPos::new(5, 5)]);
    }

    #[test]
    fn test_partial_toml() {
        let dims = PanelDimensions::from_str("total_width = 5.0\nalignment_holes = [[2, 3]]")
            .expect("Should parse");
        assert_eq!(dims.total_width, 5.0);
        assert_eq!(dims.exterior_fillet, 0.1);
        assert_eq!(dims.alignment_holes, Some(vec![[2, 3]]));
    }

    #[test]
    fn test_unknown_key_rejected() {
        assert!(matches!(
            PanelDimensions::from_str("cell_count = 12"),
            Err(ConfigError::ParseError(_))
        ));
    }

    #[test]
    fn test_invalid_value_rejected() {
        let err = PanelDimensions::from_str("interior_fillet = 0.8").unwrap_err();
        assert!(err.to_string().contains("interior_fillet"));
        let err = PanelDimensions::from_str("total_width = -1.0").unwrap_err();
        assert!(err.to_string().contains("total_width"));
    }
}
