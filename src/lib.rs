//! Maze Panel - contour-traced SVG panels from a grid of cells
//!
//! This library turns a square grid of filled and empty cells into a
//! fabrication-ready SVG: filleted cut outlines, screw and alignment holes,
//! and engraved text around the frame.
//!
//! # Example
//!
//! ```rust
//! use maze_panel::{render, Grid, RenderOptions};
//!
//! let svg = render(&Grid::default(), &[], &RenderOptions::default()).unwrap();
//! assert!(svg.contains("<svg"));
//! ```

pub mod contour;
pub mod engraving;
pub mod error;
pub mod grid;
pub mod palette;
pub mod renderer;

pub use contour::{trace, ContourSet, DesignIssue, IssueCategory, PanelDimensions};
pub use engraving::{Band, Engraving, Rotation};
pub use error::GridParseError;
pub use grid::{decode, decode_or_default, encode, parse_grid, CellPos, Grid, GridCodeError};
pub use palette::Palette;
pub use renderer::SvgConfig;

/// How the panel is drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderMode {
    /// Solid preview: material filled, cut-away regions white
    #[default]
    Filled,
    /// Cut file: stroked outlines only
    Outline,
    /// Studded brick preview
    Bricks,
}

/// Configuration for the complete render pipeline
#[derive(Debug, Clone)]
pub struct RenderOptions {
    pub mode: RenderMode,
    /// Scale factor for the physical document size
    pub zoom: f64,
    /// Highlight design issues instead of hiding them
    pub show_issues: bool,
    /// Refuse to render a design with issues
    pub validate_design: bool,
    /// Index of the engraving to outline, in non-outline modes
    pub selected_engraving: Option<usize>,
    /// Palette family for empty cells in brick mode
    pub base_plate: String,
    pub dimensions: PanelDimensions,
    pub palette: Palette,
    pub svg: SvgConfig,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            mode: RenderMode::default(),
            zoom: 1.0,
            show_issues: false,
            validate_design: false,
            selected_engraving: None,
            base_plate: "plate".to_string(),
            dimensions: PanelDimensions::default(),
            palette: Palette::default(),
            svg: SvgConfig::default(),
        }
    }
}

impl RenderOptions {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_mode(mut self, mode: RenderMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_zoom(mut self, zoom: f64) -> Self {
        self.zoom = zoom;
        self
    }

    pub fn with_show_issues(mut self, show: bool) -> Self {
        self.show_issues = show;
        self
    }

    pub fn with_validate_design(mut self, validate: bool) -> Self {
        self.validate_design = validate;
        self
    }

    pub fn with_selected_engraving(mut self, index: Option<usize>) -> Self {
        self.selected_engraving = index;
        self
    }

    pub fn with_base_plate(mut self, family: impl Into<String>) -> Self {
        self.base_plate = family.into();
        self
    }

    /// Set the panel dimensions
    pub fn with_dimensions(mut self, dimensions: PanelDimensions) -> Self {
        self.dimensions = dimensions;
        self
    }

    /// Set the palette for color resolution
    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    /// Set the SVG configuration
    pub fn with_svg(mut self, config: SvgConfig) -> Self {
        self.svg = config;
        self
    }

    /// Zoom actually applied; unusable values fall back to 1
    pub fn effective_zoom(&self) -> f64 {
        if self.zoom.is_finite() && self.zoom > 0.0 {
            self.zoom
        } else {
            tracing::warn!(zoom = self.zoom, "invalid zoom, using 1");
            1.0
        }
    }
}

/// Render a grid to SVG.
///
/// Returns `None` when `validate_design` is set and the design has issues.
///
/// # Example
///
/// ```rust
/// use maze_panel::{render, Grid, RenderOptions};
///
/// let mut grid = Grid::default();
/// grid.set(1, 1, true); // covers an alignment hole
///
/// let strict = RenderOptions::new().with_validate_design(true);
/// assert!(render(&grid, &[], &strict).is_none());
/// assert!(render(&grid, &[], &RenderOptions::new()).is_some());
/// ```
pub fn render(grid: &Grid, engravings: &[Engraving], options: &RenderOptions) -> Option<String> {
    let (svg, issues) = render_with_issues(grid, engravings, options);
    if options.validate_design && !issues.is_empty() {
        tracing::info!(issues = issues.len(), "design has issues, refusing to render");
        return None;
    }
    Some(svg)
}

/// Render a grid to SVG and report every design issue found
pub fn render_with_issues(
    grid: &Grid,
    engravings: &[Engraving],
    options: &RenderOptions,
) -> (String, Vec<DesignIssue>) {
    let contours = contour::trace(grid, &options.dimensions);
    let zoom = options.effective_zoom();

    let svg = match options.mode {
        RenderMode::Bricks => renderer::render_bricks(grid, &contours.metrics, options, zoom),
        RenderMode::Filled | RenderMode::Outline => {
            renderer::render_panel(grid, &contours, engravings, options, zoom)
        }
    };

    (svg, contours.issues)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_default_grid() {
        let svg = render(&Grid::default(), &[], &RenderOptions::new()).unwrap();
        assert!(svg.contains("<svg"));
        assert!(svg.contains("</svg>"));
        assert!(svg.contains(r#"width="3.95in""#));
    }

    #[test]
    fn test_zoom_scales_document() {
        let svg = render(&Grid::default(), &[], &RenderOptions::new().with_zoom(2.0)).unwrap();
        assert!(svg.contains(r#"width="7.9in" height="7.9in" viewBox="0 0 7.9 7.9""#));
        assert!(svg.contains(r#"transform="scale(2)""#));
    }

    #[test]
    fn test_invalid_zoom_falls_back() {
        for zoom in [0.0, -3.0, f64::NAN, f64::INFINITY] {
            let options = RenderOptions::new().with_zoom(zoom);
            assert_eq!(options.effective_zoom(), 1.0);
            let svg = render(&Grid::default(), &[], &options).unwrap();
            assert!(svg.contains(r#"transform="scale(1)""#));
        }
    }

    #[test]
    fn test_validation_refuses_in_every_mode() {
        let mut grid = Grid::default();
        grid.set(7, 7, true);
        for mode in [RenderMode::Filled, RenderMode::Outline, RenderMode::Bricks] {
            let options = RenderOptions::new()
                .with_mode(mode)
                .with_validate_design(true);
            assert!(render(&grid, &[], &options).is_none());
        }
    }

    #[test]
    fn test_issues_reported_without_validation() {
        let mut grid = Grid::default();
        grid.set(7, 7, true);
        let (svg, issues) = render_with_issues(&grid, &[], &RenderOptions::new());
        assert!(svg.contains("<svg"));
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].category, IssueCategory::Island);
    }

    #[test]
    fn test_bricks_mode() {
        let options = RenderOptions::new().with_mode(RenderMode::Bricks);
        let svg = render(&Grid::default(), &[], &options).unwrap();
        assert_eq!(svg.matches("<rect").count(), 256);
        assert!(!svg.contains("<path"));
    }
}
