//! SVG renderer for traced panels
//!
//! This module takes a traced grid and produces the SVG document for
//! the requested render mode.

pub mod bricks;
pub mod config;
pub mod panel;
pub mod path;
pub mod svg;

pub use bricks::render_bricks;
pub use config::SvgConfig;
pub use panel::render_panel;
pub use path::{path_data, rounded_square};
pub use svg::{escape_xml, SvgBuilder};
