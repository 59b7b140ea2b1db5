//! SVG document assembly

use super::config::SvgConfig;
use super::path::path_data;
use crate::contour::PathSegment;

/// Build SVG elements incrementally
pub struct SvgBuilder {
    config: SvgConfig,
    elements: Vec<String>,
    indent: usize,
}

impl SvgBuilder {
    /// Create a new SVG builder
    pub fn new(config: SvgConfig) -> Self {
        Self {
            config,
            elements: vec![],
            indent: 1,
        }
    }

    pub fn config(&self) -> &SvgConfig {
        &self.config
    }

    fn indent_str(&self) -> String {
        if self.config.pretty_print {
            "  ".repeat(self.indent)
        } else {
            String::new()
        }
    }

    fn newline(&self) -> &str {
        if self.config.pretty_print {
            "\n"
        } else {
            ""
        }
    }

    fn num(&self, value: f64) -> String {
        self.config.fmt_num(value)
    }

    /// Add a path element from outline segments
    pub fn add_path(&mut self, segments: &[PathSegment], styles: &str) {
        let d = path_data(segments, self.config.precision);
        self.elements
            .push(format!(r#"{}<path d="{}"{}/>"#, self.indent_str(), d, styles));
    }

    /// Add a circle element
    pub fn add_circle(&mut self, cx: f64, cy: f64, r: f64, styles: &str) {
        self.elements.push(format!(
            r#"{}<circle cx="{}" cy="{}" r="{}"{}/>"#,
            self.indent_str(),
            self.num(cx),
            self.num(cy),
            self.num(r),
            styles
        ));
    }

    /// Add a rectangle element
    pub fn add_rect(&mut self, x: f64, y: f64, w: f64, h: f64, styles: &str) {
        self.elements.push(format!(
            r#"{}<rect x="{}" y="{}" width="{}" height="{}"{}/>"#,
            self.indent_str(),
            self.num(x),
            self.num(y),
            self.num(w),
            self.num(h),
            styles
        ));
    }

    /// Add a centered text element
    pub fn add_text(&mut self, text: &str, x: f64, y: f64, styles: &str) {
        self.elements.push(format!(
            r#"{}<text x="{}" y="{}" text-anchor="middle"{}>{}</text>"#,
            self.indent_str(),
            self.num(x),
            self.num(y),
            styles,
            escape_xml(text)
        ));
    }

    /// Open a group with raw attributes
    pub fn start_group(&mut self, attrs: &str) {
        self.elements
            .push(format!("{}<g{}>", self.indent_str(), attrs));
        self.indent += 1;
    }

    /// Open a group translated to (x, y) and rotated clockwise by `degrees`
    pub fn start_rotated_group(&mut self, x: f64, y: f64, degrees: u16) {
        let attrs = format!(
            r#" transform="translate({} {}) rotate({})""#,
            self.num(x),
            self.num(y),
            degrees
        );
        self.start_group(&attrs);
    }

    /// Close a group element
    pub fn end_group(&mut self) {
        self.indent = self.indent.saturating_sub(1);
        self.elements.push(format!("{}</g>", self.indent_str()));
    }

    /// Build the final SVG string.
    ///
    /// `width` is the physical panel width in inches; the document is
    /// `width * zoom` inches square with a matching viewBox.
    pub fn build(self, width: f64, zoom: f64) -> String {
        let nl = self.newline();
        let size = self.num(width * zoom);

        let mut svg = String::new();

        if self.config.standalone {
            svg.push_str(r#"<?xml version="1.0" encoding="UTF-8"?>"#);
            svg.push_str(nl);
        }

        svg.push_str(&format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{size}in" height="{size}in" viewBox="0 0 {size} {size}">"#
        ));
        svg.push_str(nl);

        for elem in &self.elements {
            svg.push_str(elem);
            svg.push_str(nl);
        }

        svg.push_str("</svg>");

        svg
    }
}

/// Escape special XML characters
pub fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}
