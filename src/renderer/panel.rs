//! Panel document assembly
//!
//! Draws the frame, the traced loops, the fixed holes and the engravings
//! into one SVG document, in that order.

use crate::contour::{ContourSet, LoopKind, PanelMetrics, TracedLoop};
use crate::engraving::Engraving;
use crate::grid::Grid;
use crate::palette::{self, Palette};
use crate::{RenderMode, RenderOptions};

use super::path::rounded_square;
use super::svg::SvgBuilder;

const FONT_FAMILY: &str = "Sans,Arial";

/// Render a traced panel to an SVG string
pub fn render_panel(
    grid: &Grid,
    contours: &ContourSet,
    engravings: &[Engraving],
    options: &RenderOptions,
    zoom: f64,
) -> String {
    let metrics = &contours.metrics;
    let colors = &options.palette;
    let outline = options.mode == RenderMode::Outline;
    let mut builder = SvgBuilder::new(options.svg.clone());

    let style = if outline {
        format!(
            r#" fill="none" stroke="{}""#,
            colors.resolve_or_default(palette::CUT_LINE)
        )
    } else {
        format!(
            r#" fill="{}" stroke="none""#,
            colors.resolve_or_default(palette::MATERIAL)
        )
    };
    let root = format!(
        r#" transform="scale({})" stroke-width="{}"{}"#,
        builder.config().fmt_num(zoom),
        builder.config().fmt_num(metrics.stroke_width),
        style
    );
    builder.start_group(&root);

    builder.add_path(&rounded_square(metrics.total_width, metrics.border_radius), "");

    for traced in &contours.loops {
        let fill = loop_fill(traced, options, colors);
        builder.add_path(&traced.segments, &format!(r#" style="fill:{};""#, fill));
    }

    add_screw_holes(&mut builder, metrics, outline, colors);
    if !outline {
        add_alignment_holes(&mut builder, grid, metrics, options.show_issues, colors);
    }
    if options.show_issues {
        add_diagonal_markers(&mut builder, contours, colors);
    }
    for (index, engraving) in engravings.iter().enumerate() {
        let selected = options.selected_engraving == Some(index);
        add_engraving(&mut builder, engraving, metrics, outline, selected, colors);
    }

    builder.end_group();
    builder.build(metrics.total_width, zoom)
}

fn loop_fill(traced: &TracedLoop, options: &RenderOptions, colors: &Palette) -> String {
    if options.mode == RenderMode::Outline {
        return "none".to_string();
    }
    if traced.is_floating() && options.show_issues {
        return colors.resolve_or_default(palette::WARNING);
    }
    match traced.kind() {
        LoopKind::Material => colors.resolve_or_default(palette::MATERIAL),
        LoopKind::Hole => colors.resolve_or_default(palette::CUT_AWAY),
    }
}

// ── Fixed holes ───────────────────────────────────────────────────

fn add_screw_holes(builder: &mut SvgBuilder, metrics: &PanelMetrics, outline: bool, colors: &Palette) {
    let style = if outline {
        format!(
            r#" fill="none" stroke="{}""#,
            colors.resolve_or_default(palette::CUT_LINE)
        )
    } else {
        format!(
            r#" fill="{}" stroke="none""#,
            colors.resolve_or_default(palette::CUT_AWAY)
        )
    };
    let near = metrics.cell_size / 2.0 + metrics.screw_hole_offset;
    let far = metrics.total_width - near;

    builder.start_group(&style);
    for (cx, cy) in [(near, near), (far, near), (near, far), (far, far)] {
        builder.add_circle(cx, cy, metrics.screw_hole_radius, "");
    }
    builder.end_group();
}

fn add_alignment_holes(
    builder: &mut SvgBuilder,
    grid: &Grid,
    metrics: &PanelMetrics,
    show_issues: bool,
    colors: &Palette,
) {
    let c = metrics.cell_size;
    for hole in &metrics.alignment_holes {
        let covered = grid.is_filled(hole.row, hole.col);
        if covered && !show_issues {
            continue;
        }
        let color = if covered {
            colors.resolve_or_default(palette::WARNING)
        } else {
            colors.resolve_or_default(palette::HOLE_GUIDE)
        };
        builder.add_circle(
            hole.col as f64 * c + c / 2.0,
            hole.row as f64 * c + c / 2.0,
            metrics.alignment_hole_radius,
            &format!(r#" fill="none" stroke="{}""#, color),
        );
    }
}

fn add_diagonal_markers(builder: &mut SvgBuilder, contours: &ContourSet, colors: &Palette) {
    let c = contours.metrics.cell_size;
    let style = format!(
        r#" fill="none" stroke="{}""#,
        colors.resolve_or_default(palette::WARNING)
    );
    for block in contours.diagonals.bridges() {
        // shared corner of the 2x2 block
        builder.add_circle(
            (block.col + 1) as f64 * c,
            (block.row + 1) as f64 * c,
            contours.metrics.fillets.diagonal,
            &style,
        );
    }
}

// ── Engravings ────────────────────────────────────────────────────

fn add_engraving(
    builder: &mut SvgBuilder,
    engraving: &Engraving,
    metrics: &PanelMetrics,
    outline: bool,
    selected: bool,
    colors: &Palette,
) {
    let c = metrics.cell_size;
    let x = engraving.col as f64 * c;
    let y = engraving.row as f64 * c;
    let band = metrics.grid_size.saturating_sub(2) as f64 * c;
    let (width, height) = if engraving.rotation.is_vertical() {
        (c, band)
    } else {
        (band, c)
    };

    if selected && !outline {
        builder.add_rect(
            x,
            y,
            width,
            height,
            &format!(
                r#" fill="none" stroke="{}""#,
                colors.resolve_or_default(palette::SELECTION)
            ),
        );
    }

    let color = if outline {
        colors.resolve_or_default(palette::ENGRAVING_EXPORT)
    } else {
        colors.resolve_or_default(palette::ENGRAVING_DISPLAY)
    };
    let style = format!(
        r#" fill="{}" stroke="none" font-size="{}" font-family="{}""#,
        color,
        builder.config().fmt_num(metrics.font_size),
        FONT_FAMILY
    );

    builder.start_rotated_group(
        x + width / 2.0,
        y + height / 2.0,
        engraving.rotation.degrees(),
    );
    builder.add_text(&engraving.text, 0.0, metrics.text_baseline_offset, &style);
    builder.end_group();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contour::{trace, PanelDimensions};
    use crate::engraving::{Band, Rotation};
    use crate::renderer::config::fmt_num;

    fn render(grid: &Grid, engravings: &[Engraving], options: &RenderOptions) -> String {
        let contours = trace(grid, &options.dimensions);
        render_panel(grid, &contours, engravings, options, 1.0)
    }

    fn dims() -> PanelDimensions {
        PanelDimensions::new().with_total_width(4.0)
    }

    #[test]
    fn test_element_order() {
        let svg = render(&Grid::default(), &[], &RenderOptions::new().with_dimensions(dims()));
        let border = svg.find("<path d=\"M0.125 0").unwrap();
        let cavity = svg.find("style=\"fill:white;\"").unwrap();
        let screws = svg.find("<circle").unwrap();
        assert!(border < cavity && cavity < screws);
    }

    #[test]
    fn test_screw_hole_positions() {
        let svg = render(&Grid::default(), &[], &RenderOptions::new().with_dimensions(dims()));
        let near = fmt_num(0.125 + 0.01875, 4);
        let far = fmt_num(4.0 - (0.125 + 0.01875), 4);
        assert!(svg.contains(&format!(r#"<circle cx="{near}" cy="{near}" r="0.0625"/>"#)));
        assert!(svg.contains(&format!(r#"<circle cx="{far}" cy="{near}" r="0.0625"/>"#)));
        assert!(svg.contains(&format!(r#"<circle cx="{far}" cy="{far}" r="0.0625"/>"#)));
    }

    #[test]
    fn test_outline_mode() {
        let options = RenderOptions::new()
            .with_mode(RenderMode::Outline)
            .with_dimensions(dims());
        let svg = render(&Grid::default(), &[], &options);
        assert!(svg.contains(r#"fill="none" stroke="black""#));
        assert!(svg.contains("style=\"fill:none;\""));
        assert!(!svg.contains("#CCCCCC"));
    }

    #[test]
    fn test_alignment_hole_guides() {
        let svg = render(&Grid::default(), &[], &RenderOptions::new().with_dimensions(dims()));
        assert_eq!(svg.matches("stroke=\"#CCCCCC\"").count(), 2);
        assert!(svg.contains(r#"<circle cx="0.375" cy="0.375" r="0.1""#));
    }

    #[test]
    fn test_covered_hole_only_with_issues() {
        let mut grid = Grid::default();
        grid.set(1, 1, true);
        let plain = render(&grid, &[], &RenderOptions::new());
        assert_eq!(plain.matches("stroke=\"#CCCCCC\"").count(), 1);
        assert!(!plain.contains("blue"));

        let shown = render(&grid, &[], &RenderOptions::new().with_show_issues(true));
        assert!(shown.contains(r#"fill="none" stroke="blue""#));
    }

    #[test]
    fn test_floating_island_highlight() {
        let mut grid = Grid::default();
        grid.set(5, 5, true);
        let plain = render(&grid, &[], &RenderOptions::new());
        assert!(plain.contains("style=\"fill:black;\""));
        let shown = render(&grid, &[], &RenderOptions::new().with_show_issues(true));
        assert!(shown.contains("style=\"fill:blue;\""));
    }

    #[test]
    fn test_diagonal_marker() {
        let mut grid = Grid::default();
        grid.set(4, 4, true);
        grid.set(5, 5, true);
        let options = RenderOptions::new().with_dimensions(dims()).with_show_issues(true);
        let svg = render(&grid, &[], &options);
        assert!(svg.contains(r#"<circle cx="1.25" cy="1.25" r="0.0625" fill="none" stroke="blue"/>"#));
    }

    #[test]
    fn test_engraving_group() {
        let engraving = Engraving::in_band("Tom & Jerry", Band::Right, 16);
        let options = RenderOptions::new().with_dimensions(dims());
        let svg = render(&Grid::default(), &[engraving], &options);
        // band is 14 cells tall and one cell wide
        assert!(svg.contains(r#"<g transform="translate(3.875 2) rotate(90)">"#));
        assert!(svg.contains(">TOM &amp; JERRY</text>"));
        assert!(svg.contains(r##"fill="#AAAAAA""##));
        assert!(!svg.contains("<rect"));
    }

    #[test]
    fn test_selected_engraving() {
        let engravings = [
            Engraving::new("a", 0, 1, Rotation::Deg0),
            Engraving::new("b", 15, 1, Rotation::Deg180),
        ];
        let options = RenderOptions::new()
            .with_dimensions(dims())
            .with_selected_engraving(Some(1));
        let svg = render(&Grid::default(), &engravings, &options);
        assert!(svg.contains(r#"<rect x="0.25" y="3.75" width="3.5" height="0.25" fill="none" stroke="red"/>"#));

        let exported = render(
            &Grid::default(),
            &engravings,
            &options.with_mode(RenderMode::Outline),
        );
        assert!(!exported.contains("<rect"));
        assert!(exported.contains(r##"fill="#FF0000""##));
    }
}
