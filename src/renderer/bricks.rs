//! Brick preview: one studded tile per cell

use crate::contour::PanelMetrics;
use crate::grid::{CellPos, Grid};
use crate::palette::{self, Palette};
use crate::RenderOptions;

use super::svg::SvgBuilder;

/// Palette family for filled cells
const BRICK_FAMILY: &str = "brick";

/// Render the grid as a plate of bricks
pub fn render_bricks(grid: &Grid, metrics: &PanelMetrics, options: &RenderOptions, zoom: f64) -> String {
    let mut builder = SvgBuilder::new(options.svg.clone());
    let root = format!(
        r#" transform="scale({})" stroke-width="{}""#,
        builder.config().fmt_num(zoom),
        builder.config().fmt_num(metrics.stroke_width / 5.0)
    );
    builder.start_group(&root);

    let brick = options.palette.brick_colors(BRICK_FAMILY);
    let plate = options.palette.brick_colors(&options.base_plate);
    for row in 0..grid.size() {
        for col in 0..grid.size() {
            let colors = if grid.is_filled(row, col) { &brick } else { &plate };
            let is_hole = !grid.is_filled(row, col)
                && metrics.alignment_holes.contains(&CellPos::new(row, col));
            add_brick(&mut builder, row, col, colors, is_hole, metrics.cell_size, &options.palette);
        }
    }

    builder.end_group();
    builder.build(metrics.total_width, zoom)
}

fn add_brick(
    builder: &mut SvgBuilder,
    row: usize,
    col: usize,
    colors: &[String; 3],
    is_hole: bool,
    cell: f64,
    theme: &Palette,
) {
    let [main, shadow, highlight] = colors;
    let x = col as f64 * cell;
    let y = row as f64 * cell;
    builder.add_rect(
        x,
        y,
        cell,
        cell,
        &format!(r#" fill="{}" stroke="{}""#, main, shadow),
    );

    // open alignment cells get a hollow-looking stud
    let (stud, stud_shadow) = if is_hole {
        (theme.resolve_or_default(palette::CUT_AWAY), main.clone())
    } else {
        (highlight.clone(), shadow.clone())
    };
    let cx = x + cell / 2.0;
    let cy = y + cell / 2.0;
    let offset = cell / 10.0;
    builder.add_circle(
        cx + offset,
        cy + offset,
        cell * 0.27,
        &format!(r#" stroke="none" fill="{}""#, stud_shadow),
    );
    builder.add_circle(cx, cy, cell * 0.3, &format!(r#" stroke="none" fill="{}""#, stud));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contour::PanelDimensions;

    fn render(grid: &Grid, options: &RenderOptions) -> String {
        let metrics = options.dimensions.metrics(grid.size());
        render_bricks(grid, &metrics, options, 1.0)
    }

    #[test]
    fn test_one_tile_per_cell() {
        let grid = Grid::new(5).unwrap();
        let svg = render(&grid, &RenderOptions::new());
        assert_eq!(svg.matches("<rect").count(), 25);
        assert_eq!(svg.matches("<circle").count(), 50);
    }

    #[test]
    fn test_brick_and_plate_colors() {
        let grid = Grid::new(5).unwrap();
        let svg = render(&grid, &RenderOptions::new());
        // 16 border bricks, 9 plate tiles
        assert_eq!(svg.matches(r##"fill="#C91A09" stroke="#720E0F""##).count(), 16);
        assert_eq!(svg.matches(r##"fill="#237841" stroke="#184632""##).count(), 9);
    }

    #[test]
    fn test_alignment_holes_get_white_studs() {
        let options = RenderOptions::new()
            .with_dimensions(PanelDimensions::new().with_alignment_holes(vec![[2, 2]]));
        let svg = render(&Grid::new(5).unwrap(), &options);
        assert_eq!(svg.matches(r#"stroke="none" fill="white""#).count(), 1);
    }

    #[test]
    fn test_thin_stroke() {
        let dims = PanelDimensions::new().with_total_width(5.0);
        let svg = render(&Grid::new(5).unwrap(), &RenderOptions::new().with_dimensions(dims));
        assert!(svg.contains(r#"transform="scale(1)" stroke-width="0.002""#));
        assert!(svg.contains(r#"<rect x="1" y="2" width="1" height="1""#));
    }
}
