//! Contour tracing over the wall graph
//!
//! The tracer walks the open side of every wall, one empty cell at a time,
//! like a turtle keeping its left hand on the wall. Each walk closes into a
//! loop that becomes one SVG path. Corners are replaced by fillet arcs:
//!
//! - interior corner: the wall turns in front of the walker. Arc inward,
//!   turn clockwise, stay in the same cell.
//! - straight: the neighbour ahead continues the wall. Move on.
//! - exterior corner: the wall ends. Arc outward, turn counter-clockwise and
//!   step into the diagonal neighbour.
//!
//! The signed corner count decides what the loop encloses: walking around an
//! open region turns clockwise (+4), around a filled region counter-clockwise
//! (-4).

use crate::grid::{CellPos, Grid};

use super::config::FilletRadii;
use super::diagonal::DiagonalMap;
use super::types::{Direction, PathSegment, Point, TracedLoop};
use super::walls::Walls;

/// Which horizontal walls have already been walked.
///
/// A cell can lie on two different loops (its top wall on one, its bottom
/// wall on another), so the two walking directions keep separate marks.
#[derive(Debug, Clone)]
struct VisitMarks {
    size: usize,
    going_right: Vec<bool>,
    going_left: Vec<bool>,
}

impl VisitMarks {
    fn new(size: usize) -> Self {
        Self {
            size,
            going_right: vec![false; size * size],
            going_left: vec![false; size * size],
        }
    }

    fn is_marked(&self, pos: CellPos, dir: Direction) -> bool {
        let idx = pos.row * self.size + pos.col;
        match dir {
            Direction::Right => self.going_right[idx],
            Direction::Left => self.going_left[idx],
            Direction::Top | Direction::Bottom => false,
        }
    }

    fn mark(&mut self, pos: CellPos, dir: Direction) {
        let idx = pos.row * self.size + pos.col;
        match dir {
            Direction::Right => self.going_right[idx] = true,
            Direction::Left => self.going_left[idx] = true,
            Direction::Top | Direction::Bottom => {}
        }
    }
}

/// Boundary-following tracer for one grid
pub struct ContourTracer<'a> {
    grid: &'a Grid,
    walls: &'a Walls,
    diagonals: &'a DiagonalMap,
    cell_size: f64,
    fillets: FilletRadii,
    marks: VisitMarks,
}

impl<'a> ContourTracer<'a> {
    pub fn new(
        grid: &'a Grid,
        walls: &'a Walls,
        diagonals: &'a DiagonalMap,
        cell_size: f64,
        fillets: FilletRadii,
    ) -> Self {
        Self {
            grid,
            walls,
            diagonals,
            cell_size,
            fillets,
            marks: VisitMarks::new(grid.size()),
        }
    }

    /// Trace every loop, seeding from empty cells in row-major order
    pub fn trace_all(mut self) -> Vec<TracedLoop> {
        let mut loops = Vec::new();
        let seeds: Vec<CellPos> = self
            .grid
            .interior()
            .filter(|p| !self.grid.is_filled(p.row, p.col))
            .collect();

        for pos in seeds {
            if !self.marks.is_marked(pos, Direction::Right)
                && self.walls.has_edge(pos.row, pos.col, Direction::Top)
            {
                loops.push(self.trace_loop(pos, Direction::Right));
            }
            if !self.marks.is_marked(pos, Direction::Left)
                && self.walls.has_edge(pos.row, pos.col, Direction::Bottom)
            {
                loops.push(self.trace_loop(pos, Direction::Left));
            }
        }
        loops
    }

    /// Follow one loop from the midpoint of the wall above (walking right)
    /// or below (walking left) the start cell
    fn trace_loop(&mut self, start: CellPos, initial: Direction) -> TracedLoop {
        let c = self.cell_size;
        let last = self.grid.size() - 1;

        let (start_row, anchor) = match initial {
            Direction::Right => (start.row, Direction::Top.step(start)),
            _ => (start.row + 1, Direction::Bottom.step(start)),
        };
        let mut segments = vec![PathSegment::MoveTo(Point::new(
            start.col as f64 * c + c / 2.0,
            start_row as f64 * c,
        ))];

        let mut pos = start;
        let mut dir = initial;
        let mut turning = 0;
        let mut is_island = true;

        loop {
            if self.marks.is_marked(pos, dir) {
                break;
            }
            self.marks.mark(pos, dir);

            // the corner at the far end of the wall being followed
            let corner_col = match dir {
                Direction::Right | Direction::Bottom => pos.col + 1,
                _ => pos.col,
            };
            let corner_row = match dir {
                Direction::Bottom | Direction::Left => pos.row + 1,
                _ => pos.row,
            };
            if corner_col == 1 || corner_col == last || corner_row == 1 || corner_row == last {
                is_island = false;
            }
            let corner = Point::new(corner_col as f64 * c, corner_row as f64 * c);

            if self.walls.has_edge(pos.row, pos.col, dir) {
                let radius = if self.diagonals.corner_is_bridge(pos.row, pos.col, dir) {
                    self.fillets.diagonal
                } else {
                    self.fillets.interior
                };
                let next = dir.turn_cw();
                push_fillet(&mut segments, corner, dir, next, radius, true);
                dir = next;
                turning += 1;
            } else {
                let mut next_pos = dir.step(pos);
                if !self
                    .walls
                    .has_edge(next_pos.row, next_pos.col, dir.turn_ccw())
                {
                    let next = dir.turn_ccw();
                    push_fillet(&mut segments, corner, dir, next, self.fillets.exterior, false);
                    dir = next;
                    turning -= 1;
                    next_pos = dir.step(next_pos);
                }
                pos = next_pos;
            }
        }
        segments.push(PathSegment::Close);

        let traced = TracedLoop {
            segments,
            turning,
            is_island,
            start,
            anchor,
        };
        tracing::debug!(
            start = %start,
            turning,
            is_island,
            kind = ?traced.kind(),
            "traced loop"
        );
        traced
    }
}

/// Replace the corner with a line ending `radius` short of it and an arc
/// leaving it along `to`
fn push_fillet(
    segments: &mut Vec<PathSegment>,
    corner: Point,
    from: Direction,
    to: Direction,
    radius: f64,
    clockwise: bool,
) {
    segments.push(PathSegment::LineTo(corner.offset(from, -radius)));
    segments.push(PathSegment::ArcTo {
        end: corner.offset(to, radius),
        radius,
        large_arc: false,
        sweep: clockwise,
    });
}
