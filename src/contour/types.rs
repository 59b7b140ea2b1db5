//! Core types for contour tracing

use crate::grid::CellPos;

/// A 2D point in panel coordinates (inches, y down)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Move by `distance` in the given direction
    pub fn offset(self, dir: Direction, distance: f64) -> Self {
        Self {
            x: self.x + dir.d_col() as f64 * distance,
            y: self.y + dir.d_row() as f64 * distance,
        }
    }
}

const D_ROW: [isize; 4] = [-1, 0, 1, 0];
const D_COL: [isize; 4] = [0, 1, 0, -1];

/// Compass direction, also used for "which side of a cell".
///
/// The discriminants are the cyclic index: turning clockwise adds one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Top = 0,
    Right = 1,
    Bottom = 2,
    Left = 3,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Top,
        Direction::Right,
        Direction::Bottom,
        Direction::Left,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Self {
        Self::ALL[index % 4]
    }

    /// Next direction clockwise
    pub fn turn_cw(self) -> Self {
        Self::from_index(self.index() + 1)
    }

    /// Next direction counter-clockwise
    pub fn turn_ccw(self) -> Self {
        Self::from_index(self.index() + 3)
    }

    pub fn d_row(self) -> isize {
        D_ROW[self.index()]
    }

    pub fn d_col(self) -> isize {
        D_COL[self.index()]
    }

    /// Neighbouring cell in this direction. The caller keeps the walk inside
    /// the grid.
    pub fn step(self, pos: CellPos) -> CellPos {
        CellPos::new(
            pos.row.wrapping_add_signed(self.d_row()),
            pos.col.wrapping_add_signed(self.d_col()),
        )
    }
}

/// A segment of a closed outline
#[derive(Debug, Clone, PartialEq)]
pub enum PathSegment {
    /// Move to starting point
    MoveTo(Point),
    /// Straight line to point
    LineTo(Point),
    /// Circular arc to point
    ArcTo {
        end: Point,
        radius: f64,
        large_arc: bool,
        sweep: bool, // true = clockwise in SVG coordinates (y-down)
    },
    /// Close path back to start
    Close,
}

/// Which side of a traced boundary holds material
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopKind {
    /// Outline of a filled region (net counter-clockwise walk)
    Material,
    /// Outline of an open region (net clockwise walk)
    Hole,
}

/// One closed boundary loop produced by the tracer
#[derive(Debug, Clone, PartialEq)]
pub struct TracedLoop {
    pub segments: Vec<PathSegment>,
    /// +1 per interior corner, -1 per exterior corner
    pub turning: i32,
    /// True if the loop never reaches the ring of cells next to the border
    pub is_island: bool,
    /// Empty cell the trace started from
    pub start: CellPos,
    /// Filled cell across the starting wall
    pub anchor: CellPos,
}

impl TracedLoop {
    pub fn kind(&self) -> LoopKind {
        if self.turning < 0 {
            LoopKind::Material
        } else {
            LoopKind::Hole
        }
    }

    /// A piece of material with no connection to the frame
    pub fn is_floating(&self) -> bool {
        self.is_island && self.kind() == LoopKind::Material
    }

    /// Radii of all fillet arcs, in path order
    pub fn arc_radii(&self) -> impl Iterator<Item = f64> + '_ {
        self.segments.iter().filter_map(|seg| match seg {
            PathSegment::ArcTo { radius, .. } => Some(*radius),
            _ => None,
        })
    }
}
