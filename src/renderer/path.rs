//! Path data utilities
//!
//! Converts outline segments into SVG path `d` attribute strings.

use super::config::fmt_num;
use crate::contour::{PathSegment, Point};

/// Convert segments to an SVG path `d` attribute string
pub fn path_data(segments: &[PathSegment], precision: usize) -> String {
    let n = |v: f64| fmt_num(v, precision);
    let mut parts = Vec::with_capacity(segments.len());

    for seg in segments {
        match seg {
            PathSegment::MoveTo(p) => parts.push(format!("M{} {}", n(p.x), n(p.y))),
            PathSegment::LineTo(p) => parts.push(format!("L{} {}", n(p.x), n(p.y))),
            PathSegment::ArcTo {
                end,
                radius,
                large_arc,
                sweep,
            } => {
                // A rx ry x-axis-rotation large-arc-flag sweep-flag x y
                parts.push(format!(
                    "A{} {} 0 {} {} {} {}",
                    n(*radius),
                    n(*radius),
                    u8::from(*large_arc),
                    u8::from(*sweep),
                    n(end.x),
                    n(end.y)
                ));
            }
            PathSegment::Close => parts.push("Z".to_string()),
        }
    }

    parts.join(" ")
}

/// Square of side `width` at the origin with corners rounded to `radius`, clockwise
pub fn rounded_square(width: f64, radius: f64) -> Vec<PathSegment> {
    let r = radius.clamp(0.0, width / 2.0);
    let arc = |x, y| PathSegment::ArcTo {
        end: Point::new(x, y),
        radius: r,
        large_arc: false,
        sweep: true,
    };

    vec![
        PathSegment::MoveTo(Point::new(r, 0.0)),
        PathSegment::LineTo(Point::new(width - r, 0.0)),
        arc(width, r),
        PathSegment::LineTo(Point::new(width, width - r)),
        arc(width - r, width),
        PathSegment::LineTo(Point::new(r, width)),
        arc(0.0, width - r),
        PathSegment::LineTo(Point::new(0.0, r)),
        arc(r, 0.0),
        PathSegment::Close,
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_data() {
        let segments = vec![
            PathSegment::MoveTo(Point::new(0.0, 0.5)),
            PathSegment::LineTo(Point::new(0.8, 0.5)),
            PathSegment::ArcTo {
                end: Point::new(1.0, 0.7),
                radius: 0.2,
                large_arc: false,
                sweep: true,
            },
            PathSegment::Close,
        ];
        assert_eq!(path_data(&segments, 4), "M0 0.5 L0.8 0.5 A0.2 0.2 0 0 1 1 0.7 Z");
    }

    #[test]
    fn test_empty_path() {
        assert_eq!(path_data(&[], 4), "");
    }

    #[test]
    fn test_rounded_square() {
        let d = path_data(&rounded_square(4.0, 0.125), 4);
        assert_eq!(
            d,
            "M0.125 0 L3.875 0 A0.125 0.125 0 0 1 4 0.125 L4 3.875 A0.125 0.125 0 0 1 3.875 4 \
             L0.125 4 A0.125 0.125 0 0 1 0 3.875 L0 0.125 A0.125 0.125 0 0 1 0.125 0 Z"
        );
    }

    #[test]
    fn test_radius_clamped() {
        let segments = rounded_square(1.0, 5.0);
        assert_eq!(segments[0], PathSegment::MoveTo(Point::new(0.5, 0.0)));
    }
}
