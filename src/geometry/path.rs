//! SVG path serialization for donut segments.
//!
//! The outline of a wedge is traced as a single closed contour:
//! inner counter-clockwise corner, out along the first radial edge, along
//! the outer arc, back in along the second radial edge, then along the inner
//! arc to the starting point.

use std::f64::consts::{PI, TAU};
use std::fmt;

use super::point::EuclideanPoint;
use super::segment::SegmentVertices;

/// Maximum number of fractional digits written for path coordinates.
const COORD_PRECISION: usize = 6;

/// One command of the SVG path mini-language.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathCommand {
    MoveTo { x: f64, y: f64 },
    LineTo { x: f64, y: f64 },
    Arc {
        radius: f64,
        large_arc: bool,
        sweep: bool,
        x: f64,
        y: f64,
    },
}

impl PathCommand {
    fn move_to(p: &EuclideanPoint) -> Self {
        PathCommand::MoveTo { x: p.x(), y: p.y() }
    }

    fn line_to(p: &EuclideanPoint) -> Self {
        PathCommand::LineTo { x: p.x(), y: p.y() }
    }

    fn arc_to(radius: f64, large_arc: bool, sweep: bool, p: &EuclideanPoint) -> Self {
        PathCommand::Arc {
            radius,
            large_arc,
            sweep,
            x: p.x(),
            y: p.y(),
        }
    }
}

impl fmt::Display for PathCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            PathCommand::MoveTo { x, y } => write!(f, "M {} {}", fmt_num(x), fmt_num(y)),
            PathCommand::LineTo { x, y } => write!(f, "L {} {}", fmt_num(x), fmt_num(y)),
            PathCommand::Arc {
                radius,
                large_arc,
                sweep,
                x,
                y,
            } => write!(
                f,
                "A {r} {r} 0 {} {} {} {}",
                large_arc as u8,
                sweep as u8,
                fmt_num(x),
                fmt_num(y),
                r = fmt_num(radius),
            ),
        }
    }
}

/// Format a coordinate with bounded precision and no trailing zeros.
pub fn fmt_num(value: f64) -> String {
    let s = format!("{:.*}", COORD_PRECISION, value);
    let s = if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s.as_str()
    };
    if s == "-0" {
        "0".to_string()
    } else {
        s.to_string()
    }
}

/// Whether two points are written with the same coordinates.
fn same_output_point(a: &EuclideanPoint, b: &EuclideanPoint) -> bool {
    fmt_num(a.x()) == fmt_num(b.x()) && fmt_num(a.y()) == fmt_num(b.y())
}

/// Builds the closed outline of a wedge from its vertices.
#[derive(Debug, Clone, Copy)]
pub struct SegmentPathBuilder {
    vertices: SegmentVertices,
    inner_radius: f64,
    outer_radius: f64,
    theta: f64,
}

impl SegmentPathBuilder {
    pub fn new(vertices: SegmentVertices, inner_radius: f64, outer_radius: f64, theta: f64) -> Self {
        Self {
            vertices,
            inner_radius,
            outer_radius,
            theta,
        }
    }

    /// Both arcs share the flag since they subtend the same span.
    pub fn large_arc(&self) -> bool {
        self.theta > PI
    }

    /// Whether the wedge is drawn as a closed ring.
    ///
    /// Spans of a full turn or more, and spans so close to one that the
    /// written arc endpoints coincide, would produce arcs that renderers
    /// drop.
    fn draws_full_ring(&self) -> bool {
        if self.theta >= TAU {
            return true;
        }
        if !self.large_arc() {
            return false;
        }
        let SegmentVertices { p0, p1, p2, p3 } = self.vertices;
        same_output_point(&p1, &p2)
            || (fmt_num(self.inner_radius) != "0" && same_output_point(&p0, &p3))
    }

    pub fn commands(&self) -> Vec<PathCommand> {
        let SegmentVertices { p0, p1, p2, p3 } = self.vertices;
        let mut commands = vec![PathCommand::move_to(&p0), PathCommand::line_to(&p1)];

        if self.draws_full_ring() {
            // Two half turns on each circle, ending back at the start edge
            let half_turn = p1.angle() + PI;
            let outer_mid = EuclideanPoint::from_polar(p1.r(), half_turn);
            let inner_mid = EuclideanPoint::from_polar(p0.r(), half_turn);
            commands.push(PathCommand::arc_to(self.outer_radius, false, true, &outer_mid));
            commands.push(PathCommand::arc_to(self.outer_radius, false, true, &p1));
            commands.push(PathCommand::line_to(&p0));
            commands.push(PathCommand::arc_to(self.inner_radius, false, false, &inner_mid));
            commands.push(PathCommand::arc_to(self.inner_radius, false, false, &p0));
        } else {
            let large_arc = self.large_arc();
            commands.push(PathCommand::arc_to(self.outer_radius, large_arc, true, &p2));
            commands.push(PathCommand::line_to(&p3));
            commands.push(PathCommand::arc_to(self.inner_radius, large_arc, false, &p0));
        }

        commands
    }

    pub fn to_path_string(&self) -> String {
        self.commands()
            .iter()
            .map(|c| c.to_string())
            .collect::<Vec<_>>()
            .join(" ")
    }
}
