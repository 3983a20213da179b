//! View box computation for a chart centered on the origin.

use std::fmt;

use crate::geometry::path::fmt_num;

/// An SVG `viewBox`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewBox {
    pub min_x: f64,
    pub min_y: f64,
    pub width: f64,
    pub height: f64,
}

impl fmt::Display for ViewBox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {}",
            fmt_num(self.min_x),
            fmt_num(self.min_y),
            fmt_num(self.width),
            fmt_num(self.height)
        )
    }
}

/// Fit a square view box around a circle of `radius` at the origin, leaving
/// `padding` on every side. The square is widened along one axis to match
/// the `width`/`height` aspect ratio of the output so the chart stays round
/// and centered.
pub fn fit_view_box(radius: f64, padding: f64, width: u32, height: u32) -> ViewBox {
    let half = (radius + padding).max(1.0);
    let aspect = if height == 0 {
        1.0
    } else {
        width as f64 / height as f64
    };

    let (half_w, half_h) = if aspect >= 1.0 {
        (half * aspect, half)
    } else {
        (half, half / aspect)
    };

    ViewBox {
        min_x: -half_w,
        min_y: -half_h,
        width: half_w * 2.0,
        height: half_h * 2.0,
    }
}
