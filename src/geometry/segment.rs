//! Polar geometry of a single donut wedge.
//!
//! ```text
//!   p1 ------------- p2     outer arc (r1)
//!    \               /
//!     p0 -------- p3        inner arc (r0)
//! ```
//!
//! `p0`/`p1` sit on the most counter-clockwise edge, `p2`/`p3` on the most
//! clockwise edge. Positions inside the wedge are addressed by `at` (0 to 1
//! across the angular span) and `along` (0 to 1 from the inner to the outer
//! radius).

use serde::{Deserialize, Serialize};
use std::f64::consts::TAU;
use tracing::warn;

use super::path::SegmentPathBuilder;
use super::point::EuclideanPoint;
use crate::error::{DonutError, Result};

/// Raw construction parameters for a segment.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SegmentData {
    pub label: String,
    pub value: f64,
    pub total: f64,
    #[serde(alias = "inner_radius")]
    pub r0: f64,
    #[serde(alias = "outer_radius")]
    pub r1: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rotation: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl SegmentData {
    pub fn new(label: impl Into<String>, value: f64, total: f64, r0: f64, r1: f64) -> Self {
        Self {
            label: label.into(),
            value,
            total,
            r0,
            r1,
            rotation: None,
            color: None,
        }
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }
}

/// Extra rotation and radial offset applied when sampling a segment.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PointOptions {
    /// Added to the segment's initial rotation, in radians.
    pub rotation: f64,
    /// Added to both radii. Used to push a segment away from the center.
    pub offset: f64,
}

impl PointOptions {
    pub fn new(rotation: f64, offset: f64) -> Self {
        Self { rotation, offset }
    }
}

/// The four corners of a wedge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SegmentVertices {
    /// Inner radius, counter-clockwise edge.
    pub p0: EuclideanPoint,
    /// Outer radius, counter-clockwise edge.
    pub p1: EuclideanPoint,
    /// Outer radius, clockwise edge.
    pub p2: EuclideanPoint,
    /// Inner radius, clockwise edge.
    pub p3: EuclideanPoint,
}

/// One wedge of a donut chart.
#[derive(Debug, Clone, PartialEq)]
pub struct DonutSegment {
    label: String,
    value: f64,
    total: f64,
    inner_radius: f64,
    outer_radius: f64,
    initial_rotation: f64,
}

impl DonutSegment {
    /// Create a segment starting at rotation 0.
    ///
    /// `value` may exceed `total`; the span then wraps past a full turn.
    pub fn new(
        label: impl Into<String>,
        value: f64,
        total: f64,
        inner_radius: f64,
        outer_radius: f64,
    ) -> Result<Self> {
        let label = label.into();

        if !total.is_finite() || total <= 0.0 {
            return Err(DonutError::DegenerateSegment { label, total });
        }
        if !value.is_finite() || value < 0.0 {
            return Err(DonutError::InvalidArgument(format!(
                "segment '{}': value must be finite and non-negative, got {}",
                label, value
            )));
        }
        if !inner_radius.is_finite() || inner_radius < 0.0 {
            return Err(DonutError::InvalidArgument(format!(
                "segment '{}': inner radius must be finite and non-negative, got {}",
                label, inner_radius
            )));
        }
        if !outer_radius.is_finite() || outer_radius < inner_radius {
            return Err(DonutError::InvalidArgument(format!(
                "segment '{}': outer radius {} is smaller than inner radius {}",
                label, outer_radius, inner_radius
            )));
        }

        Ok(Self {
            label,
            value,
            total,
            inner_radius,
            outer_radius,
            initial_rotation: 0.0,
        })
    }

    /// Create a segment from raw parameters, honoring `rotation` if given.
    pub fn from_data(data: &SegmentData) -> Result<Self> {
        let mut segment = Self::new(data.label.clone(), data.value, data.total, data.r0, data.r1)?;
        if let Some(rotation) = data.rotation {
            segment.set_initial_rotation(rotation);
        }
        Ok(segment)
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn total(&self) -> f64 {
        self.total
    }

    pub fn inner_radius(&self) -> f64 {
        self.inner_radius
    }

    pub fn outer_radius(&self) -> f64 {
        self.outer_radius
    }

    pub fn initial_rotation(&self) -> f64 {
        self.initial_rotation
    }

    pub fn set_initial_rotation(&mut self, rotation: f64) {
        self.initial_rotation = rotation;
    }

    /// Angular span of the segment, in radians.
    #[inline]
    pub fn theta(&self) -> f64 {
        TAU * (self.value / self.total)
    }

    /// Angle of the line that bisects the segment.
    pub fn mid_angle(&self, options: PointOptions) -> f64 {
        self.initial_rotation + options.rotation + self.theta() / 2.0
    }

    /// Sample a point of the segment.
    ///
    /// `at` runs across the span (0 = counter-clockwise edge, 1 = clockwise
    /// edge) and `along` runs across the band (0 = inner radius, 1 = outer
    /// radius). Values outside `[0, 1]` extrapolate past the segment.
    pub fn get_point(&self, at: f64, along: f64, options: PointOptions) -> EuclideanPoint {
        if !(0.0..=1.0).contains(&at) || !(0.0..=1.0).contains(&along) {
            warn!(
                "Sampling segment '{}' outside its bounds (at={}, along={})",
                self.label, at, along
            );
        }

        let angle = self.initial_rotation + options.rotation + at * self.theta();
        let radius =
            options.offset + self.inner_radius + along * (self.outer_radius - self.inner_radius);

        EuclideanPoint::from_polar(radius, angle)
    }

    pub fn calculate_vertices(&self, options: PointOptions) -> SegmentVertices {
        SegmentVertices {
            p0: self.get_point(0.0, 0.0, options),
            p1: self.get_point(0.0, 1.0, options),
            p2: self.get_point(1.0, 1.0, options),
            p3: self.get_point(1.0, 0.0, options),
        }
    }

    /// Path data for the `d` attribute of an SVG `<path>`.
    pub fn to_svg_path_definition(&self, options: PointOptions) -> String {
        let vertices = self.calculate_vertices(options);
        SegmentPathBuilder::new(
            vertices,
            options.offset + self.inner_radius,
            options.offset + self.outer_radius,
            self.theta(),
        )
        .to_path_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use std::f64::consts::{FRAC_PI_2, PI};
    use std::io;
    use std::sync::{Arc, Mutex};

    /// Writer collecting formatted log output into a shared buffer.
    struct LogBuffer(Arc<Mutex<Vec<u8>>>);

    impl io::Write for LogBuffer {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn captured_logs(f: impl FnOnce()) -> String {
        let buffer = Arc::new(Mutex::new(Vec::new()));
        let sink = buffer.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || LogBuffer(sink.clone()))
            .with_ansi(false)
            .finish();
        tracing::subscriber::with_default(subscriber, f);
        let bytes = buffer.lock().unwrap().clone();
        String::from_utf8(bytes).unwrap()
    }

    fn quarter() -> DonutSegment {
        DonutSegment::new("q", 25.0, 100.0, 10.0, 20.0).unwrap()
    }

    fn assert_point(p: EuclideanPoint, x: f64, y: f64) {
        assert_abs_diff_eq!(p.x(), x, epsilon = 1e-9);
        assert_abs_diff_eq!(p.y(), y, epsilon = 1e-9);
    }

    #[test]
    fn test_theta_is_fraction_of_turn() {
        for (value, total) in [(1.0, 4.0), (3.0, 7.0), (0.0, 5.0), (50.0, 50.0)] {
            let segment = DonutSegment::new("s", value, total, 0.0, 1.0).unwrap();
            assert_abs_diff_eq!(segment.theta(), TAU * value / total, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_value_above_total_is_tolerated() {
        let segment = DonutSegment::new("big", 150.0, 100.0, 0.0, 1.0).unwrap();
        assert_abs_diff_eq!(segment.theta(), 3.0 * PI, epsilon = 1e-9);
    }

    #[test]
    fn test_rejects_degenerate_total() {
        for total in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let err = DonutSegment::new("zero", 1.0, total, 0.0, 1.0).unwrap_err();
            assert!(matches!(err, DonutError::DegenerateSegment { .. }));
        }
    }

    #[test]
    fn test_rejects_bad_value_and_radii() {
        assert!(DonutSegment::new("neg", -1.0, 10.0, 0.0, 1.0).is_err());
        assert!(DonutSegment::new("inner", 1.0, 10.0, -2.0, 1.0).is_err());
        assert!(DonutSegment::new("outer", 1.0, 10.0, 5.0, 4.0).is_err());
    }

    #[test]
    fn test_vertices_of_quarter_segment() {
        let v = quarter().calculate_vertices(PointOptions::default());
        assert_point(v.p0, 10.0, 0.0);
        assert_point(v.p1, 20.0, 0.0);
        assert_point(v.p2, 0.0, 20.0);
        assert_point(v.p3, 0.0, 10.0);
    }

    #[test]
    fn test_full_circle_wraps_onto_itself() {
        let segment = DonutSegment::new("all", 42.0, 42.0, 5.0, 9.0).unwrap();
        let start = segment.get_point(0.0, 1.0, PointOptions::default());
        let end = segment.get_point(1.0, 1.0, PointOptions::default());
        assert_abs_diff_eq!(start.x(), end.x(), epsilon = 1e-9);
        assert_abs_diff_eq!(start.y(), end.y(), epsilon = 1e-9);
        assert_abs_diff_eq!(end.r(), 9.0, epsilon = 1e-9);
    }

    #[test]
    fn test_rotation_and_offset_shift_points() {
        let mut segment = quarter();
        segment.set_initial_rotation(FRAC_PI_2);
        let p = segment.get_point(0.0, 1.0, PointOptions::new(FRAC_PI_2, 5.0));
        assert_point(p, -25.0, 0.0);
    }

    #[test]
    fn test_interior_point() {
        let p = quarter().get_point(0.5, 0.5, PointOptions::default());
        assert_abs_diff_eq!(p.r(), 15.0, epsilon = 1e-9);
        assert_abs_diff_eq!(p.angle(), PI / 4.0, epsilon = 1e-9);
    }

    #[test]
    fn test_out_of_range_sampling_extrapolates() {
        let segment = quarter();
        let p = segment.get_point(1.5, 1.0, PointOptions::default());
        assert_abs_diff_eq!(p.angle(), 1.5 * segment.theta(), epsilon = 1e-9);
        assert_abs_diff_eq!(p.r(), 20.0, epsilon = 1e-9);

        let q = segment.get_point(0.0, 2.0, PointOptions::default());
        assert_abs_diff_eq!(q.r(), 30.0, epsilon = 1e-9);
    }

    #[test]
    fn test_out_of_range_sampling_warns() {
        let segment = quarter();
        let logs = captured_logs(|| {
            segment.get_point(0.5, 0.5, PointOptions::default());
            segment.get_point(1.0, 1.0, PointOptions::default());
        });
        assert!(!logs.contains("outside its bounds"));

        let logs = captured_logs(|| {
            segment.get_point(-0.25, 0.5, PointOptions::default());
        });
        assert!(logs.contains("WARN"));
        assert!(logs.contains("Sampling segment 'q' outside its bounds (at=-0.25, along=0.5)"));
    }

    #[test]
    fn test_from_data_applies_rotation() {
        let mut data = SegmentData::new("rot", 1.0, 4.0, 1.0, 2.0);
        data.rotation = Some(PI);
        let segment = DonutSegment::from_data(&data).unwrap();
        assert_eq!(segment.initial_rotation(), PI);
        assert_abs_diff_eq!(
            segment.mid_angle(PointOptions::default()),
            PI + PI / 4.0,
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_path_definition_of_quarter_segment() {
        let d = quarter().to_svg_path_definition(PointOptions::default());
        assert_eq!(d, "M 10 0 L 20 0 A 20 20 0 0 1 0 20 L 0 10 A 10 10 0 0 0 10 0");
    }

    #[test]
    fn test_path_definition_uses_offset_radii() {
        let d = quarter().to_svg_path_definition(PointOptions::new(0.0, 2.0));
        assert_eq!(d, "M 12 0 L 22 0 A 22 22 0 0 1 0 22 L 0 12 A 12 12 0 0 0 12 0");
    }
}
