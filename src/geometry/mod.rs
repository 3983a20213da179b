//! Segment geometry: points, wedges, and their SVG outlines.

pub mod path;
pub mod point;
pub mod segment;

pub use path::{PathCommand, SegmentPathBuilder};
pub use point::{EuclideanPoint, PointCoords};
pub use segment::{DonutSegment, PointOptions, SegmentData, SegmentVertices};
