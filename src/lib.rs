//! Donut and pie chart geometry with SVG output.
//!
//! A [`Donut`] lays [`DonutSegment`]s end to end around a ring. Each segment
//! can describe itself as an SVG path, and [`DonutRenderer`] turns a whole
//! chart into an SVG document with per-segment hover state.

pub mod cli;
pub mod color;
pub mod config;
pub mod donut;
pub mod error;
pub mod geometry;
pub mod renderer;

pub use donut::{Donut, HasGeometry, RenderedSegment, SegmentInput, SegmentStyle, SegmentVariant};
pub use error::{DonutError, Result};
pub use geometry::{DonutSegment, EuclideanPoint, PointCoords, PointOptions, SegmentData};
pub use renderer::{DonutRenderer, PointerEvent, RenderOptions};
