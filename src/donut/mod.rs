//! Donut aggregate: an ordered set of segments laid end to end.
//!
//! Each segment starts where the previous one ends, so segment `i` always
//! carries an initial rotation equal to the summed spans of segments
//! `0..i`. The aggregate is the only place that rewrites those rotations.

mod rendered;

pub use rendered::{RenderedSegment, SegmentStyle};

use std::cmp::Ordering;
use tracing::debug;

use crate::error::Result;
use crate::geometry::{DonutSegment, SegmentData};

/// Anything that carries wedge geometry.
pub trait HasGeometry {
    fn geometry(&self) -> &DonutSegment;
}

/// A segment type a [`Donut`] can build from raw parameters and lay out.
pub trait SegmentVariant: HasGeometry + Sized {
    fn from_data(data: &SegmentData) -> Result<Self>;

    fn set_initial_rotation(&mut self, rotation: f64);
}

impl HasGeometry for DonutSegment {
    fn geometry(&self) -> &DonutSegment {
        self
    }
}

impl SegmentVariant for DonutSegment {
    fn from_data(data: &SegmentData) -> Result<Self> {
        DonutSegment::from_data(data)
    }

    fn set_initial_rotation(&mut self, rotation: f64) {
        DonutSegment::set_initial_rotation(self, rotation);
    }
}

/// Input accepted by [`Donut::add_segment`].
#[derive(Debug, Clone)]
pub enum SegmentInput<S> {
    /// An already constructed segment.
    Built(S),
    /// Parameters for a new segment of the donut's variant.
    Raw(SegmentData),
}

impl<S> From<SegmentData> for SegmentInput<S> {
    fn from(data: SegmentData) -> Self {
        SegmentInput::Raw(data)
    }
}

impl From<DonutSegment> for SegmentInput<DonutSegment> {
    fn from(segment: DonutSegment) -> Self {
        SegmentInput::Built(segment)
    }
}

impl From<RenderedSegment> for SegmentInput<RenderedSegment> {
    fn from(segment: RenderedSegment) -> Self {
        SegmentInput::Built(segment)
    }
}

#[derive(Debug, Clone)]
pub struct Donut<S = DonutSegment> {
    segments: Vec<S>,
}

impl<S> Default for Donut<S> {
    fn default() -> Self {
        Self {
            segments: Vec::new(),
        }
    }
}

impl<S: SegmentVariant> Donut<S> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a donut by adding each input in order.
    pub fn from_inputs<I, T>(inputs: I) -> Result<Self>
    where
        I: IntoIterator<Item = T>,
        T: Into<SegmentInput<S>>,
    {
        let mut donut = Self::new();
        for input in inputs {
            donut.add_segment(input)?;
        }
        Ok(donut)
    }

    /// Append a segment, starting it where the previous segments end.
    pub fn add_segment(&mut self, input: impl Into<SegmentInput<S>>) -> Result<&S> {
        let mut segment = match input.into() {
            SegmentInput::Built(segment) => segment,
            SegmentInput::Raw(data) => S::from_data(&data)?,
        };

        let rotation = self.total_theta();
        segment.set_initial_rotation(rotation);
        debug!(
            "Added segment '{}' at rotation {:.4} (theta {:.4})",
            segment.geometry().label(),
            rotation,
            segment.geometry().theta()
        );

        self.segments.push(segment);
        Ok(&self.segments[self.segments.len() - 1])
    }

    pub fn segments(&self) -> &[S] {
        &self.segments
    }

    pub fn get(&self, index: usize) -> Option<&S> {
        self.segments.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, S> {
        self.segments.iter()
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Sum of every segment's span.
    pub fn total_theta(&self) -> f64 {
        self.segments.iter().map(|s| s.geometry().theta()).sum()
    }

    /// Largest outer radius of any segment, 0 for an empty donut.
    pub fn max_outer_radius(&self) -> f64 {
        self.segments
            .iter()
            .map(|s| s.geometry().outer_radius())
            .fold(0.0, f64::max)
    }

    /// Reorder the segments and lay them out again.
    pub fn sort_by<F>(&mut self, compare: F)
    where
        F: FnMut(&S, &S) -> Ordering,
    {
        self.segments.sort_by(compare);
        self.recompute_rotations();
    }

    pub(crate) fn segment_mut(&mut self, index: usize) -> Option<&mut S> {
        self.segments.get_mut(index)
    }

    fn recompute_rotations(&mut self) {
        let mut running = 0.0;
        for segment in &mut self.segments {
            segment.set_initial_rotation(running);
            running += segment.geometry().theta();
        }
    }
}

impl<'a, S> IntoIterator for &'a Donut<S> {
    type Item = &'a S;
    type IntoIter = std::slice::Iter<'a, S>;

    fn into_iter(self) -> Self::IntoIter {
        self.segments.iter()
    }
}
