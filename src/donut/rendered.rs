use super::{HasGeometry, SegmentVariant};
use crate::color::{color_from_label, normalize_color};
use crate::error::Result;
use crate::geometry::{DonutSegment, PointOptions, SegmentData};

/// Presentation state the renderer keeps next to each segment.
#[derive(Debug, Clone, PartialEq)]
pub struct SegmentStyle {
    pub color: String,
    pub is_hovering: bool,
}

/// A segment paired with its fill color and hover state.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedSegment {
    segment: DonutSegment,
    style: SegmentStyle,
}

impl RenderedSegment {
    /// Wrap `segment`, falling back to a label-derived color.
    pub fn new(segment: DonutSegment, color: Option<&str>) -> Self {
        let color = match color {
            Some(c) => normalize_color(c),
            None => color_from_label(segment.label()),
        };
        Self {
            segment,
            style: SegmentStyle {
                color,
                is_hovering: false,
            },
        }
    }

    pub fn style(&self) -> &SegmentStyle {
        &self.style
    }

    pub fn color(&self) -> &str {
        &self.style.color
    }

    pub fn is_hovering(&self) -> bool {
        self.style.is_hovering
    }

    pub fn set_hovering(&mut self, hovering: bool) {
        self.style.is_hovering = hovering;
    }

    pub fn to_svg_path_definition(&self, options: PointOptions) -> String {
        self.segment.to_svg_path_definition(options)
    }
}

impl HasGeometry for RenderedSegment {
    fn geometry(&self) -> &DonutSegment {
        &self.segment
    }
}

impl SegmentVariant for RenderedSegment {
    fn from_data(data: &SegmentData) -> Result<Self> {
        let segment = DonutSegment::from_data(data)?;
        Ok(Self::new(segment, data.color.as_deref()))
    }

    fn set_initial_rotation(&mut self, rotation: f64) {
        self.segment.set_initial_rotation(rotation);
    }
}
