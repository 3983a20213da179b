//! SVG renderer for donut charts
//!
//! Builds an SVG element tree with one `<g><path/></g>` group per segment.
//! Pointer events flip a segment's hover state and re-apply its path in
//! place: a hovered segment is pushed outwards by the hover offset. The
//! renderer never schedules anything itself; callers feed it events and
//! read the document back.

pub mod layout;
pub mod svg;

use tracing::debug;

use crate::donut::{Donut, HasGeometry, RenderedSegment};
use crate::error::{DonutError, Result};
use crate::geometry::PointOptions;
use layout::fit_view_box;
use svg::{SvgElement, SVG_NAMESPACE};

/// Parameters controlling how the chart is drawn.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderOptions {
    pub width: u32,
    pub height: u32,
    /// Rotation applied to the whole chart, in radians.
    pub rotation: f64,
    /// Radial push applied to hovered segments.
    pub hover_offset: f64,
    /// Space between the outermost arc and the view box edge.
    pub padding: f64,
    /// Inline CSS for the root element.
    pub style: Option<String>,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: 500,
            height: 500,
            rotation: 0.0,
            hover_offset: 2.0,
            padding: 3.0,
            style: Some("box-shadow: 0 0 5px black".to_string()),
        }
    }
}

impl RenderOptions {
    fn validate(&self) -> Result<()> {
        if self.width == 0 || self.height == 0 {
            return Err(DonutError::InvalidArgument(format!(
                "render size must be non-zero, got {}x{}",
                self.width, self.height
            )));
        }
        if !self.rotation.is_finite() {
            return Err(DonutError::InvalidArgument(format!(
                "rotation must be finite, got {}",
                self.rotation
            )));
        }
        for (name, value) in [("hover offset", self.hover_offset), ("padding", self.padding)] {
            if !value.is_finite() || value < 0.0 {
                return Err(DonutError::InvalidArgument(format!(
                    "{} must be finite and non-negative, got {}",
                    name, value
                )));
            }
        }
        Ok(())
    }
}

/// Pointer transitions delivered by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerEvent {
    Enter,
    Leave,
}

pub struct DonutRenderer {
    donut: Donut<RenderedSegment>,
    options: RenderOptions,
    svg: SvgElement,
}

impl DonutRenderer {
    pub fn new(donut: Donut<RenderedSegment>, options: RenderOptions) -> Result<Self> {
        options.validate()?;
        let mut renderer = Self {
            donut,
            options,
            svg: SvgElement::new("svg"),
        };
        renderer.draw();
        Ok(renderer)
    }

    /// (Re-)build the whole document, discarding the previous tree.
    pub fn draw(&mut self) {
        debug!("Drawing donut with {} segments", self.donut.len());
        let mut svg = self.create_svg_element();
        for segment in self.donut.iter() {
            svg.append_child(self.create_segment_element(segment));
        }
        self.svg = svg;
    }

    fn create_svg_element(&self) -> SvgElement {
        let view_box = fit_view_box(
            self.donut.max_outer_radius() + self.options.hover_offset,
            self.options.padding,
            self.options.width,
            self.options.height,
        );

        let mut svg = SvgElement::new("svg").with_attributes([
            ("xmlns", SVG_NAMESPACE.to_string()),
            ("width", self.options.width.to_string()),
            ("height", self.options.height.to_string()),
            ("viewBox", view_box.to_string()),
        ]);
        if let Some(style) = &self.options.style {
            svg.set_attribute("style", style.as_str());
        }
        svg
    }

    fn create_segment_element(&self, segment: &RenderedSegment) -> SvgElement {
        let path = SvgElement::new("path").with_attributes([
            (
                "d",
                segment.to_svg_path_definition(self.point_options(segment)),
            ),
            ("fill", segment.color().to_string()),
        ]);

        let mut g = SvgElement::new("g").with_attributes([("data-label", segment.geometry().label())]);
        g.append_child(path);
        g
    }

    fn point_options(&self, segment: &RenderedSegment) -> PointOptions {
        let offset = if segment.is_hovering() {
            self.options.hover_offset
        } else {
            0.0
        };
        PointOptions::new(self.options.rotation, offset)
    }

    /// Apply a pointer transition to the segment at `index`.
    pub fn handle_pointer(&mut self, index: usize, event: PointerEvent) -> Result<()> {
        let len = self.donut.len();
        let segment = self
            .donut
            .segment_mut(index)
            .ok_or(DonutError::SegmentIndex { index, len })?;

        let hovering = event == PointerEvent::Enter;
        if segment.is_hovering() == hovering {
            return Ok(());
        }
        segment.set_hovering(hovering);
        debug!(
            "Segment '{}' hover {}",
            segment.geometry().label(),
            if hovering { "on" } else { "off" }
        );

        self.update_segment_path_in_place(index)
    }

    /// Re-apply the path of one segment without rebuilding the document.
    pub fn update_segment_path_in_place(&mut self, index: usize) -> Result<()> {
        let len = self.donut.len();
        let segment = self
            .donut
            .get(index)
            .ok_or(DonutError::SegmentIndex { index, len })?;
        let d = segment.to_svg_path_definition(self.point_options(segment));

        if let Some(path) = self.svg.child_mut(index).and_then(|g| g.child_mut(0)) {
            path.set_attribute("d", d);
        }
        Ok(())
    }

    /// Rotate the whole chart and re-apply every path.
    pub fn set_rotation(&mut self, rotation: f64) -> Result<()> {
        if !rotation.is_finite() {
            return Err(DonutError::InvalidArgument(format!(
                "rotation must be finite, got {}",
                rotation
            )));
        }
        self.options.rotation = rotation;
        for index in 0..self.donut.len() {
            self.update_segment_path_in_place(index)?;
        }
        Ok(())
    }

    /// Index of the first segment with `label`.
    pub fn index_of(&self, label: &str) -> Option<usize> {
        self.donut
            .iter()
            .position(|s| s.geometry().label() == label)
    }

    /// Label and current path data of every segment, in draw order.
    pub fn path_definitions(&self) -> Vec<(&str, String)> {
        self.donut
            .iter()
            .map(|s| (s.geometry().label(), s.to_svg_path_definition(self.point_options(s))))
            .collect()
    }

    pub fn donut(&self) -> &Donut<RenderedSegment> {
        &self.donut
    }

    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    pub fn document(&self) -> &SvgElement {
        &self.svg
    }

    pub fn to_svg_string(&self) -> String {
        self.svg.to_markup()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::SegmentData;

    fn renderer() -> DonutRenderer {
        let donut = Donut::from_inputs([
            SegmentData::new("a", 25.0, 100.0, 10.0, 20.0).with_color("red"),
            SegmentData::new("b", 75.0, 100.0, 10.0, 20.0).with_color("blue"),
        ])
        .unwrap();
        DonutRenderer::new(donut, RenderOptions::default()).unwrap()
    }

    fn path_of(renderer: &DonutRenderer, index: usize) -> String {
        renderer.document().children()[index].children()[0]
            .attribute("d")
            .unwrap()
            .to_string()
    }

    #[test]
    fn test_document_structure() {
        let r = renderer();
        let svg = r.document();
        assert_eq!(svg.tag(), "svg");
        assert_eq!(svg.attribute("width"), Some("500"));
        assert_eq!(svg.attribute("viewBox"), Some("-25 -25 50 50"));
        assert_eq!(svg.attribute("style"), Some("box-shadow: 0 0 5px black"));
        assert_eq!(svg.children().len(), 2);

        let g = &svg.children()[0];
        assert_eq!(g.tag(), "g");
        assert_eq!(g.attribute("data-label"), Some("a"));
        assert_eq!(g.children()[0].attribute("fill"), Some("red"));
        assert_eq!(
            path_of(&r, 0),
            "M 10 0 L 20 0 A 20 20 0 0 1 0 20 L 0 10 A 10 10 0 0 0 10 0"
        );
    }

    #[test]
    fn test_hover_moves_only_that_segment() {
        let mut r = renderer();
        let before_b = path_of(&r, 1);

        r.handle_pointer(0, PointerEvent::Enter).unwrap();
        assert!(r.donut().segments()[0].is_hovering());
        assert_eq!(
            path_of(&r, 0),
            "M 12 0 L 22 0 A 22 22 0 0 1 0 22 L 0 12 A 12 12 0 0 0 12 0"
        );
        assert_eq!(path_of(&r, 1), before_b);

        r.handle_pointer(0, PointerEvent::Leave).unwrap();
        assert!(!r.donut().segments()[0].is_hovering());
        assert_eq!(
            path_of(&r, 0),
            "M 10 0 L 20 0 A 20 20 0 0 1 0 20 L 0 10 A 10 10 0 0 0 10 0"
        );
    }

    #[test]
    fn test_pointer_on_missing_segment() {
        let mut r = renderer();
        let err = r.handle_pointer(7, PointerEvent::Enter).unwrap_err();
        assert_eq!(err, DonutError::SegmentIndex { index: 7, len: 2 });
    }

    #[test]
    fn test_set_rotation_updates_every_path() {
        let mut r = renderer();
        r.set_rotation(std::f64::consts::FRAC_PI_2).unwrap();
        assert_eq!(
            path_of(&r, 0),
            "M 0 10 L 0 20 A 20 20 0 0 1 -20 0 L -10 0 A 10 10 0 0 0 0 10"
        );
        assert!(r.set_rotation(f64::NAN).is_err());
    }

    #[test]
    fn test_invalid_options_are_rejected() {
        let options = RenderOptions {
            width: 0,
            ..RenderOptions::default()
        };
        assert!(DonutRenderer::new(Donut::new(), options).is_err());

        let options = RenderOptions {
            hover_offset: -1.0,
            ..RenderOptions::default()
        };
        assert!(DonutRenderer::new(Donut::new(), options).is_err());
    }

    #[test]
    fn test_index_of_and_paths() {
        let r = renderer();
        assert_eq!(r.index_of("b"), Some(1));
        assert_eq!(r.index_of("zzz"), None);
        let paths = r.path_definitions();
        assert_eq!(paths[1].0, "b");
        assert!(paths[1].1.contains("A 20 20 0 1 1"));
    }

    #[test]
    fn test_markup_is_serialized() {
        let markup = renderer().to_svg_string();
        assert!(markup.starts_with("<svg xmlns=\"http://www.w3.org/2000/svg\""));
        assert!(markup.contains("<path d=\"M 10 0"));
        assert!(markup.trim_end().ends_with("</svg>"));
    }
}
