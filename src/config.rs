use anyhow::{Context, Result};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::warn;

use crate::cli::Args;
use crate::color::SegmentColoring;
use crate::donut::{Donut, HasGeometry, RenderedSegment};
use crate::error::DonutError;
use crate::geometry::SegmentData;
use crate::renderer::RenderOptions;

/// Order of segments around the ring
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, ValueEnum, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    /// Keep the order segments were given in
    #[default]
    None,
    Ascending,
    Descending,
}

impl SortOrder {
    pub fn name(&self) -> &'static str {
        match self {
            SortOrder::None => "none",
            SortOrder::Ascending => "ascending",
            SortOrder::Descending => "descending",
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub chart: ChartConfig,
    #[serde(default)]
    pub render: RenderConfig,
    #[serde(default)]
    pub segments: Vec<SegmentConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    pub inner_radius: f64,
    pub outer_radius: f64,
    /// Radians
    pub rotation: f64,
    /// Omitted = sum of segment values
    pub total: Option<f64>,
    pub sort: SortOrder,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            inner_radius: 40.0,
            outer_radius: 70.0,
            rotation: 0.0,
            total: None,
            sort: SortOrder::None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    pub width: u32,
    pub height: u32,
    pub hover_offset: f64,
    pub padding: f64,
    pub style: Option<String>,
    pub colors: SegmentColoring,
}

impl Default for RenderConfig {
    fn default() -> Self {
        let options = RenderOptions::default();
        Self {
            width: options.width,
            height: options.height,
            hover_offset: options.hover_offset,
            padding: options.padding,
            style: options.style,
            colors: SegmentColoring::Label,
        }
    }
}

/// One `[[segments]]` entry
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SegmentConfig {
    pub label: String,
    pub value: f64,
    #[serde(default)]
    pub color: Option<String>,
    /// Per-segment override of the chart radius
    #[serde(default)]
    pub inner_radius: Option<f64>,
    #[serde(default)]
    pub outer_radius: Option<f64>,
}

impl Config {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config at {}", path.display()))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config at {}", path.display()))?;
        Ok(config)
    }

    /// Get the default XDG config path (~/.config/donut-svg/config.toml)
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("donut-svg").join("config.toml"))
    }

    /// Load config from the default XDG path if it exists
    /// Returns None if file doesn't exist, logs warning on parse errors
    pub fn load_from_default_path() -> Option<Self> {
        let path = Self::default_path()?;
        if path.exists() {
            match Self::load(&path) {
                Ok(config) => Some(config),
                Err(e) => {
                    warn!("{:#}. Using defaults.", e);
                    None
                }
            }
        } else {
            None
        }
    }

    /// Initialize default config file at XDG path, returns the path
    pub fn init_default_config() -> Result<PathBuf> {
        let path = Self::default_path()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;
        Self::write_template(&path)?;
        Ok(path)
    }

    fn write_template(path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, Self::generate_config_template())
            .with_context(|| format!("Failed to write config at {}", path.display()))?;
        Ok(())
    }

    /// Generate a commented TOML config template
    pub fn generate_config_template() -> String {
        r##"# donut-svg configuration
# This file is auto-generated. Edit as needed.

[chart]
# Radius of the hole in the middle (0 draws a pie)
inner_radius = 40.0
# Outer radius of the ring
outer_radius = 70.0
# Rotation of the whole chart in radians (0 = first segment starts at 3 o'clock)
rotation = 0.0
# Value segments are measured against (omit to use the sum of all values)
# total = 100.0
# Segment order: "none" (as listed), "ascending", "descending"
sort = "none"

[render]
# Output size in pixels
width = 500
height = 500
# How far a hovered segment is pushed out
hover_offset = 2.0
# Space between the ring and the edge of the view box
padding = 3.0
# Inline CSS for the <svg> element
style = "box-shadow: 0 0 5px black"
# Segment colors: "label" (derived from each label), or a color scheme:
# "spectrum", "rainbow", "fire", "ocean", "forest", "purple", "monochrome"
colors = "label"

# One [[segments]] table per wedge, drawn clockwise in this order.
# color, inner_radius and outer_radius are optional per segment.
[[segments]]
label = "Rent"
value = 45.0

[[segments]]
label = "Food"
value = 25.0
# color = "#e4572e"

[[segments]]
label = "Transport"
value = 15.0

[[segments]]
label = "Savings"
value = 15.0
# outer_radius = 74.0
"##
        .to_string()
    }

    /// Merge CLI arguments into config (CLI takes priority)
    pub fn merge_args(&mut self, args: &Args) {
        if !args.segments.is_empty() {
            self.segments = args
                .segments
                .iter()
                .map(|s| SegmentConfig {
                    label: s.label.clone(),
                    value: s.value,
                    color: s.color.clone(),
                    inner_radius: None,
                    outer_radius: None,
                })
                .collect();
        }

        // Chart settings
        if let Some(total) = args.total {
            self.chart.total = Some(total);
        }
        if let Some(r) = args.inner_radius {
            self.chart.inner_radius = r;
        }
        if let Some(r) = args.outer_radius {
            self.chart.outer_radius = r;
        }
        if let Some(rotation) = args.rotation {
            self.chart.rotation = rotation;
        }
        if let Some(sort) = args.sort {
            self.chart.sort = sort;
        }

        // Render settings
        if let Some(offset) = args.hover_offset {
            self.render.hover_offset = offset;
        }
        if let Some(colors) = args.colors {
            self.render.colors = colors;
        }
        if let Some(width) = args.width {
            self.render.width = width;
        }
        if let Some(height) = args.height {
            self.render.height = height;
        }
    }

    /// Construction parameters for every configured segment.
    pub fn segment_data(&self) -> Vec<SegmentData> {
        let total = self
            .chart
            .total
            .unwrap_or_else(|| self.segments.iter().map(|s| s.value).sum());
        let count = self.segments.len();

        self.segments
            .iter()
            .enumerate()
            .map(|(i, s)| {
                let color = match (&s.color, self.render.colors) {
                    (Some(color), _) => Some(color.clone()),
                    (None, SegmentColoring::Label) => None,
                    (None, coloring) => Some(coloring.color_for(&s.label, i, count)),
                };
                SegmentData {
                    label: s.label.clone(),
                    value: s.value,
                    total,
                    r0: s.inner_radius.unwrap_or(self.chart.inner_radius),
                    r1: s.outer_radius.unwrap_or(self.chart.outer_radius),
                    rotation: None,
                    color,
                }
            })
            .collect()
    }

    /// Build the chart described by this config.
    pub fn build_donut(&self) -> std::result::Result<Donut<RenderedSegment>, DonutError> {
        let mut donut: Donut<RenderedSegment> = Donut::from_inputs(self.segment_data())?;
        match self.chart.sort {
            SortOrder::None => {}
            SortOrder::Ascending => donut.sort_by(|a, b| {
                a.geometry().value().total_cmp(&b.geometry().value())
            }),
            SortOrder::Descending => donut.sort_by(|a, b| {
                b.geometry().value().total_cmp(&a.geometry().value())
            }),
        }
        Ok(donut)
    }

    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            width: self.render.width,
            height: self.render.height,
            rotation: self.chart.rotation,
            hover_offset: self.render.hover_offset,
            padding: self.render.padding,
            style: self.render.style.clone(),
        }
    }

    /// Write chart and render settings into the config at `path`, keeping
    /// its comments and segment tables. Creates the file from the template
    /// first if it does not exist.
    pub fn save_overrides(&self, path: &Path) -> Result<()> {
        if !path.exists() {
            Self::write_template(path)?;
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config at {}", path.display()))?;
        let mut doc = content
            .parse::<toml_edit::DocumentMut>()
            .with_context(|| format!("Failed to parse config at {}", path.display()))?;

        if !doc.contains_key("chart") {
            doc["chart"] = toml_edit::table();
        }
        doc["chart"]["inner_radius"] = toml_edit::value(self.chart.inner_radius);
        doc["chart"]["outer_radius"] = toml_edit::value(self.chart.outer_radius);
        doc["chart"]["rotation"] = toml_edit::value(self.chart.rotation);
        doc["chart"]["sort"] = toml_edit::value(self.chart.sort.name());
        if let Some(total) = self.chart.total {
            doc["chart"]["total"] = toml_edit::value(total);
        }

        if !doc.contains_key("render") {
            doc["render"] = toml_edit::table();
        }
        doc["render"]["width"] = toml_edit::value(self.render.width as i64);
        doc["render"]["height"] = toml_edit::value(self.render.height as i64);
        doc["render"]["hover_offset"] = toml_edit::value(self.render.hover_offset);
        doc["render"]["padding"] = toml_edit::value(self.render.padding);
        doc["render"]["colors"] = toml_edit::value(self.render.colors.to_string());

        std::fs::write(path, doc.to_string())
            .with_context(|| format!("Failed to write config at {}", path.display()))?;
        Ok(())
    }
}
