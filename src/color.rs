use palette::{Hsl, IntoColor, Srgb};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum ColorScheme {
    #[default]
    Spectrum,
    Rainbow,
    Fire,
    Ocean,
    Forest,
    Purple,
    Monochrome,
}

impl FromStr for ColorScheme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "spectrum" => Ok(Self::Spectrum),
            "rainbow" => Ok(Self::Rainbow),
            "fire" => Ok(Self::Fire),
            "ocean" => Ok(Self::Ocean),
            "forest" => Ok(Self::Forest),
            "purple" => Ok(Self::Purple),
            "mono" | "monochrome" => Ok(Self::Monochrome),
            _ => Err(format!("Unknown color scheme: {}", s)),
        }
    }
}

impl ColorScheme {
    /// Get color for a position around the ring (0.0 to 1.0)
    pub fn get_color(&self, position: f32) -> (u8, u8, u8) {
        let (h, s, l) = match self {
            ColorScheme::Spectrum => {
                // Classic spectrum: purple -> blue -> cyan -> green -> yellow -> red
                let hue = 270.0 - (position * 270.0);
                (hue, 0.9, 0.55)
            }
            ColorScheme::Rainbow => {
                let hue = position * 360.0;
                (hue, 0.85, 0.6)
            }
            ColorScheme::Fire => {
                // Red -> orange -> yellow
                let hue = position * 60.0;
                (hue, 0.95, 0.5)
            }
            ColorScheme::Ocean => {
                // Deep blue -> cyan -> teal
                let hue = 180.0 + position * 60.0;
                (hue, 0.8, 0.475)
            }
            ColorScheme::Forest => {
                let hue = 80.0 + position * 60.0;
                (hue, 0.75, 0.425)
            }
            ColorScheme::Purple => {
                let hue = 270.0 + position * 60.0;
                (hue, 0.8, 0.5)
            }
            ColorScheme::Monochrome => {
                // Gray ramp walking around the ring
                (0.0, 0.0, 0.25 + position * 0.5)
            }
        };

        let hsl = Hsl::new(h, s, l.clamp(0.0, 1.0));
        let rgb: Srgb = hsl.into_color();

        (
            (rgb.red.clamp(0.0, 1.0) * 255.0) as u8,
            (rgb.green.clamp(0.0, 1.0) * 255.0) as u8,
            (rgb.blue.clamp(0.0, 1.0) * 255.0) as u8,
        )
    }

    pub fn name(&self) -> &'static str {
        match self {
            ColorScheme::Spectrum => "spectrum",
            ColorScheme::Rainbow => "rainbow",
            ColorScheme::Fire => "fire",
            ColorScheme::Ocean => "ocean",
            ColorScheme::Forest => "forest",
            ColorScheme::Purple => "purple",
            ColorScheme::Monochrome => "monochrome",
        }
    }

    pub fn all() -> &'static [ColorScheme] {
        &[
            ColorScheme::Spectrum,
            ColorScheme::Rainbow,
            ColorScheme::Fire,
            ColorScheme::Ocean,
            ColorScheme::Forest,
            ColorScheme::Purple,
            ColorScheme::Monochrome,
        ]
    }
}

/// RGB color with `#rrggbb` conversions
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct RgbColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl RgbColor {
    /// Parse from hex string like "#FF0000" or "FF0000"
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.trim_start_matches('#');
        if hex.len() != 6 || !hex.is_ascii() {
            return None;
        }
        let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
        let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
        let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
        Some(Self { r, g, b })
    }

    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl From<(u8, u8, u8)> for RgbColor {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self { r, g, b }
    }
}

/// Deterministic fill color derived from a segment label.
///
/// The label's chars are hashed with FNV-1a and the low 24 bits become the
/// color. Only determinism matters here, not the exact bytes.
pub fn color_from_label(label: &str) -> String {
    const FNV_OFFSET: u32 = 0x811c_9dc5;
    const FNV_PRIME: u32 = 0x0100_0193;

    let hash = label.chars().fold(FNV_OFFSET, |hash, ch| {
        (hash ^ ch as u32).wrapping_mul(FNV_PRIME)
    });
    let [_, r, g, b] = hash.to_be_bytes();
    RgbColor { r, g, b }.to_hex()
}

/// Lowercase `#rrggbb` colors; anything else (named CSS colors, `rgb(...)`)
/// passes through untouched.
pub fn normalize_color(color: &str) -> String {
    let trimmed = color.trim();
    match RgbColor::from_hex(trimmed) {
        Some(rgb) if trimmed.starts_with('#') => rgb.to_hex(),
        _ => trimmed.to_string(),
    }
}

/// How segments without an explicit color get one.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub enum SegmentColoring {
    /// Hash the label.
    #[default]
    Label,
    /// Walk a color scheme around the ring.
    Scheme(ColorScheme),
}

impl SegmentColoring {
    /// Color for the segment at `index` of `count`.
    pub fn color_for(&self, label: &str, index: usize, count: usize) -> String {
        match self {
            SegmentColoring::Label => color_from_label(label),
            SegmentColoring::Scheme(scheme) => {
                let position = index as f32 / count.max(1) as f32;
                RgbColor::from(scheme.get_color(position)).to_hex()
            }
        }
    }
}

impl fmt::Display for SegmentColoring {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SegmentColoring::Label => write!(f, "label"),
            SegmentColoring::Scheme(scheme) => write!(f, "{}", scheme.name()),
        }
    }
}

impl FromStr for SegmentColoring {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "label" => Ok(SegmentColoring::Label),
            other => other
                .parse()
                .map(SegmentColoring::Scheme)
                .map_err(|_| format!("Unknown coloring '{}': expected label or a color scheme", s)),
        }
    }
}

impl Serialize for SegmentColoring {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for SegmentColoring {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        SegmentColoring::from_str(&s).map_err(serde::de::Error::custom)
    }
}
