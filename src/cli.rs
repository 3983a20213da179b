use clap::Parser;
use std::path::PathBuf;

use crate::color::SegmentColoring;
use crate::config::SortOrder;

/// A segment given on the command line as `LABEL=VALUE[:COLOR]`.
#[derive(Debug, Clone, PartialEq)]
pub struct SegmentArg {
    pub label: String,
    pub value: f64,
    pub color: Option<String>,
}

pub fn parse_segment(s: &str) -> Result<SegmentArg, String> {
    let (label, rest) = s
        .rsplit_once('=')
        .ok_or_else(|| format!("Invalid segment '{}': expected LABEL=VALUE[:COLOR]", s))?;
    let label = label.trim();
    if label.is_empty() {
        return Err(format!("Invalid segment '{}': label is empty", s));
    }

    let (value, color) = match rest.split_once(':') {
        Some((value, color)) => (value, Some(color.trim().to_string())),
        None => (rest, None),
    };
    let value: f64 = value
        .trim()
        .parse()
        .map_err(|_| format!("Invalid segment value '{}' for '{}'", value.trim(), label))?;

    Ok(SegmentArg {
        label: label.to_string(),
        value,
        color: color.filter(|c| !c.is_empty()),
    })
}

#[derive(Parser, Debug, Default)]
#[command(name = "donut-svg")]
#[command(author, version, about = "Render donut and pie charts as SVG")]
pub struct Args {
    /// Config file path
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Write the SVG to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Segment as LABEL=VALUE[:COLOR]; repeat for more. Replaces config segments
    #[arg(short, long = "segment", value_parser = parse_segment)]
    pub segments: Vec<SegmentArg>,

    /// Value every segment is measured against (default: sum of values)
    #[arg(long)]
    pub total: Option<f64>,

    /// Radius of the hole (0 for a pie)
    #[arg(long)]
    pub inner_radius: Option<f64>,

    /// Outer radius of the ring
    #[arg(long)]
    pub outer_radius: Option<f64>,

    /// Chart rotation in radians
    #[arg(long, allow_hyphen_values = true)]
    pub rotation: Option<f64>,

    /// How far hovered segments are pushed out
    #[arg(long)]
    pub hover_offset: Option<f64>,

    /// Draw the segment with this label as hovered; repeat for more
    #[arg(long = "hover")]
    pub hover: Vec<String>,

    /// Segment coloring: label, spectrum, rainbow, fire, ocean, forest, purple, monochrome
    #[arg(long)]
    pub colors: Option<SegmentColoring>,

    /// Segment order around the ring
    #[arg(long)]
    pub sort: Option<SortOrder>,

    /// Output width in pixels
    #[arg(long)]
    pub width: Option<u32>,

    /// Output height in pixels
    #[arg(long)]
    pub height: Option<u32>,

    /// Print LABEL<TAB>PATH lines instead of an SVG document
    #[arg(long)]
    pub paths: bool,

    /// Write a commented default config file and exit
    #[arg(long)]
    pub init_config: bool,

    /// Persist chart and render settings back to the config file
    #[arg(long)]
    pub save: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_segment() {
        assert_eq!(
            parse_segment("Rent=25"),
            Ok(SegmentArg {
                label: "Rent".to_string(),
                value: 25.0,
                color: None,
            })
        );
        assert_eq!(
            parse_segment("a=b=1.5:#ff0000").unwrap(),
            SegmentArg {
                label: "a=b".to_string(),
                value: 1.5,
                color: Some("#ff0000".to_string()),
            }
        );
    }

    #[test]
    fn test_parse_segment_errors() {
        assert!(parse_segment("Rent").is_err());
        assert!(parse_segment("=4").is_err());
        assert!(parse_segment("Rent=lots").is_err());
    }

    #[test]
    fn test_args_parse() {
        let args = Args::try_parse_from([
            "donut-svg",
            "-s",
            "a=1",
            "--segment",
            "b=3:navy",
            "--rotation",
            "-1.5",
            "--colors",
            "ocean",
            "--sort",
            "descending",
            "--hover",
            "a",
        ])
        .unwrap();
        assert_eq!(args.segments.len(), 2);
        assert_eq!(args.rotation, Some(-1.5));
        assert_eq!(args.hover, vec!["a".to_string()]);
        assert_eq!(args.sort, Some(SortOrder::Descending));
        assert!(matches!(args.colors, Some(SegmentColoring::Scheme(_))));
    }
}
