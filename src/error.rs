//! Error types for donut geometry and rendering.

use thiserror::Error;

/// Errors raised while building points, segments, or rendered charts.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DonutError {
    /// A constructor received arguments it cannot work with
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// A segment whose total cannot produce a finite angular span
    #[error("Degenerate segment '{label}': total must be positive and finite, got {total}")]
    DegenerateSegment {
        /// Label of the rejected segment.
        label: String,
        /// The offending total.
        total: f64,
    },

    /// A segment index that does not exist in the chart
    #[error("Segment index {index} out of range for chart with {len} segments")]
    SegmentIndex {
        /// The requested index.
        index: usize,
        /// Number of segments in the chart.
        len: usize,
    },
}

/// Result type alias for donut operations.
pub type Result<T> = std::result::Result<T, DonutError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = DonutError::DegenerateSegment {
            label: "rent".to_string(),
            total: 0.0,
        };
        assert!(err.to_string().contains("rent"));
        assert!(err.to_string().contains("positive"));

        let err = DonutError::SegmentIndex { index: 4, len: 2 };
        assert_eq!(
            err.to_string(),
            "Segment index 4 out of range for chart with 2 segments"
        );
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<DonutError>();
    }
}
