use thiserror::Error;

/// Errors from validating builder settings and constructors.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum VisibilityError {
    /// Threshold outside `[0, 1]` or `NaN`.
    #[error("visibility threshold must be between 0.0 and 1.0, got {0}")]
    InvalidThreshold(f64),

    /// Image width or height not positive and finite.
    #[error("image dimensions must be positive and finite, got {width}x{height}")]
    InvalidDimensions {
        /// Rejected width.
        width: f64,
        /// Rejected height.
        height: f64,
    },

    /// Crop with a negative or non-finite origin, or a non-positive size.
    #[error("invalid crop: origin ({x}, {y}) must be >= 0 and size {width}x{height} must be positive")]
    InvalidCrop {
        /// Rejected left edge.
        x: f64,
        /// Rejected top edge.
        y: f64,
        /// Rejected width.
        width: f64,
        /// Rejected height.
        height: f64,
    },
}
