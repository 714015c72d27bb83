use std::fmt;

/// Why a curl construction could not be produced for this frame.
///
/// Neither case is fatal: the curl effect falls back to drawing the current
/// page undeformed.
#[derive(Debug, Clone, PartialEq)]
pub enum CurlGeometryError {
    EmptyViewport { width: f32, height: f32 },
    NonFinite { point: &'static str },
}

impl fmt::Display for CurlGeometryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CurlGeometryError::EmptyViewport { width, height } => {
                write!(f, "viewport {width}x{height} has no area")
            }
            CurlGeometryError::NonFinite { point } => {
                write!(f, "curl point {point} is not finite")
            }
        }
    }
}

impl std::error::Error for CurlGeometryError {}
