//! Crate-level error types.

use std::fmt;

/// Errors produced by the rts_camera crate.
#[derive(Debug)]
pub enum CameraError {
    /// A requested look direction projected to zero length on the ground
    /// plane, so no yaw can be derived from it.
    DegenerateLookDirection,
    /// Camera configuration parsing/serialization failure.
    ConfigParse(serde_json::Error),
}

impl fmt::Display for CameraError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DegenerateLookDirection => {
                write!(f, "look direction is degenerate after ground-plane projection")
            }
            Self::ConfigParse(e) => write!(f, "camera config parse error: {e}"),
        }
    }
}

impl std::error::Error for CameraError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ConfigParse(e) => Some(e),
            Self::DegenerateLookDirection => None,
        }
    }
}

impl From<serde_json::Error> for CameraError {
    fn from(e: serde_json::Error) -> Self {
        Self::ConfigParse(e)
    }
}
