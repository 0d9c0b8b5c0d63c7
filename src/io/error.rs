//! Error types for grid access, persistence and tooling

use std::fmt;
use std::path::PathBuf;

/// Main error type for all tilemap operations
#[derive(Debug)]
pub enum MapError {
    /// Coordinates fall outside `[0, size)` on either axis
    OutOfBounds {
        /// Row coordinate that was requested
        i: i32,
        /// Column coordinate that was requested
        j: i32,
        /// Current map dimension
        size: usize,
    },

    /// Requested or persisted map dimension is not usable
    InvalidSize {
        /// Size as requested or read from a stream
        size: i64,
        /// Largest accepted dimension
        max: usize,
    },

    /// Stream read or write failed part way through
    ///
    /// A truncated input surfaces here with `UnexpectedEof` as the source.
    /// The map being restored is left partially loaded and must be discarded.
    Stream {
        /// Description of the stream operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Failed to write a minimap image to disk
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
    },

    /// A footprint cannot be built on because a cell is encumbered
    FootprintBlocked {
        /// Row of the footprint anchor
        i: i32,
        /// Column of the footprint anchor
        j: i32,
        /// Side length of the square footprint
        size: usize,
    },

    /// Parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },
}

impl fmt::Display for MapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfBounds { i, j, size } => {
                write!(f, "Tile ({i}, {j}) is outside the {size}x{size} map")
            }
            Self::InvalidSize { size, max } => {
                write!(f, "Invalid map size {size} (expected 0..={max})")
            }
            Self::Stream { operation, source } => {
                write!(f, "Stream error during {operation}: {source}")
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export minimap to '{}': {source}",
                    path.display()
                )
            }
            Self::FootprintBlocked { i, j, size } => {
                write!(
                    f,
                    "Footprint {size}x{size} at ({i}, {j}) is not constructible"
                )
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
        }
    }
}

impl std::error::Error for MapError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Stream { source, .. } | Self::FileSystem { source, .. } => Some(source),
            Self::ImageExport { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for tilemap results
pub type Result<T> = std::result::Result<T, MapError>;

/// Attaches the failing stream operation to raw I/O results
pub trait StreamContext<T> {
    /// Convert an I/O failure into [`MapError::Stream`]
    ///
    /// # Errors
    ///
    /// Propagates the original error wrapped with the operation name
    fn stream_context(self, operation: &'static str) -> Result<T>;
}

impl<T> StreamContext<T> for std::io::Result<T> {
    fn stream_context(self, operation: &'static str) -> Result<T> {
        self.map_err(|source| MapError::Stream { operation, source })
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> MapError {
    MapError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create an out-of-bounds error for the given coordinates
pub const fn out_of_bounds(i: i32, j: i32, size: usize) -> MapError {
    MapError::OutOfBounds { i, j, size }
}
