/// Error types shared by the loader, projection and render pipeline
use std::path::PathBuf;
use thiserror::Error;

/// Result alias used throughout the core crate
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// Mesh file missing or unreadable.
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Malformed vertex or face record.
    #[error("parse error on line {line}: {message}")]
    Parse { line: usize, message: String },

    /// A face addresses a vertex that does not exist (indices are 0-based).
    #[error("face {face} references vertex {index} but the mesh has {vertex_count} vertices")]
    InvalidFace {
        face: usize,
        index: usize,
        vertex_count: usize,
    },

    /// The XY bounding box has no area to scale into the image.
    #[error("degenerate mesh: maximum XY extent is {max_extent}, cannot compute a scale")]
    DegenerateMesh { max_extent: f64 },

    #[error("invalid image dimensions {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    #[error("invalid color {0:?}, expected rrggbb hex")]
    InvalidColor(String),

    #[error("unknown centering mode {0:?}, expected `bbox` or `offset`")]
    InvalidCentering(String),

    /// Failure reported by an external image encoder.
    #[error("image encoding failed: {0}")]
    Encode(String),
}

impl Error {
    pub fn parse(line: usize, message: impl Into<String>) -> Self {
        Self::Parse {
            line,
            message: message.into(),
        }
    }
}
