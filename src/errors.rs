use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PlanetGenError {
    // Validation errors
    #[error("{name} must be positive, got {value}")]
    InvalidDimension { name: &'static str, value: u32 },

    #[error("{name} must not exceed {max}, got {value}")]
    DimensionTooLarge {
        name: &'static str,
        value: u32,
        max: u32,
    },

    #[error("Invalid planet descriptor: {reason}")]
    InvalidDescriptor { reason: String },

    #[error("Invalid argument: {reason}")]
    InvalidArgument { reason: String },

    // Catalog and file errors
    #[error("Failed to get config directory")]
    ConfigDirNotFound,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to serialize catalog: {0}")]
    Serialization(#[from] toml::ser::Error),

    #[error("Failed to deserialize catalog: {0}")]
    Deserialization(#[from] toml::de::Error),

    #[error("Catalog file not found at path: {path}")]
    CatalogFileNotFound { path: PathBuf },

    #[error("Planet '{name}' not found in catalog")]
    PlanetNotFound { name: String },

    #[error("Corrupted grid file: {reason}")]
    CorruptedGridFile { reason: String },

    #[error("Failed to export image: {0}")]
    ImageExport(#[from] image::ImageError),
}

/// Result type alias for all operations
pub type PlanetGenResult<T> = Result<T, PlanetGenError>;
