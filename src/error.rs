//! Error types for card rendering and input loading

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for card operations
pub type Result<T> = std::result::Result<T, CardError>;

/// Errors raised while loading inputs or rendering a card
#[derive(Error, Debug)]
pub enum CardError {
    /// Failed to read an input file
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A color is not in `#rrggbb` form
    #[error("Invalid color for {field}: '{value}' (expected #rrggbb)")]
    InvalidColor { field: String, value: String },

    /// Stats snapshot holds values that cannot be drawn
    #[error("Invalid stats: {0}")]
    InvalidStats(String),

    /// Render configuration holds values that cannot be drawn
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Configuration document could not be parsed
    #[error("Failed to parse configuration: {0}")]
    ConfigParse(String),

    /// Stats document could not be parsed
    #[error("Failed to parse stats: {0}")]
    StatsParse(String),

    /// Icon table could not be parsed
    #[error("Failed to parse icon table: {0}")]
    IconParse(String),

    /// Pre-encoded font table could not be parsed
    #[error("Failed to parse font table: {0}")]
    FontTable(String),

    /// Requested built-in preset does not exist
    #[error("Unknown built-in preset '{name}'. Available: {available}")]
    UnknownPreset { name: String, available: String },

    /// Image bytes are not a format the card can embed
    #[error("Unsupported image: {0}")]
    UnsupportedImage(String),
}

impl CardError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        CardError::Io {
            path: path.into(),
            source,
        }
    }
}
