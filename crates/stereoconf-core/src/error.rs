use std::path::PathBuf;

/// Error types for the stereo calibration conversion.
#[derive(Debug, thiserror::Error)]
pub enum StereoConfError {
    /// The source calibration is incomplete or cannot be parsed.
    #[error("Malformed calibration input: {0}")]
    MalformedInput(String),

    /// The image size does not match any of the supported resolutions.
    #[error("Unsupported resolution: {width}x{height}")]
    UnsupportedResolution {
        /// Requested image width
        width: u32,
        /// Requested image height
        height: u32,
    },

    /// The destination file cannot be created or written.
    #[error("Failed to write calibration to {path}: {source}")]
    WriteFailure {
        /// Destination path
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Error reading the source stream.
    #[error("Failed to read calibration input. {0}")]
    Io(#[from] std::io::Error),
}
