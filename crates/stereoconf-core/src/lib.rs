#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// Error types for the calibration conversion.
pub mod error;

/// Fixed sensor geometry constants.
pub mod geometry;

/// Camera intrinsics and lens distortion.
pub mod intrinsics;

/// Stereo calibration record and relative pose.
pub mod record;

/// Resolution dependent intrinsics derivation.
pub mod rescale;

/// Supported output resolutions.
pub mod resolution;

pub use error::StereoConfError;
pub use intrinsics::{Distortion, Intrinsics};
pub use record::{CalibrationRecord, Side, StereoPose};
pub use resolution::Resolution;
