#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]
//!
//! # Stereoconf Lie Groups
//!
//! Provides the SO(3) rotation group used to turn the relative orientation of a stereo rig
//! (stored as a unit quaternion by calibration tools) into the axis-angle vector expected by
//! the camera runtime.
//!
//! ## Example
//!
//! ```rust
//! use glam::DQuat;
//! use stereoconf_lie::so3::SO3;
//!
//! let rotation = SO3::from_quaternion(&DQuat::from_xyzw(0.0, 0.0, 0.0, 1.0));
//! let axis_angle = rotation.log();
//! assert_eq!(axis_angle.length(), 0.0);
//! ```

/// Special Orthogonal group SO(3) for 3D rotations.
pub mod so3;
