use glam::DVec3;
use stereoconf_lie::so3::SO3;

use crate::intrinsics::Intrinsics;
use crate::rescale::{derive_at, reproject_hd_to_full};
use crate::resolution::Resolution;

/// One of the two physical cameras of the stereo rig.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    /// The left camera, reference of the stereo pose
    Left,
    /// The right camera
    Right,
}

impl Side {
    /// Section name prefix used in the calibration file.
    pub fn section_prefix(&self) -> &'static str {
        match self {
            Side::Left => "LEFT_CAM",
            Side::Right => "RIGHT_CAM",
        }
    }
}

/// Rigid transform from the left camera to the right camera.
///
/// # Fields
///
/// * `rotation` - Axis-angle rotation vector in radians
/// * `translation` - Translation in the calibration tool units
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StereoPose {
    /// Axis-angle rotation vector in radians
    pub rotation: DVec3,
    /// Translation vector
    pub translation: DVec3,
}

impl StereoPose {
    /// Create a pose from a rotation and a translation.
    pub fn new(rotation: &SO3, translation: DVec3) -> Self {
        Self {
            rotation: rotation.log(),
            translation,
        }
    }

    /// Baseline as reported by the camera runtime: the x translation negated and scaled
    /// by 1000.
    ///
    /// Computed in single precision, like every value of the calibration file.
    pub fn baseline(&self) -> f64 {
        ((self.translation.x as f32) * -1000.0_f32) as f64
    }
}

/// Calibration of a stereo rig at the native resolution.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CalibrationRecord {
    /// Intrinsics of the left camera
    pub left: Intrinsics,
    /// Intrinsics of the right camera
    pub right: Intrinsics,
    /// Relative pose from the left to the right camera
    pub pose: StereoPose,
}

impl CalibrationRecord {
    /// Native intrinsics of one camera.
    pub fn camera(&self, side: Side) -> &Intrinsics {
        match side {
            Side::Left => &self.left,
            Side::Right => &self.right,
        }
    }

    /// Intrinsics of one camera derived at the given resolution.
    ///
    /// The native intrinsics are taken to be defined at the 2K framing.
    pub fn camera_at(&self, side: Side, res: Resolution) -> Intrinsics {
        derive_at(res, self.camera(side))
    }

    /// Lift a record calibrated at HD resolution to the 2K framing.
    ///
    /// The pose is resolution independent and kept as is.
    pub fn reproject_hd_to_full(&self) -> Self {
        Self {
            left: reproject_hd_to_full(&self.left),
            right: reproject_hd_to_full(&self.right),
            pose: self.pose,
        }
    }
}
