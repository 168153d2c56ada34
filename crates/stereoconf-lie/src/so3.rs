use glam::{DQuat, DVec3};

/// Threshold below which the rotation angle is treated as zero.
const SMALL_ANGLE_EPS: f64 = 1e-12;

/// A 3D rotation stored as a unit quaternion.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SO3 {
    /// The unit quaternion representing the rotation.
    pub q: DQuat,
}

impl SO3 {
    /// The identity rotation.
    pub const IDENTITY: Self = Self { q: DQuat::IDENTITY };

    /// Create a rotation from a quaternion.
    ///
    /// The quaternion is normalized, so calibration files carrying a slightly non-unit
    /// quaternion still produce a proper rotation.
    pub fn from_quaternion(quat: &DQuat) -> Self {
        Self {
            q: quat.normalize(),
        }
    }

    /// Create a rotation from the `x, y, z, w` components of a quaternion.
    pub fn from_xyzw(x: f64, y: f64, z: f64, w: f64) -> Self {
        Self::from_quaternion(&DQuat::from_xyzw(x, y, z, w))
    }

    /// Lie algebra -> Lie group
    pub fn exp(v: DVec3) -> Self {
        let theta = v.length();
        let theta_half = theta / 2.0;

        let (w, b) = if theta > SMALL_ANGLE_EPS {
            (theta_half.cos(), theta_half.sin() / theta)
        } else {
            (1.0, 0.5)
        };
        let xyz = b * v;

        Self {
            q: DQuat::from_xyzw(xyz.x, xyz.y, xyz.z, w),
        }
    }

    /// Lie group -> Lie algebra
    ///
    /// Returns the rotation vector (axis scaled by the angle in radians), with the angle in
    /// `[0, pi]`.
    pub fn log(&self) -> DVec3 {
        // q and -q are the same rotation, pick the one with the shortest angle
        let q = if self.q.w < 0.0 { -self.q } else { self.q };

        let vec = DVec3::new(q.x, q.y, q.z);
        let sin_half = vec.length();

        if sin_half > SMALL_ANGLE_EPS {
            let theta = 2.0 * sin_half.atan2(q.w);
            vec * (theta / sin_half)
        } else {
            // first order approximation, exact zero for the identity
            vec * 2.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn assert_vec_eq(a: DVec3, b: DVec3) {
        assert_relative_eq!(a.x, b.x, epsilon = 1e-9);
        assert_relative_eq!(a.y, b.y, epsilon = 1e-9);
        assert_relative_eq!(a.z, b.z, epsilon = 1e-9);
    }

    #[test]
    fn test_identity() {
        assert_eq!(SO3::IDENTITY.q, DQuat::from_xyzw(0.0, 0.0, 0.0, 1.0));
        assert_eq!(SO3::IDENTITY.log(), DVec3::ZERO);
    }

    #[test]
    fn test_from_quaternion_normalizes() {
        let s = SO3::from_xyzw(0.0, 0.0, 0.0, 2.0);
        assert_eq!(s.q, DQuat::IDENTITY);
    }

    #[test]
    fn test_log_quarter_turn() {
        let half = std::f64::consts::FRAC_PI_4;
        let so3 = SO3::from_xyzw(0.0, 0.0, half.sin(), half.cos());
        assert_vec_eq(so3.log(), DVec3::new(0.0, 0.0, std::f64::consts::FRAC_PI_2));
    }

    #[test]
    fn test_log_negated_quaternion() {
        let so3 = SO3::exp(DVec3::new(0.1, -0.2, 0.3));
        let flipped = SO3::from_quaternion(&-so3.q);
        assert_vec_eq(flipped.log(), DVec3::new(0.1, -0.2, 0.3));
    }

    #[test]
    fn test_exp_log() {
        let v = DVec3::new(1.0, 0.0, 0.0);
        assert_vec_eq(SO3::exp(v).log(), v);

        let v = DVec3::new(0.01, 0.02, -0.005);
        assert_vec_eq(SO3::exp(v).log(), v);
    }

    #[test]
    fn test_exp_zero() {
        let s = SO3::exp(DVec3::ZERO);
        assert_eq!(s.q, DQuat::IDENTITY);
    }
}
