/// Number of lens distortion coefficients in the persisted camera model.
pub const NUM_DISTORTION_COEFFS: usize = 5;

/// Represents the Brown-Conrady distortion coefficients of a camera.
///
/// The coefficients are stored in the `[k1, k2, p1, p2, k3]` order used by both the
/// calibration tool and the camera runtime.
///
/// # Fields
///
/// * `k1` - The first radial distortion coefficient
/// * `k2` - The second radial distortion coefficient
/// * `p1` - The first tangential distortion coefficient
/// * `p2` - The second tangential distortion coefficient
/// * `k3` - The third radial distortion coefficient
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Distortion {
    /// The first radial distortion coefficient
    pub k1: f64,
    /// The second radial distortion coefficient
    pub k2: f64,
    /// The first tangential distortion coefficient
    pub p1: f64,
    /// The second tangential distortion coefficient
    pub p2: f64,
    /// The third radial distortion coefficient
    pub k3: f64,
}

impl Distortion {
    /// Create distortion parameters with all coefficients set to zero.
    pub fn none() -> Self {
        Self::default()
    }

    /// Overwrite the leading coefficients with an ordered list of values.
    ///
    /// Coefficients past the end of the list keep their current value and values past the
    /// fifth are ignored.
    ///
    /// # Arguments
    ///
    /// * `coeffs` - The coefficients in `[k1, k2, p1, p2, k3]` order.
    pub fn set_prefix(&mut self, coeffs: &[f64]) {
        let mut values = self.to_array();
        values
            .iter_mut()
            .zip(coeffs.iter())
            .for_each(|(dst, src)| *dst = *src);
        *self = Self::from_array(values);
    }

    /// Create distortion parameters from exactly five coefficients.
    pub fn from_array(coeffs: [f64; NUM_DISTORTION_COEFFS]) -> Self {
        let [k1, k2, p1, p2, k3] = coeffs;
        Self { k1, k2, p1, p2, k3 }
    }

    /// Return the coefficients in `[k1, k2, p1, p2, k3]` order.
    pub fn to_array(&self) -> [f64; NUM_DISTORTION_COEFFS] {
        [self.k1, self.k2, self.p1, self.p2, self.k3]
    }

    /// Check if there is any distortion.
    pub fn has_distortion(&self) -> bool {
        self.to_array().iter().any(|&c| c != 0.0)
    }
}

/// Represents the intrinsic parameters of one physical camera at a given resolution.
///
/// # Fields
///
/// * `fx` - The focal length in the x direction, in pixels
/// * `fy` - The focal length in the y direction, in pixels
/// * `cx` - The x coordinate of the principal point, in pixels
/// * `cy` - The y coordinate of the principal point, in pixels
/// * `distortion` - The lens distortion coefficients
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Intrinsics {
    /// The focal length in the x direction
    pub fx: f64,
    /// The focal length in the y direction
    pub fy: f64,
    /// The x coordinate of the principal point
    pub cx: f64,
    /// The y coordinate of the principal point
    pub cy: f64,
    /// The lens distortion coefficients
    pub distortion: Distortion,
}

impl Intrinsics {
    /// Create intrinsics from focal lengths and principal point, without distortion.
    pub fn new(fx: f64, fy: f64, cx: f64, cy: f64) -> Self {
        Self {
            fx,
            fy,
            cx,
            cy,
            distortion: Distortion::none(),
        }
    }

    /// Return a copy with the given distortion coefficients.
    pub fn with_distortion(self, distortion: Distortion) -> Self {
        Self { distortion, ..self }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distortion_short_prefix_on_zeros() {
        let mut d = Distortion::none();
        d.set_prefix(&[0.1, -0.2]);
        assert_eq!(d.to_array(), [0.1, -0.2, 0.0, 0.0, 0.0]);
        assert!(d.has_distortion());
    }

    #[test]
    fn distortion_short_prefix_keeps_tail() {
        let mut d = Distortion::from_array([1.0, 2.0, 3.0, 4.0, 5.0]);
        d.set_prefix(&[-1.0, -2.0]);
        assert_eq!(d.to_array(), [-1.0, -2.0, 3.0, 4.0, 5.0]);
    }

    #[test]
    fn distortion_long_prefix() {
        let mut d = Distortion::none();
        d.set_prefix(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0]);
        assert_eq!(d.to_array(), [1.0, 2.0, 3.0, 4.0, 5.0]);
        assert_eq!(d.k3, 5.0);
    }

    #[test]
    fn distortion_none() {
        let mut d = Distortion::none();
        assert!(!d.has_distortion());
        d.set_prefix(&[]);
        assert!(!d.has_distortion());
    }

    #[test]
    fn intrinsics_with_distortion() {
        let d = Distortion::from_array([0.1, 0.0, 0.0, 0.0, 0.0]);
        let k = Intrinsics::new(700.0, 710.0, 640.0, 360.0).with_distortion(d);
        assert_eq!((k.fx, k.fy, k.cx, k.cy), (700.0, 710.0, 640.0, 360.0));
        assert_eq!(k.distortion, d);
    }
}
