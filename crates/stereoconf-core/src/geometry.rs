//! Fixed sensor geometry used to move intrinsics between resolutions.
//!
//! Every output resolution is a centered crop of the physical sensor, optionally binned.
//! The crop offsets below locate the origin of each output frame in full sensor pixels.

use crate::resolution::Resolution;

/// Physical sensor width in pixels.
pub const SENSOR_WIDTH: u32 = 2688;

/// Physical sensor height in pixels.
pub const SENSOR_HEIGHT: u32 = 1520;

/// Sub-pixel alignment correction of the 2x2 binned mode, in sensor pixels.
pub const BINNING_OFFSET_2X: f64 = 3.0;

/// Sub-pixel alignment correction of the 4x4 binned mode, in sensor pixels.
pub const BINNING_OFFSET_4X: f64 = 5.0;

/// A pixel offset along the two image axes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CropOffset {
    /// Offset along the image width
    pub w: f64,
    /// Offset along the image height
    pub h: f64,
}

/// Alignment correction added to the crop center for a binning factor.
pub fn binning_offset(binning: u32) -> f64 {
    match binning {
        2 => BINNING_OFFSET_2X,
        4 => BINNING_OFFSET_4X,
        _ => 0.0,
    }
}

/// Crop offset of a resolution relative to the physical sensor origin.
///
/// `((2688 - w*b) / 2 + offset(b), (1520 - h*b) / 2 + offset(b))` where `b` is the binning
/// factor of the resolution.
pub fn crop_offset(res: Resolution) -> CropOffset {
    let (w, h) = res.size();
    let b = res.binning();
    let offset = binning_offset(b);
    CropOffset {
        w: (SENSOR_WIDTH as f64 - (w * b) as f64) / 2.0 + offset,
        h: (SENSOR_HEIGHT as f64 - (h * b) as f64) / 2.0 + offset,
    }
}

/// Crop between the 2K and FHD framings, both unbinned, in whole pixels.
pub fn crop_2k_to_fhd() -> CropOffset {
    let (w2k, h2k) = Resolution::Hd2k.size();
    let (wfhd, hfhd) = Resolution::Hd1080.size();
    CropOffset {
        w: ((w2k - wfhd) / 2) as f64,
        h: ((h2k - hfhd) / 2) as f64,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn crop_offsets_per_resolution() {
        assert_eq!(
            crop_offset(Resolution::Hd2k),
            CropOffset { w: 240.0, h: 139.0 }
        );
        assert_eq!(
            crop_offset(Resolution::Hd720),
            CropOffset { w: 67.0, h: 43.0 }
        );
        assert_eq!(crop_offset(Resolution::Vga), CropOffset { w: 5.0, h: 13.0 });
    }

    #[test]
    fn crop_between_2k_and_fhd() {
        assert_eq!(crop_2k_to_fhd(), CropOffset { w: 144.0, h: 81.0 });
    }

    #[test]
    fn unbinned_modes_have_no_alignment_offset() {
        assert_eq!(binning_offset(Resolution::Hd2k.binning()), 0.0);
        assert_eq!(binning_offset(Resolution::Hd1080.binning()), 0.0);
        assert_eq!(binning_offset(Resolution::Hd720.binning()), 3.0);
        assert_eq!(binning_offset(Resolution::Vga.binning()), 5.0);
    }
}
