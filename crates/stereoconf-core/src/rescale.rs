use crate::error::StereoConfError;
use crate::geometry::{crop_2k_to_fhd, crop_offset};
use crate::intrinsics::Intrinsics;
use crate::resolution::Resolution;

/// Lift intrinsics computed at HD resolution to the 2K framing.
///
/// Undoes the 2x2 binning and moves the principal point from the HD crop to the 2K crop.
/// Distortion coefficients are resolution invariant and carried through unchanged.
///
/// # Arguments
///
/// * `intrinsics` - The intrinsics defined at HD (1280x720) resolution.
///
/// # Returns
///
/// The equivalent intrinsics at 2K (2208x1242) resolution.
pub fn reproject_hd_to_full(intrinsics: &Intrinsics) -> Intrinsics {
    let crop_hd = crop_offset(Resolution::Hd720);
    let crop_2k = crop_offset(Resolution::Hd2k);

    Intrinsics {
        fx: intrinsics.fx * 2.0,
        fy: intrinsics.fy * 2.0,
        cx: intrinsics.cx * 2.0 + crop_hd.w - crop_2k.w,
        cy: intrinsics.cy * 2.0 + crop_hd.h - crop_2k.h,
        distortion: intrinsics.distortion,
    }
}

/// Derive the intrinsics of a camera at one of the supported resolutions.
///
/// # Arguments
///
/// * `res` - The target resolution.
/// * `full` - The intrinsics defined at the 2K framing.
///
/// # Returns
///
/// The intrinsics at the target resolution. 2K returns `full` unchanged.
pub fn derive_at(res: Resolution, full: &Intrinsics) -> Intrinsics {
    let crop_2k = crop_offset(Resolution::Hd2k);

    // principal point in full sensor coordinates
    let cx_base = full.cx + crop_2k.w;
    let cy_base = full.cy + crop_2k.h;

    let (fx, fy, cx, cy) = match res {
        Resolution::Hd2k => return *full,
        Resolution::Hd1080 => {
            let crop_fhd = crop_2k_to_fhd();
            (
                full.fx,
                full.fy,
                cx_base - crop_2k.w - crop_fhd.w,
                cy_base - crop_2k.h - crop_fhd.h,
            )
        }
        Resolution::Hd720 | Resolution::Vga => {
            let crop = crop_offset(res);
            let b = res.binning() as f64;
            (
                full.fx / b,
                full.fy / b,
                (cx_base - crop.w) / b,
                (cy_base - crop.h) / b,
            )
        }
    };

    Intrinsics {
        fx,
        fy,
        cx,
        cy,
        distortion: full.distortion,
    }
}

/// Derive the intrinsics of a camera for an image size.
///
/// # Errors
///
/// Returns [`StereoConfError::UnsupportedResolution`] if the size is not one of the
/// supported resolutions.
pub fn derive_at_size(
    width: u32,
    height: u32,
    full: &Intrinsics,
) -> Result<Intrinsics, StereoConfError> {
    let res = Resolution::from_size(width, height)?;
    Ok(derive_at(res, full))
}
