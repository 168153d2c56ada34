use approx::assert_relative_eq;
use stereoconf_core::{
    geometry::crop_offset,
    rescale::{derive_at, reproject_hd_to_full},
    Distortion, Intrinsics, Resolution,
};

fn calibrations() -> Vec<Intrinsics> {
    vec![
        Intrinsics::new(700.0, 700.0, 640.0, 360.0),
        Intrinsics::new(1066.1, 1065.8, 1110.3, 621.4)
            .with_distortion(Distortion::from_array([-0.043, 0.012, -2e-4, 1e-4, -0.005])),
        Intrinsics::new(1.0, 1.0, 0.0, 0.0),
    ]
}

#[test]
fn test_derive_2k_identity() {
    for full in calibrations() {
        let derived = derive_at(Resolution::Hd2k, &full);
        assert_eq!(derived.fx.to_bits(), full.fx.to_bits());
        assert_eq!(derived.fy.to_bits(), full.fy.to_bits());
        assert_eq!(derived.cx.to_bits(), full.cx.to_bits());
        assert_eq!(derived.cy.to_bits(), full.cy.to_bits());
    }
}

#[test]
fn test_focal_binning_ratios() {
    for full in calibrations() {
        let fx_2k = derive_at(Resolution::Hd2k, &full).fx;
        let fx_fhd = derive_at(Resolution::Hd1080, &full).fx;
        let fx_hd = derive_at(Resolution::Hd720, &full).fx;
        let fx_vga = derive_at(Resolution::Vga, &full).fx;

        assert_relative_eq!(fx_vga, fx_hd / 2.0);
        assert_relative_eq!(fx_vga, fx_fhd / 4.0);
        assert_relative_eq!(fx_vga, fx_2k / 4.0);

        let fy_vga = derive_at(Resolution::Vga, &full).fy;
        assert_relative_eq!(fy_vga, full.fy / 4.0);
    }
}

#[test]
fn test_distortion_bit_identical() {
    for full in calibrations() {
        let expected = full.distortion.to_array().map(f64::to_bits);
        for res in Resolution::ALL {
            let derived = derive_at(res, &full);
            assert_eq!(derived.distortion.to_array().map(f64::to_bits), expected);
        }
    }
}

#[test]
fn test_principal_point_stays_at_sensor_location() {
    // the same sensor pixel must map to the derived principal point at every resolution
    for full in calibrations() {
        let crop_2k = crop_offset(Resolution::Hd2k);
        let sensor_x = full.cx + crop_2k.w;
        let sensor_y = full.cy + crop_2k.h;

        for res in [Resolution::Hd720, Resolution::Vga] {
            let derived = derive_at(res, &full);
            let crop = crop_offset(res);
            let b = res.binning() as f64;
            assert_relative_eq!(derived.cx * b + crop.w, sensor_x, epsilon = 1e-9);
            assert_relative_eq!(derived.cy * b + crop.h, sensor_y, epsilon = 1e-9);
        }
    }
}

#[test]
fn test_hd_source_round_trip() {
    for hd in calibrations() {
        let full = reproject_hd_to_full(&hd);
        let back = derive_at(Resolution::Hd720, &full);
        assert_relative_eq!(back.fx, hd.fx);
        assert_relative_eq!(back.fy, hd.fy);
        assert_relative_eq!(back.cx, hd.cx, epsilon = 1e-9);
        assert_relative_eq!(back.cy, hd.cy, epsilon = 1e-9);
        assert_eq!(back.distortion, hd.distortion);
    }
}
