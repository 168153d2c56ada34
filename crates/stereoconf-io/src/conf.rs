use std::{
    io::Write,
    path::{Path, PathBuf},
};

use stereoconf_core::{CalibrationRecord, Intrinsics, Resolution, Side, StereoConfError};

/// Section holding the relative pose of the two cameras.
pub const STEREO_SECTION: &str = "STEREO";

/// Options controlling which resolutions are persisted in the calibration file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriteOptions {
    /// Resolutions to write camera sections and rotation keys for, in file order.
    pub resolutions: Vec<Resolution>,
}

impl WriteOptions {
    /// Persist the HD resolution only, the working resolution of the camera runtime.
    pub fn hd_only() -> Self {
        Self {
            resolutions: vec![Resolution::Hd720],
        }
    }

    /// Persist every supported resolution, largest first.
    pub fn all_resolutions() -> Self {
        Self {
            resolutions: Resolution::ALL.to_vec(),
        }
    }
}

impl Default for WriteOptions {
    fn default() -> Self {
        Self::hd_only()
    }
}

/// Name of the calibration file of a camera serial number.
pub fn conf_file_name(serial: u64) -> String {
    format!("SN{serial}.conf")
}

/// Format a value the way C `printf("%f")` prints a single precision float.
///
/// The value is narrowed to `f32` and printed with 6 decimal digits.
pub fn format_float(value: f64) -> String {
    let value = value as f32;
    if value.is_nan() {
        "nan".to_string()
    } else if value == f32::INFINITY {
        "inf".to_string()
    } else if value == f32::NEG_INFINITY {
        "-inf".to_string()
    } else {
        format!("{value:.6}")
    }
}

fn push_value(out: &mut String, key: &str, value: f64) {
    out.push_str(key);
    out.push('=');
    out.push_str(&format_float(value));
    out.push('\n');
}

fn push_camera(out: &mut String, section: &str, intrinsics: &Intrinsics) {
    out.push_str(&format!("[{section}]\n"));
    push_value(out, "fx", intrinsics.fx);
    push_value(out, "fy", intrinsics.fy);
    push_value(out, "cx", intrinsics.cx);
    push_value(out, "cy", intrinsics.cy);

    let d = &intrinsics.distortion;
    push_value(out, "k1", d.k1);
    push_value(out, "k2", d.k2);
    push_value(out, "p1", d.p1);
    push_value(out, "p2", d.p2);
    push_value(out, "k3", d.k3);
    out.push('\n');
}

/// Render a calibration record in the camera runtime format.
///
/// Writes one section per camera and resolution with the intrinsics derived at that
/// resolution, followed by the `[STEREO]` section.
///
/// # Arguments
///
/// * `record` - The calibration at native resolution.
/// * `options` - The resolutions to persist.
///
/// # Returns
///
/// The content of the calibration file.
pub fn render_conf(record: &CalibrationRecord, options: &WriteOptions) -> String {
    let mut out = String::new();

    for &res in &options.resolutions {
        for side in [Side::Left, Side::Right] {
            let section = format!("{}_{}", side.section_prefix(), res.name());
            push_camera(&mut out, &section, &record.camera_at(side, res));
        }
    }

    let pose = &record.pose;
    out.push_str(&format!("[{STEREO_SECTION}]\n"));
    push_value(&mut out, "Baseline", pose.baseline());
    push_value(&mut out, "TY", pose.translation.y);
    push_value(&mut out, "TZ", pose.translation.z);

    for res in &options.resolutions {
        push_value(&mut out, &format!("RX_{}", res.name()), pose.rotation.x);
        push_value(&mut out, &format!("CV_{}", res.name()), pose.rotation.y);
        push_value(&mut out, &format!("RZ_{}", res.name()), pose.rotation.z);
    }
    out.push('\n');

    out
}

/// Write a calibration record to a file in the camera runtime format.
///
/// The content goes to a temporary file next to the destination, which replaces the
/// destination only once fully written. A failed write leaves no partial file behind.
///
/// # Arguments
///
/// * `path` - The destination calibration file.
/// * `record` - The calibration at native resolution.
/// * `options` - The resolutions to persist.
///
/// # Errors
///
/// Returns [`StereoConfError::WriteFailure`] if the file cannot be created, written or moved
/// into place.
pub fn write_conf(
    path: impl AsRef<Path>,
    record: &CalibrationRecord,
    options: &WriteOptions,
) -> Result<(), StereoConfError> {
    let path = path.as_ref();
    let failure = |source: std::io::Error| StereoConfError::WriteFailure {
        path: path.to_path_buf(),
        source,
    };

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };

    let content = render_conf(record, options);

    let mut tmp_file = tempfile::Builder::new()
        .prefix(".stereoconf-")
        .suffix(".tmp")
        .tempfile_in(&dir)
        .map_err(failure)?;
    tmp_file.write_all(content.as_bytes()).map_err(failure)?;
    tmp_file.as_file().sync_all().map_err(failure)?;
    tmp_file.persist(path).map_err(|e| failure(e.error))?;

    log::info!(
        "Wrote {} camera sections to {}",
        options.resolutions.len() * 2,
        path.display()
    );

    Ok(())
}
