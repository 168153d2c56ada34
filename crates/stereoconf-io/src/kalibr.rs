use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

use glam::DVec3;
use stereoconf_core::{
    intrinsics::NUM_DISTORTION_COEFFS, CalibrationRecord, Distortion, Intrinsics, Side,
    StereoConfError, StereoPose,
};
use stereoconf_lie::so3::SO3;

const DISTORTION_MARKER: &str = "distortion:";
const PROJECTION_MARKER: &str = "projection:";
const ROTATION_MARKER: &str = "q:";
const TRANSLATION_MARKER: &str = "t:";

/// Incremental parser for the text report of a stereo calibration.
///
/// Lines are fed one at a time with [`KalibrParser::parse_line`] and the record is assembled
/// by [`KalibrParser::finish`]. The first `projection:` line belongs to the left camera and
/// every later one to the right camera. A `distortion:` line applies to the camera whose
/// projection comes next.
#[derive(Debug)]
pub struct KalibrParser {
    side: Side,
    line_number: usize,
    num_projections: usize,
    distortion: [Distortion; 2],
    projection: [Option<[f64; 4]>; 2],
    rotation: Option<SO3>,
    translation: Option<DVec3>,
}

impl Default for KalibrParser {
    fn default() -> Self {
        Self::new()
    }
}

impl KalibrParser {
    /// Create a parser expecting the left camera first.
    pub fn new() -> Self {
        Self {
            side: Side::Left,
            line_number: 0,
            num_projections: 0,
            distortion: [Distortion::none(); 2],
            projection: [None; 2],
            rotation: None,
            translation: None,
        }
    }

    /// Parse one line of the calibration report.
    ///
    /// Lines without any of the `distortion:`, `projection:`, `q:` or `t:` markers are
    /// ignored.
    ///
    /// # Errors
    ///
    /// Returns [`StereoConfError::MalformedInput`] if a marked line has no bracketed list,
    /// holds a value that is not a number, or has fewer values than the field needs.
    pub fn parse_line(&mut self, line: &str) -> Result<(), StereoConfError> {
        self.line_number += 1;

        if line.contains(DISTORTION_MARKER) {
            let values = self.values(line, DISTORTION_MARKER)?;
            if values.len() > NUM_DISTORTION_COEFFS {
                log::warn!(
                    "line {}: ignoring {} distortion coefficients past the fifth",
                    self.line_number,
                    values.len() - NUM_DISTORTION_COEFFS
                );
            }
            log::debug!("{:?} distortion: {:?}", self.side, values);
            self.distortion[side_index(self.side)].set_prefix(&values);
        }

        if line.contains(PROJECTION_MARKER) {
            let values = self.values(line, PROJECTION_MARKER)?;
            let projection = self.take::<4>(&values, PROJECTION_MARKER)?;

            self.num_projections += 1;
            if self.num_projections > 2 {
                log::warn!(
                    "line {}: projection #{} overwrites the right camera",
                    self.line_number,
                    self.num_projections
                );
            }

            log::debug!("{:?} projection: {:?}", self.side, projection);
            self.projection[side_index(self.side)] = Some(projection);
            self.side = Side::Right;
        }

        if line.contains(ROTATION_MARKER) {
            let values = self.values(line, ROTATION_MARKER)?;
            let [x, y, z, w] = self.take::<4>(&values, ROTATION_MARKER)?;
            log::debug!("relative orientation: [{x} {y} {z} {w}]");
            self.rotation = Some(SO3::from_xyzw(x, y, z, w));
        }

        if line.contains(TRANSLATION_MARKER) {
            let values = self.values(line, TRANSLATION_MARKER)?;
            let [x, y, z] = self.take::<3>(&values, TRANSLATION_MARKER)?;
            log::debug!("relative translation: [{x} {y} {z}]");
            self.translation = Some(DVec3::new(x, y, z));
        }

        Ok(())
    }

    /// Assemble the calibration record from the parsed lines.
    ///
    /// # Errors
    ///
    /// Returns [`StereoConfError::MalformedInput`] naming the first missing field. Only the
    /// distortion coefficients default to zero.
    pub fn finish(self) -> Result<CalibrationRecord, StereoConfError> {
        let missing = |field: &str| {
            StereoConfError::MalformedInput(format!("missing {field} in calibration input"))
        };

        let [left_distortion, right_distortion] = self.distortion;
        let [left_projection, right_projection] = self.projection;

        let left = left_projection.ok_or_else(|| missing("left camera projection"))?;
        let right = right_projection.ok_or_else(|| missing("right camera projection"))?;
        let rotation = self.rotation.ok_or_else(|| missing("relative rotation (q:)"))?;
        let translation = self
            .translation
            .ok_or_else(|| missing("relative translation (t:)"))?;

        for (side, distortion) in [(Side::Left, left_distortion), (Side::Right, right_distortion)] {
            if !distortion.has_distortion() {
                log::debug!("{side:?} camera has no distortion coefficients");
            }
        }

        let record = CalibrationRecord {
            left: intrinsics_from(left, left_distortion),
            right: intrinsics_from(right, right_distortion),
            pose: StereoPose::new(&rotation, translation),
        };

        log::debug!("left camera: {:?}", record.left);
        log::debug!("right camera: {:?}", record.right);
        log::debug!("stereo pose: {:?}", record.pose);

        Ok(record)
    }

    /// Values are rounded to single precision, the precision calibration reports are
    /// written and consumed with.
    fn values(&self, line: &str, marker: &str) -> Result<Vec<f64>, StereoConfError> {
        let content = bracket_content(line).ok_or_else(|| {
            StereoConfError::MalformedInput(format!(
                "line {}: expected a bracketed list after `{marker}`",
                self.line_number
            ))
        })?;

        content
            .split(' ')
            .filter(|token| !token.is_empty())
            .map(|token| {
                token.parse::<f64>().map(round_f32).map_err(|e| {
                    StereoConfError::MalformedInput(format!(
                        "line {}: invalid `{marker}` value {token:?}: {e}",
                        self.line_number
                    ))
                })
            })
            .collect()
    }

    fn take<const N: usize>(
        &self,
        values: &[f64],
        marker: &str,
    ) -> Result<[f64; N], StereoConfError> {
        values
            .get(..N)
            .and_then(|v| v.try_into().ok())
            .ok_or_else(|| {
                StereoConfError::MalformedInput(format!(
                    "line {}: `{marker}` expects {N} values, found {}",
                    self.line_number,
                    values.len()
                ))
            })
    }
}

fn round_f32(value: f64) -> f64 {
    value as f32 as f64
}

fn side_index(side: Side) -> usize {
    match side {
        Side::Left => 0,
        Side::Right => 1,
    }
}

fn intrinsics_from([fx, fy, cx, cy]: [f64; 4], distortion: Distortion) -> Intrinsics {
    Intrinsics::new(fx, fy, cx, cy).with_distortion(distortion)
}

/// Text strictly between the first `[` of the line and the first `]` after it.
fn bracket_content(line: &str) -> Option<&str> {
    let (_, rest) = line.split_once('[')?;
    let (content, _) = rest.split_once(']')?;
    Some(content)
}

/// Parse a stereo calibration report from a buffered reader.
///
/// Lines are decoded as lossy UTF-8, so stray bytes on lines without a marker are ignored.
///
/// # Arguments
///
/// * `reader` - The source of the calibration report.
///
/// # Returns
///
/// The calibration record at the native resolution of the report.
pub fn parse_kalibr<R: BufRead>(reader: R) -> Result<CalibrationRecord, StereoConfError> {
    let mut reader = reader;
    let mut parser = KalibrParser::new();
    let mut buf = Vec::new();
    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        let line = String::from_utf8_lossy(&buf);
        let line = line.strip_suffix('\n').unwrap_or(&line);
        let line = line.strip_suffix('\r').unwrap_or(line);
        parser.parse_line(line)?;
    }
    parser.finish()
}

/// Parse a stereo calibration report held in memory.
pub fn parse_kalibr_str(text: &str) -> Result<CalibrationRecord, StereoConfError> {
    parse_kalibr(text.as_bytes())
}

/// Read a stereo calibration report from a file.
///
/// # Arguments
///
/// * `path` - The path to the calibration report.
///
/// # Returns
///
/// The calibration record at the native resolution of the report.
pub fn read_kalibr(path: impl AsRef<Path>) -> Result<CalibrationRecord, StereoConfError> {
    let file = File::open(path)?;
    parse_kalibr(BufReader::new(file))
}
