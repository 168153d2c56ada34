use argh::FromArgs;
use std::path::PathBuf;

use stereoconf::{
    core::{CalibrationRecord, Resolution, StereoConfError},
    io::{conf_file_name, read_kalibr, write_conf, WriteOptions},
};

#[derive(FromArgs, Debug)]
/// Convert a stereo calibration report into an SN<serial>.conf calibration file.
struct Args {
    /// path to the calibration report
    #[argh(positional)]
    input: PathBuf,

    /// serial number of the camera
    #[argh(positional)]
    serial: u64,

    /// directory to write the calibration file to
    #[argh(option, short = 'o', default = "PathBuf::from(\".\")")]
    output_dir: PathBuf,

    /// resolution the report was calibrated at, 2K or HD
    #[argh(option, short = 's', default = "Resolution::Hd2k")]
    source_resolution: Resolution,

    /// write the intrinsics of every supported resolution instead of HD only
    #[argh(switch, short = 'a')]
    all_resolutions: bool,
}

fn to_native(
    record: CalibrationRecord,
    source: Resolution,
) -> Result<CalibrationRecord, StereoConfError> {
    match source {
        Resolution::Hd2k => Ok(record),
        Resolution::Hd720 => Ok(record.reproject_hd_to_full()),
        other => {
            let (width, height) = other.size();
            Err(StereoConfError::UnsupportedResolution { width, height })
        }
    }
}

fn run(args: &Args) -> Result<PathBuf, StereoConfError> {
    log::info!("Reading calibration report {}", args.input.display());
    let record = to_native(read_kalibr(&args.input)?, args.source_resolution)?;

    let options = if args.all_resolutions {
        WriteOptions::all_resolutions()
    } else {
        WriteOptions::hd_only()
    };

    let output_path = args.output_dir.join(conf_file_name(args.serial));
    write_conf(&output_path, &record, &options)?;

    Ok(output_path)
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Args = argh::from_env();

    match run(&args) {
        Ok(path) => log::info!("Calibration file ready: {}", path.display()),
        Err(err) => {
            log::error!("{err}");
            std::process::exit(1);
        }
    }
}
