#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// Writer for the `SN<serial>.conf` calibration file of the camera runtime.
pub mod conf;

/// Parser for the text report of the stereo calibration tool.
pub mod kalibr;

pub use conf::{conf_file_name, render_conf, write_conf, WriteOptions};
pub use kalibr::{parse_kalibr, parse_kalibr_str, read_kalibr, KalibrParser};
