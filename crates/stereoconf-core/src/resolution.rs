use std::fmt;
use std::str::FromStr;

use crate::error::StereoConfError;

/// Output resolutions supported by the stereo camera.
///
/// Ordered from the largest to the smallest sensor footprint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Resolution {
    /// 2208x1242, unbinned
    Hd2k,
    /// 1920x1080, unbinned center crop of 2K
    Hd1080,
    /// 1280x720, 2x2 binning
    Hd720,
    /// 672x376, 4x4 binning
    Vga,
}

impl Resolution {
    /// All supported resolutions, largest first.
    pub const ALL: [Resolution; 4] = [
        Resolution::Hd2k,
        Resolution::Hd1080,
        Resolution::Hd720,
        Resolution::Vga,
    ];

    /// Image width in pixels.
    pub fn width(&self) -> u32 {
        self.size().0
    }

    /// Image height in pixels.
    pub fn height(&self) -> u32 {
        self.size().1
    }

    /// Image size as `(width, height)` in pixels.
    pub fn size(&self) -> (u32, u32) {
        match self {
            Resolution::Hd2k => (2208, 1242),
            Resolution::Hd1080 => (1920, 1080),
            Resolution::Hd720 => (1280, 720),
            Resolution::Vga => (672, 376),
        }
    }

    /// Pixel binning factor relative to the physical sensor.
    pub fn binning(&self) -> u32 {
        match self {
            Resolution::Hd2k | Resolution::Hd1080 => 1,
            Resolution::Hd720 => 2,
            Resolution::Vga => 4,
        }
    }

    /// Short name used in the calibration file section keys.
    pub fn name(&self) -> &'static str {
        match self {
            Resolution::Hd2k => "2K",
            Resolution::Hd1080 => "FHD",
            Resolution::Hd720 => "HD",
            Resolution::Vga => "VGA",
        }
    }

    /// Look up the resolution matching an image size.
    ///
    /// # Errors
    ///
    /// Returns [`StereoConfError::UnsupportedResolution`] if the size is not one of the
    /// supported resolutions.
    pub fn from_size(width: u32, height: u32) -> Result<Self, StereoConfError> {
        Self::ALL
            .into_iter()
            .find(|res| res.size() == (width, height))
            .ok_or(StereoConfError::UnsupportedResolution { width, height })
    }
}

impl TryFrom<(u32, u32)> for Resolution {
    type Error = StereoConfError;

    fn try_from((width, height): (u32, u32)) -> Result<Self, Self::Error> {
        Self::from_size(width, height)
    }
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Resolution {
    type Err = StereoConfError;

    /// Parse a resolution from its short name (`2K`, `FHD`, `HD`, `VGA`), its long name
    /// (`HD2K`, `HD1080`, `HD720`) or a `<width>x<height>` size. Case insensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "2K" | "HD2K" => Ok(Resolution::Hd2k),
            "FHD" | "HD1080" => Ok(Resolution::Hd1080),
            "HD" | "HD720" => Ok(Resolution::Hd720),
            "VGA" => Ok(Resolution::Vga),
            other => {
                let (w, h) = other.split_once('X').ok_or_else(|| {
                    StereoConfError::MalformedInput(format!("Unknown resolution: {s}"))
                })?;
                let parse = |v: &str| {
                    v.parse::<u32>().map_err(|e| {
                        StereoConfError::MalformedInput(format!("Unknown resolution {s}: {e}"))
                    })
                };
                Self::from_size(parse(w)?, parse(h)?)
            }
        }
    }
}
