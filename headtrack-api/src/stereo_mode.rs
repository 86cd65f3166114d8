use crate::eye::Eye;
use std::fmt;
use std::str::FromStr;

/// How the two eye images share the output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde-serialization", derive(Deserialize, Serialize))]
pub enum StereoMode {
    /// Monoscopic: one centre-eye image fills the buffer.
    None,
    /// Left and right hardware back buffers.
    QuadBuffer,
    /// One buffer, left eye on the left half, right eye on the right half.
    SideBySide,
    /// One buffer, left eye on the top half, right eye on the bottom half.
    TopBottom,
}

const MONO_EYES: [Eye; 1] = [Eye::Center];
const STEREO_EYES: [Eye; 2] = [Eye::Left, Eye::Right];

impl StereoMode {
    /// The eyes drawn each frame, in drawing order.
    pub fn eyes(self) -> &'static [Eye] {
        match self {
            StereoMode::None => &MONO_EYES,
            _ => &STEREO_EYES,
        }
    }

    /// The eye that completes a frame.
    pub fn last_eye(self) -> Eye {
        match self {
            StereoMode::None => Eye::Center,
            _ => Eye::Right,
        }
    }

    pub fn is_stereo(self) -> bool {
        self != StereoMode::None
    }
}

impl Default for StereoMode {
    fn default() -> StereoMode {
        StereoMode::None
    }
}

impl fmt::Display for StereoMode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match *self {
            StereoMode::None => "none",
            StereoMode::QuadBuffer => "quad-buffer",
            StereoMode::SideBySide => "side-by-side",
            StereoMode::TopBottom => "top-bottom",
        })
    }
}

impl FromStr for StereoMode {
    type Err = String;

    fn from_str(s: &str) -> Result<StereoMode, String> {
        match s {
            "none" | "mono" => Ok(StereoMode::None),
            "quad-buffer" | "quad" => Ok(StereoMode::QuadBuffer),
            "side-by-side" | "sbs" => Ok(StereoMode::SideBySide),
            "top-bottom" | "tb" => Ok(StereoMode::TopBottom),
            other => Err(format!("unknown stereo mode '{}'", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn eye_sequences() {
        assert_eq!(StereoMode::None.eyes(), &[Eye::Center]);
        assert!(!StereoMode::None.is_stereo());
        for mode in [StereoMode::QuadBuffer, StereoMode::SideBySide, StereoMode::TopBottom].iter() {
            assert_eq!(mode.eyes(), &[Eye::Left, Eye::Right]);
            assert!(mode.is_stereo());
            assert_eq!(mode.last_eye(), *mode.eyes().last().unwrap());
        }
    }

    #[test]
    fn parses_its_own_names() {
        for mode in [StereoMode::None, StereoMode::QuadBuffer,
                     StereoMode::SideBySide, StereoMode::TopBottom].iter() {
            assert_eq!(mode.to_string().parse::<StereoMode>().unwrap(), *mode);
        }
        assert!("anaglyph".parse::<StereoMode>().is_err());
    }
}
