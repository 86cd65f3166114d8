use crate::error::CameraError;
use std::convert::TryFrom;

/// Which eye a view is rendered for. `Center` is the monoscopic case: no
/// pupillary offset at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde-serialization", derive(Deserialize, Serialize))]
pub enum Eye {
    Center,
    Left,
    Right,
}

impl Eye {
    /// Signed fraction of the interocular distance this eye sits from the
    /// head centre along head-local X.
    pub fn lateral_factor(self) -> f64 {
        match self {
            Eye::Center => 0.0,
            Eye::Left => -0.5,
            Eye::Right => 0.5,
        }
    }

    /// Index used by framebuffer and device APIs: 0 for the left eye, 1 for
    /// the right, 2 for a monoscopic view.
    pub fn index(self) -> u32 {
        match self {
            Eye::Left => 0,
            Eye::Right => 1,
            Eye::Center => 2,
        }
    }
}

impl TryFrom<u32> for Eye {
    type Error = CameraError;

    fn try_from(index: u32) -> Result<Eye, CameraError> {
        match index {
            0 => Ok(Eye::Left),
            1 => Ok(Eye::Right),
            2 => Ok(Eye::Center),
            _ => Err(CameraError::InvalidEye(format!("no eye with index {}", index))),
        }
    }
}
