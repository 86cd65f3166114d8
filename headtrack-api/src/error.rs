use crate::eye::Eye;
use crate::stereo_mode::StereoMode;

/// Reasons a camera matrix cannot be produced. All of them are local and
/// recoverable: the caller skips the affected eye for this frame.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CameraError {
    /// A frustum with an empty span, a non-positive near plane, a far plane
    /// not beyond the near plane, or an eye that is behind or coplanar with
    /// the display.
    #[error("degenerate frustum: {0}")]
    DegenerateFrustum(String),

    /// The forward and up vectors of a look-at basis are parallel (or one of
    /// them has zero length), so no unique right vector exists.
    #[error("degenerate view basis: forward and up are parallel")]
    DegenerateBasis,

    /// An eye index outside the defined set, or an eye the active stereo mode
    /// does not render.
    #[error("invalid eye: {0}")]
    InvalidEye(String),

    /// A quaternion whose squared norm is further than the tolerance from 1.
    #[error("orientation is not a unit quaternion (norm {norm})")]
    NonUnitOrientation { norm: f64 },
}

impl CameraError {
    pub fn eye_not_rendered(eye: Eye, mode: StereoMode) -> CameraError {
        CameraError::InvalidEye(format!("{:?} eye is not rendered in {:?} mode", eye, mode))
    }
}
