mod source;

pub use self::source::MockPoseSource;

use headtrack_api::TrackerSample;

/// Messages a test or another thread sends to drive a `MockPoseSource`.
/// Each message carries a complete copy of the pose, so a poll never
/// observes a half-written sample.
#[derive(Debug, Clone)]
pub enum MockPoseControlMsg {
    SetHeadPose(TrackerSample),
    /// Raw position and `[x, y, z, w]` orientation, validated on delivery.
    SetViewerPose([f64; 3], [f64; 4]),
    Disconnect,
}
