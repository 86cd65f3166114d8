use crate::display_config::DisplayConfig;
use crate::pose::{HeadPose, Pose, TrackerSample};
use crate::space::{TrackerSpace, WorldSpace};
use crate::viewer_config::ViewerConfig;
use euclid::vec3;

/// Where the tracker's own frame sits in the world. Raw samples are
/// relative to the tracker; the camera needs them in world space.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde-serialization", derive(Deserialize, Serialize))]
pub struct TrackerCalibration {
    pub sensor: Pose<TrackerSpace, WorldSpace>,
}

impl Default for TrackerCalibration {
    fn default() -> TrackerCalibration {
        // Tracker origin five meters in front of the default display,
        // slightly above its centre.
        TrackerCalibration {
            sensor: Pose::from_translation(vec3(0.0, 0.1, 5.0)),
        }
    }
}

impl TrackerCalibration {
    /// Maps a tracker-relative head sample into world space.
    pub fn to_world(&self, sample: &TrackerSample) -> HeadPose {
        self.sensor.then_local(sample)
    }
}

/// Everything fixed at startup for one session. Not mutated while frames
/// are being produced.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde-serialization", derive(Deserialize, Serialize))]
pub struct Calibration {
    pub display: DisplayConfig,
    pub viewer: ViewerConfig,
    pub tracker: TrackerCalibration,
}

#[cfg(test)]
mod tests {
    use super::*;
    use euclid::{Angle, Rotation3D};

    #[test]
    fn identity_sample_lands_on_sensor() {
        let calibration = TrackerCalibration::default();
        let head = calibration.to_world(&TrackerSample::identity());
        assert_eq!(head.position, vec3(0.0, 0.1, 5.0));
        assert_eq!(head.orientation, Rotation3D::identity());
    }

    #[test]
    fn rotated_sensor_rotates_sample_offsets() {
        let calibration = TrackerCalibration {
            sensor: Pose::new(vec3(1.0, 0.0, 0.0), Rotation3D::around_y(Angle::degrees(180.0))).unwrap(),
        };
        let sample = TrackerSample::from_translation(vec3(0.5, 0.0, 0.0));
        let head = calibration.to_world(&sample);
        assert!((head.position - vec3(0.5, 0.0, 0.0)).length() < 1e-12);
    }
}
