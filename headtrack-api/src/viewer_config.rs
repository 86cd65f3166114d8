// Per-viewer calibration.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde-serialization", derive(Deserialize, Serialize))]
pub struct ViewerConfig {
    // Distance between the left and right eye centres in meters. Each eye
    // sits half of this from the head centre along head-local X.
    pub interocular_distance_m: f64,

    // Vertical field of view used before any tracker sample has arrived.
    pub fallback_fov_y_degrees: f64,

    // How far in front of the display the untracked viewpoint sits.
    pub fallback_distance_m: f64,
}

impl Default for ViewerConfig {
    fn default() -> ViewerConfig {
        ViewerConfig {
            interocular_distance_m: 0.06,
            fallback_fov_y_degrees: 45.0,
            fallback_distance_m: 5.0,
        }
    }
}
