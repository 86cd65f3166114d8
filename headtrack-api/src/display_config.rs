use crate::pose::Pose;
use crate::space::{DisplaySpace, WorldSpace};
use euclid::{vec3, Vector3D};

// The virtual display surface: where it sits in the world and how large it
// is physically. Both eyes share its near/far clip distances.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde-serialization", derive(Deserialize, Serialize))]
pub struct DisplayConfig {
    // Centre of the surface and its orientation. The surface spans local X
    // (width) and Y (height); local +Z faces the viewer.
    pub pose: Pose<DisplaySpace, WorldSpace>,

    // Physical width of the surface in meters.
    pub width_m: f64,

    // Physical height of the surface in meters.
    pub height_m: f64,

    // Eye to near clip plane distance.
    pub near: f64,

    // Eye to far clip plane distance.
    pub far: f64,
}

impl Default for DisplayConfig {
    fn default() -> DisplayConfig {
        DisplayConfig {
            pose: Pose::identity(),
            width_m: 4.2188,
            height_m: 4.2188,
            near: 0.01,
            far: 100.0,
        }
    }
}

impl DisplayConfig {
    pub fn half_width(&self) -> f64 {
        0.5 * self.width_m
    }

    pub fn half_height(&self) -> f64 {
        0.5 * self.height_m
    }

    /// World-space up direction of the surface.
    pub fn up(&self) -> Vector3D<f64, WorldSpace> {
        self.pose.transform_vector(vec3(0.0, 1.0, 0.0))
    }

    /// World-space direction a viewer in front of the surface looks in.
    pub fn forward(&self) -> Vector3D<f64, WorldSpace> {
        self.pose.transform_vector(vec3(0.0, 0.0, -1.0))
    }

    /// World-space positions of the four corners, counter-clockwise from
    /// bottom-left.
    pub fn corners(&self) -> [Vector3D<f64, WorldSpace>; 4] {
        let (w, h) = (self.half_width(), self.half_height());
        [
            self.pose.transform_point(vec3(-w, -h, 0.0)),
            self.pose.transform_point(vec3(w, -h, 0.0)),
            self.pose.transform_point(vec3(w, h, 0.0)),
            self.pose.transform_point(vec3(-w, h, 0.0)),
        ]
    }
}
