//! Head-coupled off-axis projection.
//!
//! The virtual display is a fixed rectangle in the world. For every eye the
//! camera keeps the display's orientation and only moves with the eye, while
//! the projection is skewed so the display rectangle exactly fills the near
//! plane. The result is what a physical monitor looks like when viewed from
//! the tracked eye position, whatever the head does.

use crate::frustum::Frustum;
use crate::look_at::build_look_at;
use euclid::{vec3, Angle, Vector3D};
use headtrack_api::utils;
use headtrack_api::{CameraError, DisplayConfig, DisplaySpace, Eye, EyeView, HeadPose,
                    ViewMatrix, ViewerConfig, WorldSpace};

pub struct HeadCoupledCamera {
    display: DisplayConfig,
    viewer: ViewerConfig,
}

impl HeadCoupledCamera {
    pub fn new(mut display: DisplayConfig, viewer: ViewerConfig) -> Result<HeadCoupledCamera, CameraError> {
        utils::ensure_unit(&display.pose.orientation)?;
        display.pose.orientation = display.pose.orientation.normalize();
        if !(display.width_m > 0.0 && display.height_m > 0.0) {
            return Err(CameraError::DegenerateFrustum(
                format!("display size {} x {} m", display.width_m, display.height_m)));
        }
        if !(display.near > 0.0 && display.far > display.near) {
            return Err(CameraError::DegenerateFrustum(
                format!("clip planes need 0 < near < far, got near {} far {}", display.near, display.far)));
        }
        Ok(HeadCoupledCamera {
            display: display,
            viewer: viewer,
        })
    }

    pub fn display(&self) -> &DisplayConfig {
        &self.display
    }

    pub fn viewer(&self) -> &ViewerConfig {
        &self.viewer
    }

    /// World-space position of `eye`: the pupillary offset along head-local
    /// X, rotated by the head orientation, added to the head position.
    pub fn eye_position(&self, head: &HeadPose, eye: Eye) -> Vector3D<f64, WorldSpace> {
        if eye == Eye::Center {
            return head.position;
        }
        let offset = vec3(eye.lateral_factor() * self.viewer.interocular_distance_m, 0.0, 0.0);
        head.transform_point(offset)
    }

    /// Display centre relative to the eye, expressed in the display's own
    /// axes, so the display stays an axis-aligned rectangle.
    pub fn display_offset(&self, eye_position: Vector3D<f64, WorldSpace>)
                          -> Result<Vector3D<f64, DisplaySpace>, CameraError> {
        let to_display = utils::invert(&self.display.pose.orientation)?;
        Ok(utils::rotate(self.display.pose.position - eye_position, &to_display))
    }

    /// Off-axis bounds that make the display rectangle fill the near plane.
    pub fn frustum(&self, eye_position: Vector3D<f64, WorldSpace>) -> Result<Frustum, CameraError> {
        let offset = self.display_offset(eye_position)?;

        // The eye looks down the display's -Z, so a display in front of the
        // eye has a negative offset.z.
        let depth = -offset.z;
        if !(depth > 0.0) {
            return Err(CameraError::DegenerateFrustum(
                format!("eye is behind or coplanar with the display (depth {})", depth)));
        }

        let near = self.display.near;
        let scale = near / depth;
        let half_width = self.display.half_width();
        let half_height = self.display.half_height();

        let frustum = Frustum::new(
            scale * (offset.x - half_width),
            scale * (offset.x + half_width),
            scale * (offset.y + half_height),
            scale * (offset.y - half_height),
            near,
            self.display.far,
        );
        frustum.validate()?;
        Ok(frustum)
    }

    /// Camera at the eye with the display's orientation, not the head's.
    pub fn view(&self, eye_position: Vector3D<f64, WorldSpace>) -> Result<ViewMatrix, CameraError> {
        let up = self.display.up();
        let forward = self.display.forward();
        build_look_at(eye_position, eye_position + forward, up)
    }

    /// Projection and view matrices for one eye of a tracked head.
    pub fn eye_view(&self, head: &HeadPose, eye: Eye) -> Result<EyeView, CameraError> {
        let position = self.eye_position(head, eye);
        let frustum = self.frustum(position)?;
        let view = self.view(position)?;
        Ok(EyeView {
            eye: eye,
            position: position,
            projection: frustum.to_matrix()?,
            view: view,
            field_of_view: frustum.field_of_view(),
        })
    }

    /// Untracked view: a symmetric frustum from a fixed viewpoint in front of
    /// the display centre, looking straight at it.
    pub fn fallback_eye_view(&self, eye: Eye, aspect: f64) -> Result<EyeView, CameraError> {
        let local = vec3(eye.lateral_factor() * self.viewer.interocular_distance_m,
                         0.0,
                         self.viewer.fallback_distance_m);
        let position = self.display.pose.transform_point(local);
        let frustum = Frustum::symmetric(Angle::degrees(self.viewer.fallback_fov_y_degrees),
                                         aspect,
                                         self.display.near,
                                         self.display.far)?;
        let view = self.view(position)?;
        Ok(EyeView {
            eye: eye,
            position: position,
            projection: frustum.to_matrix()?,
            view: view,
            field_of_view: frustum.field_of_view(),
        })
    }
}
