//! Off-axis perspective projection, in the classic `glFrustum` form.

use euclid::{Angle, Transform3D};
use headtrack_api::{CameraError, FieldOfView, ProjectionMatrix};

/// Clip-plane distances of a perspective viewing volume. `left`, `right`,
/// `top` and `bottom` are measured on the near plane in eye space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frustum {
    pub left: f64,
    pub right: f64,
    pub top: f64,
    pub bottom: f64,
    pub near: f64,
    pub far: f64,
}

impl Frustum {
    pub fn new(left: f64, right: f64, top: f64, bottom: f64, near: f64, far: f64) -> Frustum {
        Frustum {
            left: left,
            right: right,
            top: top,
            bottom: bottom,
            near: near,
            far: far,
        }
    }

    /// A frustum centred on the view axis.
    pub fn symmetric(fov_y: Angle<f64>, aspect: f64, near: f64, far: f64) -> Result<Frustum, CameraError> {
        if !(fov_y.radians > 0.0 && fov_y.radians < std::f64::consts::PI) {
            return Err(CameraError::DegenerateFrustum(
                format!("vertical field of view {}° outside (0°, 180°)", fov_y.to_degrees())));
        }
        if !(aspect > 0.0 && aspect.is_finite()) {
            return Err(CameraError::DegenerateFrustum(format!("aspect ratio {}", aspect)));
        }
        let top = (fov_y.radians * 0.5).tan() * near;
        let right = top * aspect;
        Ok(Frustum::new(-right, right, top, -top, near, far))
    }

    pub fn validate(&self) -> Result<(), CameraError> {
        let terms = [self.left, self.right, self.top, self.bottom, self.near, self.far];
        if terms.iter().any(|t| !t.is_finite()) {
            return Err(CameraError::DegenerateFrustum(format!("non-finite bound in {:?}", self)));
        }
        if !(self.right > self.left) {
            return Err(CameraError::DegenerateFrustum(
                format!("right {} not greater than left {}", self.right, self.left)));
        }
        if !(self.top > self.bottom) {
            return Err(CameraError::DegenerateFrustum(
                format!("top {} not greater than bottom {}", self.top, self.bottom)));
        }
        if !(self.near > 0.0 && self.far > self.near) {
            return Err(CameraError::DegenerateFrustum(
                format!("clip planes need 0 < near < far, got near {} far {}", self.near, self.far)));
        }
        Ok(())
    }

    /// Projection matrix mapping the volume onto the canonical clip cube:
    /// X and Y on the near plane to [-1, 1], eye-space Z from -near..-far to
    /// NDC depth -1..1.
    pub fn to_matrix(&self) -> Result<ProjectionMatrix, CameraError> {
        self.validate()?;

        let (l, r, t, b, n, f) = (self.left, self.right, self.top, self.bottom, self.near, self.far);
        let x_2n = n + n;
        let x_2nf = 2.0 * n * f;
        let m_rl = r - l;
        let m_tb = t - b;
        let m_nf = n - f;

        // Column-major, one column per row of text.
        #[rustfmt::skip]
        let m = Transform3D::new(
            x_2n / m_rl,       0.0,               0.0,               0.0,
            0.0,               x_2n / m_tb,       0.0,               0.0,
            (r + l) / m_rl,    (t + b) / m_tb,    (f + n) / m_nf,    -1.0,
            0.0,               0.0,               x_2nf / m_nf,      0.0,
        );
        Ok(m)
    }

    /// Angles from the view axis to each edge of the near plane.
    pub fn field_of_view(&self) -> FieldOfView {
        let angle = |extent: f64| Angle::radians((extent / self.near).atan()).to_degrees();
        FieldOfView {
            up_degrees: angle(self.top),
            right_degrees: angle(self.right),
            down_degrees: angle(-self.bottom),
            left_degrees: angle(-self.left),
        }
    }

    pub fn is_symmetric(&self, eps: f64) -> bool {
        (self.left + self.right).abs() <= eps && (self.top + self.bottom).abs() <= eps
    }
}

/// Off-axis projection from six clip-plane distances. Fails with
/// `DegenerateFrustum` rather than producing infinities.
pub fn build_frustum(left: f64, right: f64, top: f64, bottom: f64,
                     near: f64, far: f64) -> Result<ProjectionMatrix, CameraError> {
    Frustum::new(left, right, top, bottom, near, far).to_matrix()
}

/// Projection centred on the view axis, for untracked rendering.
pub fn build_symmetric_frustum(fov_y: Angle<f64>, aspect: f64,
                               near: f64, far: f64) -> Result<ProjectionMatrix, CameraError> {
    Frustum::symmetric(fov_y, aspect, near, far)?.to_matrix()
}
