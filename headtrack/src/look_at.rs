//! Camera bases from an eye position, a look-at target and an up hint.

use euclid::{Transform3D, Vector3D};
use headtrack_api::{CameraError, CameraMatrix, ViewMatrix, WorldSpace};

// Below this length a cross product is treated as zero.
const PARALLEL_EPSILON: f64 = 1e-9;

/// Orthonormal camera axes in world space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewBasis {
    pub eye: Vector3D<f64, WorldSpace>,
    pub right: Vector3D<f64, WorldSpace>,
    pub up: Vector3D<f64, WorldSpace>,
    pub forward: Vector3D<f64, WorldSpace>,
}

impl ViewBasis {
    /// `forward = normalize(target - eye)`, `right = normalize(forward × up)`,
    /// `up = right × forward`. Fails with `DegenerateBasis` when forward and
    /// up are parallel or either has no length.
    pub fn new(eye: Vector3D<f64, WorldSpace>,
               target: Vector3D<f64, WorldSpace>,
               up: Vector3D<f64, WorldSpace>) -> Result<ViewBasis, CameraError> {
        let forward = normalized(target - eye)?;
        let right = normalized(forward.cross(up))?;
        let true_up = right.cross(forward);
        Ok(ViewBasis {
            eye: eye,
            right: right,
            up: true_up,
            forward: forward,
        })
    }

    /// The camera's pose in world space: rotation columns `right`, `up`,
    /// `-forward`, translation `eye`.
    pub fn to_camera_matrix(&self) -> CameraMatrix {
        let (r, u, f, e) = (self.right, self.up, self.forward, self.eye);
        #[rustfmt::skip]
        let m = Transform3D::new(
            r.x,  r.y,  r.z,  0.0,
            u.x,  u.y,  u.z,  0.0,
            -f.x, -f.y, -f.z, 0.0,
            e.x,  e.y,  e.z,  1.0,
        );
        m
    }

    /// World-to-camera transform: the rigid inverse of the camera pose, with
    /// rows `right`, `up`, `-forward` and the eye moved to the origin.
    pub fn to_view_matrix(&self) -> ViewMatrix {
        let (r, u, f, e) = (self.right, self.up, self.forward, self.eye);
        #[rustfmt::skip]
        let m = Transform3D::new(
            r.x,         u.x,         -f.x,       0.0,
            r.y,         u.y,         -f.y,       0.0,
            r.z,         u.z,         -f.z,       0.0,
            -r.dot(e),   -u.dot(e),   f.dot(e),   1.0,
        );
        m
    }
}

fn normalized(v: Vector3D<f64, WorldSpace>) -> Result<Vector3D<f64, WorldSpace>, CameraError> {
    let length = v.length();
    if !(length > PARALLEL_EPSILON) || !length.is_finite() {
        return Err(CameraError::DegenerateBasis);
    }
    Ok(v / length)
}

/// World-to-camera (view) matrix looking from `eye` toward `target`.
pub fn build_look_at(eye: Vector3D<f64, WorldSpace>,
                     target: Vector3D<f64, WorldSpace>,
                     up: Vector3D<f64, WorldSpace>) -> Result<ViewMatrix, CameraError> {
    Ok(ViewBasis::new(eye, target, up)?.to_view_matrix())
}

/// Camera-to-world matrix for the same basis as `build_look_at`.
pub fn build_camera_pose(eye: Vector3D<f64, WorldSpace>,
                         target: Vector3D<f64, WorldSpace>,
                         up: Vector3D<f64, WorldSpace>) -> Result<CameraMatrix, CameraError> {
    Ok(ViewBasis::new(eye, target, up)?.to_camera_matrix())
}

#[cfg(test)]
mod tests {
    use super::*;
    use euclid::{point3, vec3, Point3D};

    const EPS: f64 = 1e-9;

    fn close(a: Point3D<f64, impl Sized>, b: [f64; 3]) -> bool {
        (a.x - b[0]).abs() < EPS && (a.y - b[1]).abs() < EPS && (a.z - b[2]).abs() < EPS
    }

    #[test]
    fn looking_down_negative_z_from_origin_is_identity() {
        let m = build_look_at(vec3(0.0, 0.0, 0.0), vec3(0.0, 0.0, -1.0), vec3(0.0, 1.0, 0.0)).unwrap();
        assert_eq!(m, ViewMatrix::identity());
    }

    #[test]
    fn target_ends_up_on_negative_z_axis() {
        let eye = vec3(1.0, 2.0, 3.0);
        let target = vec3(-4.0, 0.5, -2.0);
        let m = build_look_at(eye, target, vec3(0.0, 1.0, 0.0)).unwrap();
        let distance = (target - eye).length();
        let p = m.transform_point3d(point3(target.x, target.y, target.z)).unwrap();
        assert!(close(p, [0.0, 0.0, -distance]), "{:?}", p);
        let origin = m.transform_point3d(point3(eye.x, eye.y, eye.z)).unwrap();
        assert!(close(origin, [0.0, 0.0, 0.0]));
    }

    #[test]
    fn view_and_camera_matrices_are_inverse() {
        let basis = ViewBasis::new(vec3(0.3, -1.0, 2.0), vec3(1.0, 1.0, -5.0), vec3(0.1, 1.0, 0.2)).unwrap();
        let view = basis.to_view_matrix();
        let camera = basis.to_camera_matrix();
        let p = point3(0.7, -0.2, -3.0);
        let round_trip = view.transform_point3d(camera.transform_point3d(p).unwrap()).unwrap();
        assert!(close(round_trip, [p.x, p.y, p.z]));
    }

    #[test]
    fn basis_is_orthonormal() {
        let b = ViewBasis::new(vec3(0.0, 0.0, 0.0), vec3(3.0, -1.0, 2.0), vec3(0.0, 1.0, 0.0)).unwrap();
        for v in [b.right, b.up, b.forward].iter() {
            assert!((v.length() - 1.0).abs() < EPS);
        }
        assert!(b.right.dot(b.up).abs() < EPS);
        assert!(b.right.dot(b.forward).abs() < EPS);
        assert!(b.up.dot(b.forward).abs() < EPS);
    }

    #[test]
    fn parallel_up_is_degenerate() {
        let eye = vec3(0.0, 0.0, 0.0);
        assert_eq!(build_look_at(eye, vec3(0.0, 5.0, 0.0), vec3(0.0, 1.0, 0.0)),
                   Err(CameraError::DegenerateBasis));
        assert_eq!(build_look_at(eye, vec3(0.0, -5.0, 0.0), vec3(0.0, 2.0, 0.0)),
                   Err(CameraError::DegenerateBasis));
        assert_eq!(build_look_at(eye, eye, vec3(0.0, 1.0, 0.0)),
                   Err(CameraError::DegenerateBasis));
        assert_eq!(build_camera_pose(eye, vec3(0.0, 0.0, -1.0), vec3(0.0, 0.0, 0.0)),
                   Err(CameraError::DegenerateBasis));
    }
}
