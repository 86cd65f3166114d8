use crate::error::CameraError;
use crate::space::{HeadSpace, TrackerSpace, WorldSpace};
use crate::utils;
use euclid::{Rotation3D, Vector3D};

// A rigid transform from `Src` to `Dst`: where the origin of `Src` sits in
// `Dst`, and how `Src`'s axes are oriented there.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde-serialization", derive(Deserialize, Serialize), serde(bound = ""))]
pub struct Pose<Src, Dst> {
    pub position: Vector3D<f64, Dst>,

    // Always a unit quaternion; constructors validate and renormalize.
    pub orientation: Rotation3D<f64, Src, Dst>,
}

/// Latest head pose in world space. Owned by the frame driver and
/// overwritten whenever a tracker sample arrives.
pub type HeadPose = Pose<HeadSpace, WorldSpace>;

/// A head pose as reported by the tracker, before calibration.
pub type TrackerSample = Pose<HeadSpace, TrackerSpace>;

impl<Src, Dst> Pose<Src, Dst> {
    /// Builds a pose, rejecting orientations that are not unit length within
    /// tolerance and renormalizing the ones that are.
    pub fn new(position: Vector3D<f64, Dst>,
               orientation: Rotation3D<f64, Src, Dst>) -> Result<Self, CameraError> {
        utils::ensure_unit(&orientation)?;
        Ok(Pose {
            position: position,
            orientation: orientation.normalize(),
        })
    }

    pub fn identity() -> Self {
        Pose {
            position: Vector3D::zero(),
            orientation: Rotation3D::identity(),
        }
    }

    pub fn from_translation(position: Vector3D<f64, Dst>) -> Self {
        Pose {
            position: position,
            orientation: Rotation3D::identity(),
        }
    }

    /// Maps a direction expressed in `Src` into `Dst`.
    pub fn transform_vector(&self, v: Vector3D<f64, Src>) -> Vector3D<f64, Dst> {
        utils::rotate(v, &self.orientation)
    }

    /// Maps a location expressed in `Src` into `Dst`.
    pub fn transform_point(&self, p: Vector3D<f64, Src>) -> Vector3D<f64, Dst> {
        self.position + self.transform_vector(p)
    }

    /// Places a pose expressed relative to this one into `Dst`:
    /// `self ∘ child`.
    pub fn then_local<Child>(&self, child: &Pose<Child, Src>) -> Pose<Child, Dst> {
        Pose {
            position: self.transform_point(child.position),
            orientation: utils::compose(&self.orientation, &child.orientation),
        }
    }
}

impl<Src, Dst> Default for Pose<Src, Dst> {
    fn default() -> Self {
        Pose::identity()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::space::DisplaySpace;
    use euclid::{vec3, Angle};

    #[test]
    fn new_renormalizes_small_drift() {
        let q = Rotation3D::quaternion(0.0, 0.0, 0.0, 1.000002);
        let pose = HeadPose::new(vec3(1.0, 2.0, 3.0), q).unwrap();
        assert!((pose.orientation.square_norm() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn new_rejects_large_drift() {
        let q = Rotation3D::quaternion(0.0, 0.5, 0.0, 1.0);
        assert!(matches!(HeadPose::new(vec3(0.0, 0.0, 0.0), q),
                         Err(CameraError::NonUnitOrientation { .. })));
    }

    #[test]
    fn then_local_chains_translation_and_rotation() {
        let parent: Pose<DisplaySpace, WorldSpace> = Pose::new(
            vec3(0.0, 1.0, 0.0),
            Rotation3D::around_y(Angle::degrees(90.0)),
        ).unwrap();
        let child: Pose<HeadSpace, DisplaySpace> = Pose::from_translation(vec3(0.0, 0.0, -2.0));

        let chained = parent.then_local(&child);
        assert!((chained.position - vec3(-2.0, 1.0, 0.0)).length() < 1e-12);
        assert!((chained.orientation.r - parent.orientation.r).abs() < 1e-12);
    }
}
