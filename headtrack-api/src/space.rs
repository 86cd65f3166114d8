//! Coordinate spaces the camera pipeline moves between, as euclid unit
//! markers, plus the matrix flavors handed to a rasterizer.
//!
//! All matrices follow the OpenGL convention: column vectors, column-major
//! storage. `Transform3D::to_array()` returns the sixteen terms in exactly
//! the order `glUniformMatrix4fv(.., GL_FALSE, ..)` expects.

use euclid::Transform3D;

/// Frame reported by the tracking hardware.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde-serialization", derive(Deserialize, Serialize))]
pub struct TrackerSpace;

/// Frame rigidly attached to the viewer's head. +X points to the right eye.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde-serialization", derive(Deserialize, Serialize))]
pub struct HeadSpace;

/// The shared scene frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde-serialization", derive(Deserialize, Serialize))]
pub struct WorldSpace;

/// Frame of the virtual display surface. The surface spans local X/Y and
/// its outward normal is +Z.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde-serialization", derive(Deserialize, Serialize))]
pub struct DisplaySpace;

/// Camera frame of one eye: right-handed, +Y up, looking down -Z.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde-serialization", derive(Deserialize, Serialize))]
pub struct EyeSpace;

/// Homogeneous clip coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde-serialization", derive(Deserialize, Serialize))]
pub struct ClipSpace;

/// Perspective projection from eye space into clip space.
pub type ProjectionMatrix = Transform3D<f64, EyeSpace, ClipSpace>;

/// World-to-camera transform.
pub type ViewMatrix = Transform3D<f64, WorldSpace, EyeSpace>;

/// Camera pose in world space; the rigid inverse of a `ViewMatrix`.
pub type CameraMatrix = Transform3D<f64, EyeSpace, WorldSpace>;
