//! Head-coupled off-axis stereo rendering.
//!
//! A tracked head pose is turned, every frame, into per-eye view and
//! projection matrices that make a fixed virtual display behave like a
//! physical window, and the eyes are sequenced into the draw buffer
//! according to the stereo mode.

#[macro_use]
extern crate log;

pub mod api;
pub mod frame_driver;
pub mod frustum;
pub mod look_at;
pub mod presentation;
pub mod projection;

pub use headtrack_api::*;

pub use crate::frame_driver::FrameDriver;
pub use crate::frustum::{build_frustum, build_symmetric_frustum, Frustum};
pub use crate::look_at::{build_camera_pose, build_look_at, ViewBasis};
pub use crate::presentation::{eye_target, EyeTarget, PresentationManager, Region};
pub use crate::projection::HeadCoupledCamera;
