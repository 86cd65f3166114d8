//! Shared types for head-coupled stereo rendering: poses, eyes, stereo
//! modes, calibration data, per-frame matrices, and the traits backends
//! implement to feed poses in and push pixels out.

#[macro_use]
extern crate log;
#[cfg(feature = "serde-serialization")]
#[macro_use]
extern crate serde;

pub mod utils;

pub mod calibration;
pub mod display_config;
pub mod error;
pub mod eye;
pub mod field_of_view;
pub mod frame_data;
pub mod pose;
pub mod pose_source;
pub mod render_target;
pub mod space;
pub mod stereo_mode;
pub mod viewer_config;
pub mod viewport;

pub use calibration::{Calibration, TrackerCalibration};
pub use display_config::DisplayConfig;
pub use error::CameraError;
pub use eye::Eye;
pub use field_of_view::FieldOfView;
pub use frame_data::{EyeView, FrameData};
pub use pose::{HeadPose, Pose, TrackerSample};
pub use pose_source::PoseSource;
pub use render_target::{Rasterizer, RenderTarget};
pub use space::{CameraMatrix, ClipSpace, DisplaySpace, EyeSpace, HeadSpace, ProjectionMatrix,
                TrackerSpace, ViewMatrix, WorldSpace};
pub use stereo_mode::StereoMode;
pub use viewer_config::ViewerConfig;
pub use viewport::{DrawBuffer, Viewport};
