pub mod headless;
pub mod mock;
pub mod replay;

#[cfg(feature = "gl")]
pub mod gl;

pub use self::headless::{HeadlessRasterizer, HeadlessTarget, TargetCall};
pub use self::mock::{MockPoseControlMsg, MockPoseSource};
pub use self::replay::{ReplayError, ReplayPoseSource};

#[cfg(feature = "gl")]
pub use self::gl::{GlRasterizer, GlRenderTarget};
