/// The 2D rectangle of the draw buffer one eye renders into, in device
/// pixels with a bottom-left origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde-serialization", derive(Deserialize, Serialize))]
pub struct Viewport {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Viewport {
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x: x,
            y: y,
            width: width,
            height: height,
        }
    }

    pub fn aspect(&self) -> f64 {
        if self.height == 0 {
            return 1.0;
        }
        self.width as f64 / self.height as f64
    }
}

/// Which back buffer a draw goes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde-serialization", derive(Deserialize, Serialize))]
pub enum DrawBuffer {
    /// The single back buffer of a double-buffered context.
    Back,
    /// Left back buffer of a quad-buffered stereo context.
    BackLeft,
    /// Right back buffer of a quad-buffered stereo context.
    BackRight,
}
