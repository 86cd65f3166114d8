use crate::space::{ProjectionMatrix, ViewMatrix};
use crate::viewport::{DrawBuffer, Viewport};

/// The buffer-level operations the presentation manager sequences. Backends
/// implement this over a real graphics context or a recorder.
pub trait RenderTarget {
    /// Routes subsequent drawing to `buffer`.
    fn select_buffer(&mut self, buffer: DrawBuffer);

    /// Restricts subsequent drawing to `viewport`.
    fn set_viewport(&mut self, viewport: Viewport);

    /// Clears color and depth of the selected buffer.
    fn clear(&mut self);

    /// Shows the composed frame.
    fn present(&mut self);
}

/// The opaque consumer of camera matrices. It never sees poses or
/// displays, only the two matrices of the eye being drawn.
pub trait Rasterizer {
    /// Loads `view` and `projection` and runs `draw` to issue the scene.
    fn render(&mut self, view: &ViewMatrix, projection: &ProjectionMatrix, draw: &mut dyn FnMut());
}
