//! Headless backend: a render target and rasterizer that draw nothing,
//! log what they are asked to do and keep a record of it. Used by the
//! replay tool and by tests.

use headtrack_api::{DrawBuffer, ProjectionMatrix, Rasterizer, RenderTarget, ViewMatrix, Viewport};

/// One operation requested of a `HeadlessTarget`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetCall {
    SelectBuffer(DrawBuffer),
    SetViewport(Viewport),
    Clear,
    Present,
}

/// Records every buffer operation in order.
#[derive(Debug, Default)]
pub struct HeadlessTarget {
    calls: Vec<TargetCall>,
    presented_frames: u64,
}

impl HeadlessTarget {
    pub fn new() -> HeadlessTarget {
        HeadlessTarget::default()
    }

    pub fn calls(&self) -> &[TargetCall] {
        &self.calls
    }

    /// Returns and forgets the calls recorded so far.
    pub fn take_calls(&mut self) -> Vec<TargetCall> {
        std::mem::replace(&mut self.calls, Vec::new())
    }

    pub fn clear_count(&self) -> usize {
        self.calls.iter().filter(|c| **c == TargetCall::Clear).count()
    }

    pub fn present_count(&self) -> usize {
        self.calls.iter().filter(|c| **c == TargetCall::Present).count()
    }

    pub fn presented_frames(&self) -> u64 {
        self.presented_frames
    }
}

impl RenderTarget for HeadlessTarget {
    fn select_buffer(&mut self, buffer: DrawBuffer) {
        trace!("Headless target: draw buffer {:?}", buffer);
        self.calls.push(TargetCall::SelectBuffer(buffer));
    }

    fn set_viewport(&mut self, viewport: Viewport) {
        trace!("Headless target: viewport {:?}", viewport);
        self.calls.push(TargetCall::SetViewport(viewport));
    }

    fn clear(&mut self) {
        trace!("Headless target: clear");
        self.calls.push(TargetCall::Clear);
    }

    fn present(&mut self) {
        self.presented_frames += 1;
        debug!("Headless target: present frame {}", self.presented_frames);
        self.calls.push(TargetCall::Present);
    }
}

/// Keeps the matrices of every render call and runs the draw callback.
#[derive(Debug, Default)]
pub struct HeadlessRasterizer {
    renders: Vec<(ViewMatrix, ProjectionMatrix)>,
    keep: Option<usize>,
}

impl HeadlessRasterizer {
    pub fn new() -> HeadlessRasterizer {
        HeadlessRasterizer::default()
    }

    /// A rasterizer that only remembers the most recent `count` renders,
    /// for long-running loops.
    pub fn keeping_last(count: usize) -> HeadlessRasterizer {
        HeadlessRasterizer {
            renders: Vec::with_capacity(count),
            keep: Some(count),
        }
    }

    pub fn renders(&self) -> &[(ViewMatrix, ProjectionMatrix)] {
        &self.renders
    }

    pub fn last(&self) -> Option<&(ViewMatrix, ProjectionMatrix)> {
        self.renders.last()
    }
}

impl Rasterizer for HeadlessRasterizer {
    fn render(&mut self, view: &ViewMatrix, projection: &ProjectionMatrix, draw: &mut dyn FnMut()) {
        trace!("Headless rasterizer: view {:?} projection {:?}", view.to_array(), projection.to_array());
        if let Some(keep) = self.keep {
            if keep == 0 {
                draw();
                return;
            }
            if self.renders.len() == keep {
                self.renders.remove(0);
            }
        }
        self.renders.push((*view, *projection));
        draw();
    }
}
