//! Stereo presentation: which buffer and viewport each eye draws into, and
//! when the buffer is cleared and presented.

use headtrack_api::{CameraError, DrawBuffer, Eye, RenderTarget, StereoMode, Viewport};

/// Part of the draw buffer an eye covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    Full,
    LeftHalf,
    RightHalf,
    TopHalf,
    BottomHalf,
}

impl Region {
    /// Pixel rectangle of the region in a `width` x `height` buffer with a
    /// bottom-left origin. Odd sizes give the extra pixel to the second half.
    pub fn viewport(self, width: i32, height: i32) -> Viewport {
        let half_w = width / 2;
        let half_h = height / 2;
        match self {
            Region::Full => Viewport::new(0, 0, width, height),
            Region::LeftHalf => Viewport::new(0, 0, half_w, height),
            Region::RightHalf => Viewport::new(half_w, 0, width - half_w, height),
            Region::TopHalf => Viewport::new(0, half_h, width, height - half_h),
            Region::BottomHalf => Viewport::new(0, 0, width, half_h),
        }
    }
}

/// Where and how one eye is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EyeTarget {
    pub buffer: DrawBuffer,
    pub region: Region,
    // Clear the buffer before drawing this eye.
    pub clear: bool,
    // Present once this eye is drawn.
    pub present: bool,
}

impl EyeTarget {
    const fn new(buffer: DrawBuffer, region: Region, clear: bool, present: bool) -> EyeTarget {
        EyeTarget {
            buffer: buffer,
            region: region,
            clear: clear,
            present: present,
        }
    }
}

/// The per-(mode, eye) presentation table. Modes that give every eye a
/// buffer of its own present after each eye; modes that share one buffer
/// present only after the second half is drawn.
pub fn eye_target(mode: StereoMode, eye: Eye) -> Result<EyeTarget, CameraError> {
    use self::Region::*;
    use headtrack_api::DrawBuffer::*;

    let target = match (mode, eye) {
        (StereoMode::None, _) => EyeTarget::new(Back, Full, true, true),
        (StereoMode::QuadBuffer, Eye::Left) => EyeTarget::new(BackLeft, Full, true, true),
        (StereoMode::QuadBuffer, Eye::Right) => EyeTarget::new(BackRight, Full, true, true),
        (StereoMode::SideBySide, Eye::Left) => EyeTarget::new(Back, LeftHalf, true, false),
        (StereoMode::SideBySide, Eye::Right) => EyeTarget::new(Back, RightHalf, false, true),
        (StereoMode::TopBottom, Eye::Left) => EyeTarget::new(Back, TopHalf, true, false),
        (StereoMode::TopBottom, Eye::Right) => EyeTarget::new(Back, BottomHalf, false, true),
        (_, Eye::Center) => return Err(CameraError::eye_not_rendered(eye, mode)),
    };
    Ok(target)
}

pub struct PresentationManager {
    mode: StereoMode,
    width: i32,
    height: i32,
    active: Option<Eye>,
    frames_presented: u64,
}

impl PresentationManager {
    pub fn new(mode: StereoMode, width: i32, height: i32) -> PresentationManager {
        PresentationManager {
            mode: mode,
            width: width,
            height: height,
            active: None,
            frames_presented: 0,
        }
    }

    pub fn mode(&self) -> StereoMode {
        self.mode
    }

    pub fn size(&self) -> (i32, i32) {
        (self.width, self.height)
    }

    pub fn frames_presented(&self) -> u64 {
        self.frames_presented
    }

    /// Takes effect from the next `begin`. An eye left open under the old
    /// mode is dropped.
    pub fn set_mode(&mut self, mode: StereoMode) {
        if self.mode != mode {
            info!("Stereo mode {} -> {}", self.mode, mode);
            self.mode = mode;
            self.active = None;
        }
    }

    pub fn resize(&mut self, width: i32, height: i32) {
        debug!("Presentation buffer resized to {}x{}", width, height);
        self.width = width;
        self.height = height;
    }

    /// Viewport `eye` will be drawn into under the current mode and size.
    pub fn viewport(&self, eye: Eye) -> Result<Viewport, CameraError> {
        let target = eye_target(self.mode, eye)?;
        Ok(target.region.viewport(self.width, self.height))
    }

    /// Selects the buffer and viewport for `eye`, clearing first when the
    /// eye is the first write of the frame into that buffer.
    pub fn begin(&mut self, eye: Eye, target: &mut dyn RenderTarget) -> Result<Viewport, CameraError> {
        let eye_target = eye_target(self.mode, eye)?;
        if let Some(open) = self.active {
            warn!("begin({:?}) while {:?} is still open", eye, open);
        }
        let viewport = eye_target.region.viewport(self.width, self.height);

        target.select_buffer(eye_target.buffer);
        target.set_viewport(viewport);
        if eye_target.clear {
            target.clear();
        }
        self.active = Some(eye);
        Ok(viewport)
    }

    /// Finishes `eye`; presents and returns true when it completes the frame.
    pub fn end(&mut self, eye: Eye, target: &mut dyn RenderTarget) -> Result<bool, CameraError> {
        let eye_target = eye_target(self.mode, eye)?;
        if self.active != Some(eye) {
            warn!("end({:?}) without a matching begin, ignored", eye);
            return Ok(false);
        }
        self.active = None;
        if !eye_target.present {
            return Ok(false);
        }
        target.present();
        self.frames_presented += 1;
        Ok(true)
    }
}
