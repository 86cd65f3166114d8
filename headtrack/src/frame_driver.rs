//! One frame at a time: poll the pose source, then for every eye of the
//! stereo mode begin, compute matrices, rasterize and end.

use crate::presentation::PresentationManager;
use crate::projection::HeadCoupledCamera;
use headtrack_api::utils::{self, timestamp};
use headtrack_api::{Calibration, CameraError, Eye, FrameData, HeadPose, PoseSource, Rasterizer,
                    RenderTarget, TrackerCalibration, TrackerSample};

pub struct FrameDriver<S: PoseSource> {
    source: S,
    tracker: TrackerCalibration,
    camera: HeadCoupledCamera,
    presentation: PresentationManager,
    head_pose: Option<HeadPose>,
    frame_count: u64,
}

impl<S: PoseSource> FrameDriver<S> {
    pub fn new(source: S, calibration: Calibration, presentation: PresentationManager)
               -> Result<FrameDriver<S>, CameraError> {
        let Calibration { display, viewer, tracker } = calibration;
        let camera = HeadCoupledCamera::new(display, viewer)?;
        info!("Frame driver ready: {} stereo, {:?} buffer",
              presentation.mode(), presentation.size());
        if presentation.mode().is_stereo() {
            info!("Interocular distance {} m", camera.viewer().interocular_distance_m);
        }
        Ok(FrameDriver {
            source: source,
            tracker: tracker,
            camera: camera,
            presentation: presentation,
            head_pose: None,
            frame_count: 0,
        })
    }

    /// The latest world-space head pose, or None until the first sample.
    pub fn head_pose(&self) -> Option<&HeadPose> {
        self.head_pose.as_ref()
    }

    pub fn camera(&self) -> &HeadCoupledCamera {
        &self.camera
    }

    pub fn presentation(&self) -> &PresentationManager {
        &self.presentation
    }

    pub fn presentation_mut(&mut self) -> &mut PresentationManager {
        &mut self.presentation
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn source_mut(&mut self) -> &mut S {
        &mut self.source
    }

    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// Polls the source once and keeps the newest sample it reported.
    /// Samples with a non-unit orientation are dropped and the previous
    /// pose is kept. Returns whether the head pose changed.
    pub fn poll(&mut self) -> bool {
        let mut latest: Option<TrackerSample> = None;
        self.source.poll(&mut |sample| latest = Some(sample));
        let sample = match latest {
            Some(sample) => sample,
            None => return false,
        };
        if let Err(err) = utils::ensure_unit(&sample.orientation) {
            warn!("Dropping tracker sample: {}", err);
            return false;
        }
        let pose = self.tracker.to_world(&sample);
        trace!("Head pose {:?}", pose);
        self.head_pose = Some(pose);
        true
    }

    /// Produces one frame. `draw` is called once per rendered eye, inside
    /// the rasterizer, after the eye's matrices have been loaded.
    pub fn frame(&mut self,
                 target: &mut dyn RenderTarget,
                 rasterizer: &mut dyn Rasterizer,
                 draw: &mut dyn FnMut(Eye)) -> FrameData {
        let mut data = FrameData {
            timestamp: timestamp(),
            ..FrameData::default()
        };
        self.poll();
        data.pose = self.head_pose;

        let mode = self.presentation.mode();
        for &eye in mode.eyes() {
            let viewport = match self.presentation.begin(eye, target) {
                Ok(viewport) => viewport,
                Err(err) => {
                    warn!("Cannot begin {:?} eye: {}", eye, err);
                    data.skipped.push(eye);
                    continue;
                },
            };

            let view = match self.head_pose {
                Some(ref head) => self.camera.eye_view(head, eye),
                None => self.camera.fallback_eye_view(eye, viewport.aspect()),
            };
            match view {
                Ok(view) => {
                    rasterizer.render(&view.view, &view.projection, &mut || draw(eye));
                    data.eyes.push(view);
                    data.viewports.push(viewport);
                },
                Err(err) => {
                    warn!("Skipping {:?} eye in frame {}: {}", eye, self.frame_count, err);
                    data.skipped.push(eye);
                },
            }

            match self.presentation.end(eye, target) {
                Ok(presented) => data.presented |= presented,
                Err(err) => warn!("Cannot end {:?} eye: {}", eye, err),
            }
        }

        self.frame_count += 1;
        data
    }
}
