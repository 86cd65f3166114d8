//! Frame loop integration: pose sources, calibration, projection and
//! presentation driven together through the public API with the headless
//! backend.

use euclid::vec3;
use headtrack::api::{HeadlessRasterizer, HeadlessTarget, MockPoseControlMsg, MockPoseSource,
                     ReplayPoseSource, TargetCall};
use headtrack::{Calibration, DrawBuffer, Eye, FrameData, FrameDriver, PresentationManager,
                StereoMode, TrackerSample, Viewport};
use std::io::Cursor;

struct Harness<S: headtrack::PoseSource> {
    driver: FrameDriver<S>,
    target: HeadlessTarget,
    rasterizer: HeadlessRasterizer,
    drawn: Vec<Eye>,
}

impl<S: headtrack::PoseSource> Harness<S> {
    fn new(source: S, mode: StereoMode, width: i32, height: i32) -> Harness<S> {
        let presentation = PresentationManager::new(mode, width, height);
        Harness {
            driver: FrameDriver::new(source, Calibration::default(), presentation).unwrap(),
            target: HeadlessTarget::new(),
            rasterizer: HeadlessRasterizer::new(),
            drawn: Vec::new(),
        }
    }

    fn frame(&mut self) -> FrameData {
        let drawn = &mut self.drawn;
        self.driver.frame(&mut self.target, &mut self.rasterizer, &mut |eye| drawn.push(eye))
    }
}

// Sample that puts the head 5 m straight in front of the default display.
fn centred_sample() -> TrackerSample {
    TrackerSample::from_translation(vec3(0.0, -0.1, 0.0))
}

// ── Presentation sequencing ─────────────────────────────────

#[test]
fn side_by_side_frame_sequence() {
    let (source, sender) = MockPoseSource::new();
    let mut harness = Harness::new(source, StereoMode::SideBySide, 800, 600);
    sender.send(MockPoseControlMsg::SetHeadPose(centred_sample())).unwrap();

    let data = harness.frame();
    assert_eq!(harness.target.calls(), &[
        TargetCall::SelectBuffer(DrawBuffer::Back),
        TargetCall::SetViewport(Viewport::new(0, 0, 400, 600)),
        TargetCall::Clear,
        TargetCall::SelectBuffer(DrawBuffer::Back),
        TargetCall::SetViewport(Viewport::new(400, 0, 400, 600)),
        TargetCall::Present,
    ]);
    assert_eq!(data.viewports, vec![Viewport::new(0, 0, 400, 600), Viewport::new(400, 0, 400, 600)]);
    assert_eq!(harness.drawn, vec![Eye::Left, Eye::Right]);
}

#[test]
fn quad_buffer_presents_after_each_eye() {
    let (source, _sender) = MockPoseSource::new();
    let mut harness = Harness::new(source, StereoMode::QuadBuffer, 600, 600);
    for _ in 0..3 {
        assert!(harness.frame().presented);
    }
    assert_eq!(harness.target.present_count(), 6);
    assert_eq!(harness.target.clear_count(), 6);
    assert_eq!(harness.rasterizer.renders().len(), 6);
}

#[test]
fn mode_switch_between_frames() {
    let (source, _sender) = MockPoseSource::new();
    let mut harness = Harness::new(source, StereoMode::None, 800, 600);
    harness.frame();
    harness.driver.presentation_mut().set_mode(StereoMode::TopBottom);
    harness.target.take_calls();

    let data = harness.frame();
    assert_eq!(data.viewports, vec![Viewport::new(0, 300, 800, 300), Viewport::new(0, 0, 800, 300)]);
    assert_eq!(harness.target.present_count(), 1);
    assert_eq!(harness.drawn, vec![Eye::Center, Eye::Left, Eye::Right]);
}

// ── Head-coupled matrices ───────────────────────────────────

#[test]
fn centred_head_gets_a_symmetric_projection() {
    let (source, sender) = MockPoseSource::new();
    let mut harness = Harness::new(source, StereoMode::None, 600, 600);
    sender.send(MockPoseControlMsg::SetHeadPose(centred_sample())).unwrap();

    let data = harness.frame();
    let view = data.eye(Eye::Center).unwrap();
    let projection = view.projection_array();
    assert!(projection[8].abs() < 1e-6);
    assert!(projection[9].abs() < 1e-6);
    assert!((view.position - vec3(0.0, 0.0, 5.0)).length() < 1e-12);

    // The upload order puts the translation in the last column.
    let upload = view.view_array();
    assert!((upload[14] + 5.0).abs() < 1e-6);
    assert_eq!(upload[15], 1.0);

    let fov = view.field_of_view;
    assert!((fov.left_degrees - fov.right_degrees).abs() < 1e-9);
    assert!((fov.up_degrees - fov.down_degrees).abs() < 1e-9);
}

#[test]
fn moving_head_skews_the_projection() {
    let (source, sender) = MockPoseSource::new();
    let mut harness = Harness::new(source, StereoMode::None, 600, 600);

    sender.send(MockPoseControlMsg::SetViewerPose([1.0, -0.1, 0.0], [0.0, 0.0, 0.0, 1.0])).unwrap();
    let right_of_centre = harness.frame();
    sender.send(MockPoseControlMsg::SetViewerPose([-1.0, -0.1, 0.0], [0.0, 0.0, 0.0, 1.0])).unwrap();
    let left_of_centre = harness.frame();

    let a = right_of_centre.eye(Eye::Center).unwrap().projection.to_array()[8];
    let b = left_of_centre.eye(Eye::Center).unwrap().projection.to_array()[8];
    // Display sits to the left of a viewer who moved right.
    assert!(a < 0.0);
    assert!((a + b).abs() < 1e-12);
}

#[test]
fn pose_persists_across_frames_without_samples() {
    let (source, sender) = MockPoseSource::new();
    let mut harness = Harness::new(source, StereoMode::None, 600, 600);
    sender.send(MockPoseControlMsg::SetHeadPose(centred_sample())).unwrap();

    let first = harness.frame();
    let second = harness.frame();
    assert!(second.pose.is_some());
    assert_eq!(first.pose, second.pose);
    assert_eq!(first.eyes[0].projection, second.eyes[0].projection);
}

#[test]
fn untracked_then_tracked() {
    let (source, sender) = MockPoseSource::new();
    let mut harness = Harness::new(source, StereoMode::SideBySide, 800, 600);

    let untracked = harness.frame();
    assert!(untracked.pose.is_none());
    assert_eq!(untracked.eyes.len(), 2);

    sender.send(MockPoseControlMsg::SetHeadPose(centred_sample())).unwrap();
    let tracked = harness.frame();
    assert!(tracked.pose.is_some());
    assert_eq!(tracked.eyes.len(), 2);
}

#[test]
fn degenerate_eyes_are_skipped_not_fatal() {
    let (source, sender) = MockPoseSource::new();
    let mut harness = Harness::new(source, StereoMode::SideBySide, 800, 600);

    // Exactly in the display plane.
    sender.send(MockPoseControlMsg::SetHeadPose(TrackerSample::from_translation(vec3(0.0, 0.0, -5.0))))
          .unwrap();
    let data = harness.frame();
    assert!(data.eyes.is_empty());
    assert_eq!(data.skipped, vec![Eye::Left, Eye::Right]);
    assert!(data.presented);
    assert!(harness.drawn.is_empty());

    // Recovers as soon as the head is back in front.
    sender.send(MockPoseControlMsg::SetHeadPose(centred_sample())).unwrap();
    let data = harness.frame();
    assert_eq!(data.eyes.len(), 2);
    assert!(data.skipped.is_empty());
}

// ── Replay source ───────────────────────────────────────────

#[test]
fn replay_log_drives_one_sample_per_frame() {
    let log = "# recorded session\n\
               0.0 -0.1 0.0  0 0 0 1\n\
               \n\
               0.5 -0.1 -1.0 0 0 0 1\n";
    let source = ReplayPoseSource::from_reader(Cursor::new(log)).unwrap();
    assert_eq!(source.len(), 2);
    let mut harness = Harness::new(source, StereoMode::None, 600, 600);

    harness.frame();
    assert!((harness.driver.head_pose().unwrap().position - vec3(0.0, 0.0, 5.0)).length() < 1e-12);
    harness.frame();
    assert!((harness.driver.head_pose().unwrap().position - vec3(0.5, 0.0, 4.0)).length() < 1e-12);

    // Exhausted: the last pose is kept.
    harness.frame();
    assert!((harness.driver.head_pose().unwrap().position - vec3(0.5, 0.0, 4.0)).length() < 1e-12);
    assert_eq!(harness.target.present_count(), 3);
}

#[test]
fn replay_rejects_malformed_logs() {
    assert!(ReplayPoseSource::from_reader(Cursor::new("0 0 0 0 0 0\n")).is_err());
    assert!(ReplayPoseSource::from_reader(Cursor::new("0 0 0 0 0 0 2\n")).is_err());
}
