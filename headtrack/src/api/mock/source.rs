use euclid::{vec3, Rotation3D};
use headtrack_api::{PoseSource, TrackerSample};
use std::sync::mpsc::{channel, Receiver, Sender, TryRecvError};
use super::MockPoseControlMsg;

/// A pose source fed through a channel. Poses may be sent from any thread;
/// each poll drains the channel and reports only the newest valid pose.
pub struct MockPoseSource {
    receiver: Receiver<MockPoseControlMsg>,
    available: bool,
    delivered: u64,
}

impl MockPoseSource {
    pub fn new() -> (MockPoseSource, Sender<MockPoseControlMsg>) {
        let (sender, receiver) = channel();
        let source = MockPoseSource {
            receiver: receiver,
            available: true,
            delivered: 0,
        };
        (source, sender)
    }

    /// Number of poses reported through `poll` so far.
    pub fn delivered(&self) -> u64 {
        self.delivered
    }

    fn handle_msg(&mut self, msg: MockPoseControlMsg, latest: &mut Option<TrackerSample>) {
        match msg {
            MockPoseControlMsg::SetHeadPose(pose) => {
                match TrackerSample::new(pose.position, pose.orientation) {
                    Ok(pose) => *latest = Some(pose),
                    Err(err) => warn!("Mock pose source dropped sample: {}", err),
                }
            },
            MockPoseControlMsg::SetViewerPose(p, q) => {
                let orientation = Rotation3D::quaternion(q[0], q[1], q[2], q[3]);
                match TrackerSample::new(vec3(p[0], p[1], p[2]), orientation) {
                    Ok(pose) => *latest = Some(pose),
                    Err(err) => warn!("Mock pose source dropped sample: {}", err),
                }
            },
            MockPoseControlMsg::Disconnect => {
                debug!("Mock pose source disconnected");
                self.available = false;
            },
        }
    }
}

impl PoseSource for MockPoseSource {
    fn poll(&mut self, update: &mut dyn FnMut(TrackerSample)) {
        let mut latest = None;
        loop {
            match self.receiver.try_recv() {
                Ok(msg) => self.handle_msg(msg, &mut latest),
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => {
                    if self.available {
                        debug!("Mock pose source lost its sender");
                    }
                    self.available = false;
                    break;
                },
            }
        }
        if let Some(pose) = latest {
            self.delivered += 1;
            update(pose);
        }
    }

    fn is_available(&self) -> bool {
        self.available
    }
}
