//! Replays recorded tracker samples, one per poll.
//!
//! The log is plain text with one sample per line:
//! `px py pz qx qy qz qw` (position in meters, orientation quaternion with
//! the scalar last). Blank lines and lines starting with `#` are skipped.

use euclid::{vec3, Rotation3D};
use headtrack_api::{CameraError, PoseSource, TrackerSample};
use std::collections::VecDeque;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

#[derive(Debug, thiserror::Error)]
pub enum ReplayError {
    #[error("failed to read pose log: {0}")]
    Io(#[from] io::Error),

    #[error("line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error("line {line}: {source}")]
    Orientation { line: usize, source: CameraError },
}

pub struct ReplayPoseSource {
    samples: VecDeque<TrackerSample>,
    cursor: usize,
    looping: bool,
}

impl ReplayPoseSource {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<ReplayPoseSource, ReplayError> {
        let file = File::open(path.as_ref())?;
        let source = ReplayPoseSource::from_reader(BufReader::new(file))?;
        info!("Loaded {} pose samples from {}", source.len(), path.as_ref().display());
        Ok(source)
    }

    pub fn from_reader<R: BufRead>(reader: R) -> Result<ReplayPoseSource, ReplayError> {
        let mut samples = VecDeque::new();
        for (index, line) in reader.lines().enumerate() {
            if let Some(sample) = parse_sample(index + 1, &line?)? {
                samples.push_back(sample);
            }
        }
        Ok(ReplayPoseSource::from_samples(samples))
    }

    pub fn from_samples<I: IntoIterator<Item = TrackerSample>>(samples: I) -> ReplayPoseSource {
        ReplayPoseSource {
            samples: samples.into_iter().collect(),
            cursor: 0,
            looping: false,
        }
    }

    /// Start over from the first sample once the log is exhausted.
    pub fn looping(mut self, looping: bool) -> ReplayPoseSource {
        self.looping = looping;
        self
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}

impl PoseSource for ReplayPoseSource {
    fn poll(&mut self, update: &mut dyn FnMut(TrackerSample)) {
        if self.cursor >= self.samples.len() {
            if !self.looping || self.samples.is_empty() {
                return;
            }
            debug!("Pose log exhausted, rewinding");
            self.cursor = 0;
        }
        let sample = self.samples[self.cursor];
        self.cursor += 1;
        update(sample);
    }

    fn is_available(&self) -> bool {
        self.cursor < self.samples.len() || (self.looping && !self.samples.is_empty())
    }
}

/// Parses one log line; `Ok(None)` for blank and comment lines.
pub fn parse_sample(line_number: usize, line: &str) -> Result<Option<TrackerSample>, ReplayError> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }

    let mut values = [0.0f64; 7];
    let mut count = 0;
    for field in line.split_whitespace() {
        if count == values.len() {
            return Err(ReplayError::Parse {
                line: line_number,
                message: "expected 7 values, found more".to_string(),
            });
        }
        values[count] = field.parse().map_err(|_| ReplayError::Parse {
            line: line_number,
            message: format!("'{}' is not a number", field),
        })?;
        count += 1;
    }
    if count != values.len() {
        return Err(ReplayError::Parse {
            line: line_number,
            message: format!("expected 7 values, found {}", count),
        });
    }

    let [px, py, pz, qx, qy, qz, qw] = values;
    TrackerSample::new(vec3(px, py, pz), Rotation3D::quaternion(qx, qy, qz, qw))
        .map(Some)
        .map_err(|err| ReplayError::Orientation { line: line_number, source: err })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    const LOG: &str = "# head moving right\n\
                       0.0 0.0 0.0  0 0 0 1\n\
                       \n\
                       0.1 0.0 0.0  0 0 0 1\n\
                       0.2 0.0 0.0  0 0.7071067811865476 0 0.7071067811865476\n";

    fn drain(source: &mut ReplayPoseSource) -> Option<TrackerSample> {
        let mut seen = None;
        source.poll(&mut |pose| seen = Some(pose));
        seen
    }

    #[test]
    fn replays_one_sample_per_poll() {
        let mut source = ReplayPoseSource::from_reader(Cursor::new(LOG)).unwrap();
        assert_eq!(source.len(), 3);
        for expected in [0.0, 0.1, 0.2].iter() {
            assert!(source.is_available());
            assert_eq!(drain(&mut source).unwrap().position.x, *expected);
        }
        assert!(!source.is_available());
        assert!(drain(&mut source).is_none());
    }

    #[test]
    fn looping_rewinds() {
        let mut source = ReplayPoseSource::from_reader(Cursor::new(LOG)).unwrap().looping(true);
        for _ in 0..3 {
            drain(&mut source);
        }
        assert!(source.is_available());
        assert_eq!(drain(&mut source).unwrap().position.x, 0.0);
    }

    #[test]
    fn reports_bad_lines() {
        match parse_sample(4, "1 2 3 0 0 0") {
            Err(ReplayError::Parse { line: 4, .. }) => {},
            other => panic!("unexpected {:?}", other),
        }
        match parse_sample(5, "1 2 3 0 0 x 1") {
            Err(ReplayError::Parse { line: 5, .. }) => {},
            other => panic!("unexpected {:?}", other),
        }
        match parse_sample(6, "1 2 3 0 0 0 2") {
            Err(ReplayError::Orientation { line: 6, source: CameraError::NonUnitOrientation { .. } }) => {},
            other => panic!("unexpected {:?}", other),
        }
        assert!(parse_sample(7, "   # note").unwrap().is_none());
        assert!(parse_sample(8, "1 2 3 0 0 0 1 9").is_err());
    }
}
