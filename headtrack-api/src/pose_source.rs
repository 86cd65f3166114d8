use crate::pose::TrackerSample;

/// A supplier of tracked head poses. The frame driver polls it once at the
/// start of every frame; a source never pushes on its own.
pub trait PoseSource {
    /// Processes whatever samples are pending and reports them through
    /// `update`, synchronously, before returning. Reporting nothing is
    /// normal when no new sample arrived. Polling must not block.
    fn poll(&mut self, update: &mut dyn FnMut(TrackerSample));

    /// Whether the source can still produce samples.
    fn is_available(&self) -> bool {
        true
    }
}

impl<'a, S: PoseSource + ?Sized> PoseSource for &'a mut S {
    fn poll(&mut self, update: &mut dyn FnMut(TrackerSample)) {
        (**self).poll(update)
    }

    fn is_available(&self) -> bool {
        (**self).is_available()
    }
}

impl<S: PoseSource + ?Sized> PoseSource for Box<S> {
    fn poll(&mut self, update: &mut dyn FnMut(TrackerSample)) {
        (**self).poll(update)
    }

    fn is_available(&self) -> bool {
        (**self).is_available()
    }
}
