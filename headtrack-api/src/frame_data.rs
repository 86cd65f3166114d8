use crate::eye::Eye;
use crate::field_of_view::FieldOfView;
use crate::pose::HeadPose;
use crate::space::{ProjectionMatrix, ViewMatrix, WorldSpace};
use crate::viewport::Viewport;
use euclid::Vector3D;

// Everything needed to render one eye of one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct EyeView {
    pub eye: Eye,

    // World-space position the eye was rendered from.
    pub position: Vector3D<f64, WorldSpace>,

    // Off-axis projection for this eye.
    pub projection: ProjectionMatrix,

    // World-to-eye transform for this eye.
    pub view: ViewMatrix,

    // Angular extent of the projection, per edge.
    pub field_of_view: FieldOfView,
}

impl EyeView {
    /// Projection as sixteen column-major floats, ready for upload.
    pub fn projection_array(&self) -> [f32; 16] {
        self.projection.cast::<f32>().to_array()
    }

    /// View as sixteen column-major floats, ready for upload.
    pub fn view_array(&self) -> [f32; 16] {
        self.view.cast::<f32>().to_array()
    }
}

// Represents what was produced for a single frame. Matrices are transient:
// nothing here is reused for the next frame.
#[derive(Debug, Clone, Default)]
pub struct FrameData {
    // Milliseconds, taken when the frame started.
    pub timestamp: f64,

    // Head pose the eyes were derived from, or None while untracked.
    pub pose: Option<HeadPose>,

    // Eyes that were computed and rendered, in drawing order.
    pub eyes: Vec<EyeView>,

    // Viewports the eyes were drawn into, parallel to `eyes`.
    pub viewports: Vec<Viewport>,

    // Eyes that were skipped because their matrices could not be computed.
    pub skipped: Vec<Eye>,

    // Whether the frame was presented.
    pub presented: bool,
}

impl FrameData {
    pub fn eye(&self, eye: Eye) -> Option<&EyeView> {
        self.eyes.iter().find(|view| view.eye == eye)
    }
}
