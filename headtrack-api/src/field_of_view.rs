/// Angles, in degrees, from an eye's view axis to the four edges of the
/// display as seen from that eye. A head that is off-centre sees unequal
/// halves; a centred one sees `up == down` and `left == right`.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde-serialization", derive(Deserialize, Serialize))]
pub struct FieldOfView {
    pub up_degrees: f64,
    pub right_degrees: f64,
    pub down_degrees: f64,
    pub left_degrees: f64,
}

impl FieldOfView {
    pub fn horizontal_degrees(&self) -> f64 {
        self.left_degrees + self.right_degrees
    }

    pub fn vertical_degrees(&self) -> f64 {
        self.up_degrees + self.down_degrees
    }

    /// Degrees the view axis is turned off the centre of the visible area,
    /// positive to the right and up.
    pub fn skew_degrees(&self) -> (f64, f64) {
        (0.5 * (self.right_degrees - self.left_degrees),
         0.5 * (self.up_degrees - self.down_degrees))
    }
}
