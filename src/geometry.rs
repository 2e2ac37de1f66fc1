//! Circle geometry shared by the validator and the masker.

/// The circle inscribed in an image: centered at (width/2, height/2) with
/// radius width/2.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CircleGeometry {
    pub center_x: f64,
    pub center_y: f64,
    pub radius: f64,
}

impl CircleGeometry {
    pub fn for_dimensions(width: u32, height: u32) -> Self {
        Self {
            center_x: width as f64 / 2.0,
            center_y: height as f64 / 2.0,
            radius: width as f64 / 2.0,
        }
    }

    /// True when the pixel coordinate lies strictly outside the circle.
    /// Pixels exactly on the boundary are inside.
    pub fn is_outside(&self, x: u32, y: u32) -> bool {
        let dx = x as f64 - self.center_x;
        let dy = y as f64 - self.center_y;
        dx * dx + dy * dy > self.radius * self.radius
    }
}
