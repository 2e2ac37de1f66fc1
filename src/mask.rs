use crate::geometry::CircleGeometry;
use image::DynamicImage;

/// Apply a circular mask to an image to create a round badge.
///
/// Pixels strictly outside the inscribed circle get their alpha set to 0,
/// everything else (including RGB outside the circle) is left as is.
/// Returns a new RGBA image of the same dimensions.
pub fn apply_circular_mask(img: &DynamicImage) -> DynamicImage {
    let circle = CircleGeometry::for_dimensions(img.width(), img.height());
    let mut rgba_img = img.to_rgba8();

    let mut masked = 0usize;
    for (x, y, pixel) in rgba_img.enumerate_pixels_mut() {
        if circle.is_outside(x, y) && pixel[3] > 0 {
            pixel[3] = 0;
            masked += 1;
        }
    }
    log::debug!(
        "Masked {} pixels outside circle of radius {}",
        masked,
        circle.radius
    );

    DynamicImage::ImageRgba8(rgba_img)
}
