use badge_check::{apply_circular_mask, validate, validate_report, Check, ValidationResult};
use image::{DynamicImage, ImageBuffer, Rgba};

/// 512x512 badge that is opaque `color` inside the inscribed circle and fully
/// transparent outside it
fn disc_badge(color: [u8; 3]) -> DynamicImage {
    let [r, g, b] = color;
    let img = ImageBuffer::from_fn(512, 512, |_, _| Rgba([r, g, b, 255]));
    apply_circular_mask(&DynamicImage::ImageRgba8(img))
}

fn solid(width: u32, height: u32, color: Rgba<u8>) -> DynamicImage {
    DynamicImage::ImageRgba8(ImageBuffer::from_fn(width, height, |_, _| color))
}

#[test]
fn test_wrong_sizes_are_invalid_regardless_of_content() {
    for (width, height) in [(300, 300), (511, 512), (512, 511), (1024, 1024), (1, 1)] {
        let transparent = solid(width, height, Rgba([0, 0, 0, 0]));
        let happy = solid(width, height, Rgba([200, 150, 0, 255]));
        assert_eq!(validate(&transparent), ValidationResult::InvalidSize);
        assert_eq!(validate(&happy), ValidationResult::InvalidSize);
    }
}

#[test]
fn test_invalid_size_skips_remaining_checks() {
    let report = validate_report(&solid(300, 300, Rgba([200, 150, 0, 255])));
    assert_eq!(report.result, ValidationResult::InvalidSize);
    assert_eq!(report.evaluated, vec![Check::Size]);
    assert_eq!(report.message, "Invalid size");
}

#[test]
fn test_opaque_square_fails_containment() {
    let report = validate_report(&solid(512, 512, Rgba([200, 150, 0, 255])));
    assert_eq!(report.result, ValidationResult::OutsideCircle);
    assert!(!report.evaluated.contains(&Check::Happiness));
}

#[test]
fn test_happy_disc_is_valid() {
    let report = validate_report(&disc_badge([200, 150, 0]));
    assert_eq!(report.result, ValidationResult::Valid);
    assert_eq!(report.message, "The image is valid");
    assert_eq!(
        report.evaluated,
        vec![Check::Size, Check::Containment, Check::Happiness]
    );
}

#[test]
fn test_green_disc_is_not_happy() {
    let result = validate(&disc_badge([100, 200, 100]));
    assert_eq!(result, ValidationResult::NotHappy);
    assert_eq!(
        result.message(),
        "The colors of the badge do not give a \"happy\" feeling"
    );
}

#[test]
fn test_masked_images_always_pass_containment() {
    let sources = [
        solid(512, 512, Rgba([255, 255, 255, 255])),
        solid(512, 512, Rgba([0, 0, 0, 1])),
        DynamicImage::ImageRgba8(ImageBuffer::from_fn(512, 512, |x, y| {
            Rgba([(x % 256) as u8, (y % 256) as u8, 0, ((x + y) % 256) as u8])
        })),
    ];

    for source in &sources {
        let report = validate_report(&apply_circular_mask(source));
        assert_ne!(report.result, ValidationResult::OutsideCircle);
        assert_ne!(report.result, ValidationResult::InvalidSize);
    }
}

#[test]
fn test_boundary_pixel_counts_as_inside() {
    let mut buf = ImageBuffer::from_pixel(512, 512, Rgba([0, 0, 0, 0]));
    buf.put_pixel(0, 256, Rgba([255, 0, 0, 255]));
    let report = validate_report(&DynamicImage::ImageRgba8(buf));
    // Containment passes, the mostly black image is not happy
    assert_eq!(report.result, ValidationResult::NotHappy);
}

#[test]
fn test_pixel_past_boundary_fails_containment() {
    let mut buf = ImageBuffer::from_pixel(512, 512, Rgba([0, 0, 0, 0]));
    // sqrt(256^2 + 1^2) ~ 256.002 from the center
    buf.put_pixel(0, 255, Rgba([255, 0, 0, 255]));
    assert_eq!(
        validate(&DynamicImage::ImageRgba8(buf)),
        ValidationResult::OutsideCircle
    );
}
