//! Badge validation
//!
//! A badge is valid when it is exactly 512x512, all of its non-transparent
//! pixels sit within the inscribed circle, and its average color is "happy".
//! Checks run in that order and stop at the first failure.

use crate::geometry::CircleGeometry;
use crate::report::ValidationReport;
use image::DynamicImage;
use serde::Serialize;
use std::fmt;

/// Width and height every badge must have.
pub const TARGET_SIZE: u32 = 512;

/// Lower bound (exclusive) for the sum of the mean RGB channels.
const HAPPY_BRIGHTNESS: f64 = 300.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationResult {
    Valid,
    InvalidSize,
    OutsideCircle,
    NotHappy,
}

impl ValidationResult {
    pub fn message(&self) -> &'static str {
        match self {
            ValidationResult::Valid => "The image is valid",
            ValidationResult::InvalidSize => "Invalid size",
            ValidationResult::OutsideCircle => {
                "The only non-transparent pixels are not within a circle"
            }
            ValidationResult::NotHappy => "The colors of the badge do not give a \"happy\" feeling",
        }
    }

    pub fn is_valid(&self) -> bool {
        *self == ValidationResult::Valid
    }
}

impl fmt::Display for ValidationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// The individual checks, in evaluation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Check {
    Size,
    Containment,
    Happiness,
}

impl Check {
    pub const ORDER: [Check; 3] = [Check::Size, Check::Containment, Check::Happiness];

    fn run(self, img: &DynamicImage) -> bool {
        match self {
            Check::Size => is_size_valid(img),
            Check::Containment => is_in_circle(img),
            Check::Happiness => is_happy(img),
        }
    }

    fn failure(self) -> ValidationResult {
        match self {
            Check::Size => ValidationResult::InvalidSize,
            Check::Containment => ValidationResult::OutsideCircle,
            Check::Happiness => ValidationResult::NotHappy,
        }
    }
}

/// Validate a decoded badge image.
pub fn validate(img: &DynamicImage) -> ValidationResult {
    validate_report(img).result
}

/// Validate a decoded badge image, recording which checks were evaluated.
pub fn validate_report(img: &DynamicImage) -> ValidationReport {
    let mut evaluated = Vec::with_capacity(Check::ORDER.len());

    for check in Check::ORDER {
        evaluated.push(check);
        let passed = check.run(img);
        log::debug!("{:?} check {}", check, if passed { "passed" } else { "failed" });

        if !passed {
            return ValidationReport::new(check.failure(), evaluated);
        }
    }

    ValidationReport::new(ValidationResult::Valid, evaluated)
}

pub fn is_size_valid(img: &DynamicImage) -> bool {
    img.width() == TARGET_SIZE && img.height() == TARGET_SIZE
}

/// Check that every pixel outside the badge circle is fully transparent.
///
/// Images without an alpha channel count as fully opaque.
pub fn is_in_circle(img: &DynamicImage) -> bool {
    let circle = CircleGeometry::for_dimensions(TARGET_SIZE, TARGET_SIZE);
    let rgba_img = img.to_rgba8();

    rgba_img
        .enumerate_pixels()
        .all(|(x, y, pixel)| pixel[3] == 0 || !circle.is_outside(x, y))
}

/// Determine whether the average color gives a "happy" feeling: red must
/// dominate green and blue, and the image must be bright enough overall.
///
/// Alpha is discarded, not used as a weight.
pub fn is_happy(img: &DynamicImage) -> bool {
    let rgb_img = img.to_rgb8();
    let pixel_count = rgb_img.width() as u64 * rgb_img.height() as u64;
    if pixel_count == 0 {
        return false;
    }

    let (mut r, mut g, mut b) = (0u64, 0u64, 0u64);
    for pixel in rgb_img.pixels() {
        r += pixel[0] as u64;
        g += pixel[1] as u64;
        b += pixel[2] as u64;
    }

    let r = r as f64 / pixel_count as f64;
    let g = g as f64 / pixel_count as f64;
    let b = b as f64 / pixel_count as f64;
    log::debug!("Mean color: r={:.2} g={:.2} b={:.2}", r, g, b);

    r > g && r > b && r + g + b > HAPPY_BRIGHTNESS
}
