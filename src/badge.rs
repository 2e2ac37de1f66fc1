//! Turning arbitrary images into badges: resize to 512x512, mask the circle,
//! save as PNG next to the source.

use crate::mask::apply_circular_mask;
use crate::validator::TARGET_SIZE;
use anyhow::{Context, Result};
use image::{imageops::FilterType, DynamicImage};
use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};

pub fn load_image(path: &Path) -> Result<DynamicImage> {
    image::open(path)
        .with_context(|| format!("Failed to load image: {}", path.display()))
}

/// Resize to the badge resolution and clear everything outside the circle.
pub fn normalize(source: &DynamicImage) -> DynamicImage {
    let resized = source.resize_exact(TARGET_SIZE, TARGET_SIZE, FilterType::Lanczos3);
    apply_circular_mask(&resized)
}

/// Where the normalized badge for `input` is written: `new_<stem>.png` in the
/// same directory.
///
/// The stem is the file name up to the first `.<format>`. A file name that
/// doesn't contain it is kept whole. Without a format, the file extension is
/// used.
pub fn output_path(input: &Path, format: Option<&str>) -> Result<PathBuf> {
    let file_name = match input.file_name() {
        Some(name) => name,
        None => anyhow::bail!("Input path has no file name: {}", input.display()),
    };

    let suffix = match format {
        Some(format) => Some(dotted(format.as_bytes())),
        None => input.extension().map(|ext| dotted(ext.as_encoded_bytes())),
    };

    let name_bytes = file_name.as_encoded_bytes();
    let stem = match suffix.and_then(|suffix| find_bytes(name_bytes, &suffix)) {
        // SAFETY: the cut lands right before the ASCII '.' that starts the
        // suffix, a valid split point for the platform encoding.
        Some(idx) => unsafe { OsStr::from_encoded_bytes_unchecked(&name_bytes[..idx]) },
        None => file_name,
    };

    let mut output_name = OsString::from("new_");
    output_name.push(stem);
    output_name.push(".png");

    Ok(input.with_file_name(output_name))
}

fn dotted(format: &[u8]) -> Vec<u8> {
    let mut suffix = Vec::with_capacity(format.len() + 1);
    suffix.push(b'.');
    suffix.extend_from_slice(format);
    suffix
}

fn find_bytes(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    haystack
        .windows(needle.len())
        .position(|window| window == needle)
}

/// Load `input`, normalize it into a badge and write it as PNG.
/// Returns the path of the written file.
pub fn convert_to_badge(input: &Path, format: Option<&str>) -> Result<PathBuf> {
    let source = load_image(input)?;
    log::info!(
        "Loaded {} ({}x{})",
        input.display(),
        source.width(),
        source.height()
    );

    let badge = normalize(&source);
    let output = output_path(input, format)?;
    save_png(&badge, &output)?;

    Ok(output)
}

/// Encode as PNG regardless of the path's extension.
pub fn save_png(image: &DynamicImage, path: &Path) -> Result<()> {
    let mut file = std::fs::File::create(path).context("Failed to create PNG file")?;
    image
        .write_to(&mut file, image::ImageOutputFormat::Png)
        .context("Failed to write PNG")?;
    Ok(())
}
