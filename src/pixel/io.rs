// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/nibbleplane

//! File adapter: [`PixelBuffer`] ⇄ image files via the `image` crate.
//!
//! Any input format `image` can decode is accepted; pixels are converted to
//! 8-bit RGB on load (alpha is dropped, higher bit depths are narrowed).
//! The output format is chosen by the target path's extension. The codec
//! itself never sees a file — these two functions are the only place the
//! crate touches the filesystem.

use std::path::Path;

use crate::pixel::error::PixelError;
use crate::pixel::{PixelBuffer, Rgb};

/// Decode the image at `path` into an 8-bit RGB [`PixelBuffer`].
///
/// # Errors
/// [`PixelError::Read`] if the file cannot be opened or decoded.
pub fn read_pixels(path: impl AsRef<Path>) -> Result<PixelBuffer, PixelError> {
    let path = path.as_ref();
    let rgb = image::open(path)
        .map_err(|source| PixelError::Read { path: path.to_path_buf(), source })?
        .to_rgb8();
    let (width, height) = rgb.dimensions();
    let data: Vec<Rgb> = rgb
        .pixels()
        .map(|p| Rgb::new(p.0[0], p.0[1], p.0[2]))
        .collect();
    Ok(PixelBuffer::from_raw(width, height, data).expect("to_rgb8 yields width*height pixels"))
}

/// Encode `buffer` to `path`; the format follows the file extension.
///
/// # Errors
/// - [`PixelError::EmptyImage`] if either dimension of `buffer` is 0.
/// - [`PixelError::Write`] if encoding or writing fails.
pub fn write_pixels(buffer: &PixelBuffer, path: impl AsRef<Path>) -> Result<(), PixelError> {
    let path = path.as_ref();
    if buffer.is_empty() {
        return Err(PixelError::EmptyImage { path: path.to_path_buf() });
    }
    let out = image::RgbImage::from_fn(buffer.width(), buffer.height(), |x, y| {
        let px = buffer.pixel(x, y);
        image::Rgb([px.r, px.g, px.b])
    });
    out.save(path)
        .map_err(|source| PixelError::Write { path: path.to_path_buf(), source })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn png_disk_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("grad.png");

        let original = PixelBuffer::from_fn(7, 5, |x, y| {
            Rgb::new((x * 30) as u8, (y * 50) as u8, 128)
        });
        write_pixels(&original, &path).unwrap();

        let loaded = read_pixels(&path).unwrap();
        assert_eq!(loaded, original);
    }

    #[test]
    fn empty_buffer_is_refused() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.png");

        let err = write_pixels(&PixelBuffer::new(0, 0), &path).unwrap_err();
        assert!(matches!(err, PixelError::EmptyImage { .. }));
        assert!(!path.exists());
    }

    #[test]
    fn missing_file_reports_path() {
        let err = read_pixels("/nonexistent/no-such-image.png").unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("no-such-image.png"), "message was: {msg}");
    }
}
