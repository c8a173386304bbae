// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/nibbleplane

//! Owned RGB pixel buffers.
//!
//! [`PixelBuffer`] is the only data structure the codec operates on: a
//! width × height grid of 8-bit [`Rgb`] triples, stored row-major. Buffers
//! are always owned by exactly one caller — the codec allocates fresh
//! outputs and never retains a reference past a call.

pub mod error;
pub mod io;

/// One pixel: an ordered (r, g, b) triple of 8-bit channel values.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Pure black, `(0, 0, 0)`. Also the implicit padding value for
    /// positions outside a payload's extent.
    pub const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Rgb { r, g, b }
    }
}

/// A 2D grid of [`Rgb`] pixels, indexed by `(x, y)` with
/// `0 <= x < width`, `0 <= y < height`. Row-major storage:
/// `data[y * width + x]`.
///
/// Zero-sized buffers (either dimension 0) are valid; every accessor and
/// transform is defined on them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    data: Vec<Rgb>,
}

impl PixelBuffer {
    /// Allocate a `width` × `height` buffer filled with black.
    pub fn new(width: u32, height: u32) -> Self {
        let len = width as usize * height as usize;
        PixelBuffer {
            width,
            height,
            data: vec![Rgb::BLACK; len],
        }
    }

    /// Build a buffer from row-major pixel data.
    ///
    /// Returns `None` if `data.len() != width * height`.
    pub fn from_raw(width: u32, height: u32, data: Vec<Rgb>) -> Option<Self> {
        if data.len() != width as usize * height as usize {
            return None;
        }
        Some(PixelBuffer { width, height, data })
    }

    /// Build a buffer by evaluating `f(x, y)` at every position.
    pub fn from_fn(width: u32, height: u32, mut f: impl FnMut(u32, u32) -> Rgb) -> Self {
        let mut data = Vec::with_capacity(width as usize * height as usize);
        for y in 0..height {
            for x in 0..width {
                data.push(f(x, y));
            }
        }
        PixelBuffer { width, height, data }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// True if either dimension is 0 (the buffer holds no pixels).
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Pixel at `(x, y)`.
    ///
    /// # Panics
    /// If `(x, y)` is out of bounds.
    pub fn pixel(&self, x: u32, y: u32) -> Rgb {
        assert!(x < self.width && y < self.height, "pixel ({x}, {y}) out of bounds");
        self.data[y as usize * self.width as usize + x as usize]
    }

    /// Total accessor: pixel at `(x, y)` if in bounds, [`Rgb::BLACK`]
    /// otherwise. This is the implicit zero-padding the merge uses for
    /// positions outside the payload's extent.
    pub fn pixel_or_black(&self, x: u32, y: u32) -> Rgb {
        if x < self.width && y < self.height {
            self.data[y as usize * self.width as usize + x as usize]
        } else {
            Rgb::BLACK
        }
    }

    /// Overwrite the pixel at `(x, y)`.
    ///
    /// # Panics
    /// If `(x, y)` is out of bounds.
    pub fn set_pixel(&mut self, x: u32, y: u32, px: Rgb) {
        assert!(x < self.width && y < self.height, "pixel ({x}, {y}) out of bounds");
        self.data[y as usize * self.width as usize + x as usize] = px;
    }

    /// Row-major view of all pixels.
    pub fn pixels(&self) -> &[Rgb] {
        &self.data
    }

    /// Mutable row-major view of all pixels.
    pub fn pixels_mut(&mut self) -> &mut [Rgb] {
        &mut self.data
    }

    /// A fresh buffer holding the `(0, 0)`–`(width, height)` corner of this
    /// one.
    ///
    /// # Panics
    /// If the requested extent exceeds this buffer in either axis.
    pub fn cropped(&self, width: u32, height: u32) -> PixelBuffer {
        assert!(
            width <= self.width && height <= self.height,
            "crop {width}x{height} exceeds buffer {}x{}",
            self.width,
            self.height
        );
        let mut data = Vec::with_capacity(width as usize * height as usize);
        for y in 0..height {
            let start = y as usize * self.width as usize;
            data.extend_from_slice(&self.data[start..start + width as usize]);
        }
        PixelBuffer { width, height, data }
    }
}
