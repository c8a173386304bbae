// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/nibbleplane

//! Merge/unmerge transforms.
//!
//! A composite channel is `(carrier & 0xF0) | (payload >> 4)`: the
//! carrier's high nibble survives untouched, the payload's high nibble
//! rides in the low bits. Unmerge shifts the low nibble back up
//! (`channel << 4`) and crops to the inferred payload extent.
//!
//! The extent scan walks x-outer/y-inner — the same order the merge
//! iterates — and the *last* non-black position in that order sets the
//! crop, overwriting any earlier candidate. That is the historical
//! behavior of this scheme and callers depend on it; do not replace it
//! with a max-reduction over both axes.

use crate::pixel::{PixelBuffer, Rgb};
use crate::plane::error::DimensionError;
use crate::plane::{validate_dimensions, HIGH_NIBBLE, PAYLOAD_BITS};

/// Splice two pixels: carrier high nibbles, payload high nibbles packed
/// into the low bits. The payload loses its low 4 bits per channel here.
#[inline]
fn merge_rgb(carrier: Rgb, payload: Rgb) -> Rgb {
    Rgb {
        r: (carrier.r & HIGH_NIBBLE) | (payload.r >> PAYLOAD_BITS),
        g: (carrier.g & HIGH_NIBBLE) | (payload.g >> PAYLOAD_BITS),
        b: (carrier.b & HIGH_NIBBLE) | (payload.b >> PAYLOAD_BITS),
    }
}

/// Lift a composite pixel's low nibbles back into high position. The `u8`
/// shift discards the carrier's bits.
#[inline]
fn unmerge_rgb(composite: Rgb) -> Rgb {
    Rgb {
        r: composite.r << PAYLOAD_BITS,
        g: composite.g << PAYLOAD_BITS,
        b: composite.b << PAYLOAD_BITS,
    }
}

/// Hide `payload` inside `carrier`.
///
/// Returns a freshly allocated composite with the carrier's exact
/// dimensions; neither input is mutated or retained. Positions outside the
/// payload's extent are packed as black, so the composite's low nibbles are
/// zero there.
///
/// # Errors
/// [`DimensionError`] if the payload exceeds the carrier in either axis.
/// No output is allocated in that case.
pub fn merge(carrier: &PixelBuffer, payload: &PixelBuffer) -> Result<PixelBuffer, DimensionError> {
    validate_dimensions(
        (carrier.width(), carrier.height()),
        (payload.width(), payload.height()),
    )?;

    let mut composite = PixelBuffer::new(carrier.width(), carrier.height());
    fill_composite(&mut composite, carrier, payload);
    Ok(composite)
}

#[cfg(not(feature = "parallel"))]
fn fill_composite(composite: &mut PixelBuffer, carrier: &PixelBuffer, payload: &PixelBuffer) {
    for y in 0..carrier.height() {
        for x in 0..carrier.width() {
            let spliced = merge_rgb(carrier.pixel(x, y), payload.pixel_or_black(x, y));
            composite.set_pixel(x, y, spliced);
        }
    }
}

/// Parallel fill: every output pixel depends only on its own coordinate, so
/// rows can be processed in any order.
#[cfg(feature = "parallel")]
fn fill_composite(composite: &mut PixelBuffer, carrier: &PixelBuffer, payload: &PixelBuffer) {
    use rayon::prelude::*;

    let width = carrier.width();
    if width == 0 {
        return;
    }
    composite
        .pixels_mut()
        .par_chunks_mut(width as usize)
        .enumerate()
        .for_each(|(y, row)| {
            let y = y as u32;
            for (x, out) in row.iter_mut().enumerate() {
                let x = x as u32;
                *out = merge_rgb(carrier.pixel(x, y), payload.pixel_or_black(x, y));
            }
        });
}

/// Recover the hidden image from a composite.
///
/// Shifts every channel's low nibble into high position, then crops to the
/// inferred payload extent. Never fails: a composite whose every recovered
/// pixel is black yields a 0×0 buffer, which callers must treat as a valid
/// degenerate result.
pub fn unmerge(composite: &PixelBuffer) -> PixelBuffer {
    let recovered = PixelBuffer::from_fn(composite.width(), composite.height(), |x, y| {
        unmerge_rgb(composite.pixel(x, y))
    });
    let (width, height) = inferred_extent(&recovered);
    recovered.cropped(width, height)
}

/// Scan for the payload's extent: x-outer/y-inner, every non-black pixel
/// overwrites the candidate with `(x + 1, y + 1)`, last one wins.
///
/// `(0, 0)` when no pixel is non-black. Kept sequential even under the
/// `parallel` feature so the order-dependent result never changes.
fn inferred_extent(recovered: &PixelBuffer) -> (u32, u32) {
    let mut extent = (0, 0);
    for x in 0..recovered.width() {
        for y in 0..recovered.height() {
            if recovered.pixel(x, y) != Rgb::BLACK {
                extent = (x + 1, y + 1);
            }
        }
    }
    extent
}
