// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/nibbleplane

//! # nibbleplane
//!
//! Bit-plane image steganography. Hides one raster image (the *payload*)
//! inside another (the *carrier*) by splicing their color-channel nibbles:
//! the composite keeps the carrier's high 4 bits per channel and stores the
//! payload's high 4 bits in the carrier's low 4 bits. The payload is
//! quantized to 16 levels per channel; the loss is intentional and exact
//! (no rounding, no dithering).
//!
//! The codec (`plane` module) is a pair of pure, stateless transforms over
//! abstract pixel buffers; it knows nothing about file formats. The `pixel`
//! module provides the buffer type and a thin adapter over the `image`
//! crate for reading and writing actual files.
//!
//! # Quick start
//!
//! ```rust,ignore
//! use nibbleplane::{merge, unmerge, read_pixels, write_pixels};
//!
//! let carrier = read_pixels("cover.png")?;
//! let payload = read_pixels("secret.png")?;
//! let composite = merge(&carrier, &payload)?;
//! write_pixels(&composite, "composite.png")?;
//!
//! let recovered = unmerge(&composite);
//! write_pixels(&recovered, "recovered.png")?;
//! ```
//!
//! Not a secure channel: the low-nibble plane is trivially extractable by
//! anyone who suspects it is there. No resistance to steganalysis or to
//! lossy recompression is attempted.

pub mod pixel;
pub mod plane;

pub use pixel::error::PixelError;
pub use pixel::io::{read_pixels, write_pixels};
pub use pixel::{PixelBuffer, Rgb};
pub use plane::codec::{merge, unmerge};
pub use plane::error::DimensionError;
pub use plane::validate_dimensions;
