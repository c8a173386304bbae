// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/nibbleplane

//! The bit-plane codec: merge a payload image into a carrier, and recover
//! it again.
//!
//! Both operations are pure, stateless, single-step transforms:
//!
//! - [`merge`](codec::merge): per channel, keep the carrier's high nibble
//!   and pack the payload's high nibble into the low nibble. The payload is
//!   quantized to 4 bits per channel; positions outside its extent read as
//!   black.
//! - [`unmerge`](codec::unmerge): shift the low nibble back to the high
//!   position, then crop to the inferred payload extent.
//!
//! The payload's true dimensions are never stored; recovery infers them
//! from the last non-black recovered pixel in scan order. A payload region
//! that legitimately quantizes to pure black is indistinguishable from "no
//! payload here", so the crop is a heuristic, not a guarantee.

pub mod codec;
pub mod error;

pub use error::DimensionError;

/// Mask selecting the visually dominant high nibble of a channel.
pub const HIGH_NIBBLE: u8 = 0xF0;

/// Bits per channel the payload survives with (16 levels).
pub const PAYLOAD_BITS: u32 = 4;

/// Check the merge precondition: the payload must not exceed the carrier in
/// either axis.
///
/// Called at the start of [`merge`](codec::merge); exposed so front-ends can
/// reject mismatched inputs before decoding anything else.
///
/// # Errors
/// [`DimensionError`] naming both sizes if the payload is wider or taller
/// than the carrier.
pub fn validate_dimensions(
    carrier: (u32, u32),
    payload: (u32, u32),
) -> Result<(), DimensionError> {
    if payload.0 > carrier.0 || payload.1 > carrier.1 {
        return Err(DimensionError { carrier, payload });
    }
    Ok(())
}

#[cfg(test)]
mod dimension_tests {
    use super::*;

    #[test]
    fn payload_within_carrier() {
        assert!(validate_dimensions((100, 100), (100, 100)).is_ok());
        assert!(validate_dimensions((100, 100), (1, 100)).is_ok());
        assert!(validate_dimensions((100, 100), (0, 0)).is_ok());
    }

    #[test]
    fn payload_exceeds_one_axis() {
        assert!(validate_dimensions((100, 100), (101, 1)).is_err());
        assert!(validate_dimensions((100, 100), (1, 101)).is_err());
    }

    #[test]
    fn error_carries_both_sizes() {
        let err = validate_dimensions((4, 4), (8, 2)).unwrap_err();
        assert_eq!(err.carrier, (4, 4));
        assert_eq!(err.payload, (8, 2));
        let msg = err.to_string();
        assert!(msg.contains("8x2"), "message was: {msg}");
        assert!(msg.contains("4x4"), "message was: {msg}");
    }

    #[test]
    fn zero_carrier_only_fits_zero_payload() {
        assert!(validate_dimensions((0, 0), (0, 0)).is_ok());
        assert!(validate_dimensions((0, 0), (1, 0)).is_err());
    }
}
