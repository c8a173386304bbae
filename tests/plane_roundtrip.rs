// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/nibbleplane

//! Round-trip integration tests for the public merge/unmerge API.

use nibbleplane::{merge, unmerge, DimensionError, PixelBuffer, Rgb};

/// A deterministic "photo-like" buffer with varied channel values.
fn test_image(width: u32, height: u32, seed: u8) -> PixelBuffer {
    PixelBuffer::from_fn(width, height, |x, y| {
        let base = x.wrapping_mul(7).wrapping_add(y.wrapping_mul(13)) as u8;
        Rgb::new(
            base.wrapping_add(seed),
            base.wrapping_mul(3).wrapping_add(seed),
            base.wrapping_mul(5) ^ seed,
        )
    })
}

#[test]
fn roundtrip_recovers_high_nibbles_everywhere() {
    let carrier = test_image(32, 24, 11);
    let payload = test_image(32, 24, 200);

    let composite = merge(&carrier, &payload).unwrap();
    let recovered = unmerge(&composite);

    // The payload here has non-black content along its far edges, so the
    // crop keeps the full extent and every pixel's high nibble survives.
    assert_eq!(recovered.width(), 32);
    assert_eq!(recovered.height(), 24);
    for y in 0..24 {
        for x in 0..32 {
            let want = payload.pixel(x, y);
            let got = recovered.pixel(x, y);
            assert_eq!(got.r, want.r & 0xF0, "red at ({x}, {y})");
            assert_eq!(got.g, want.g & 0xF0, "green at ({x}, {y})");
            assert_eq!(got.b, want.b & 0xF0, "blue at ({x}, {y})");
        }
    }
}

#[test]
fn composite_stays_visually_close_to_carrier() {
    let carrier = test_image(16, 16, 42);
    let payload = test_image(16, 16, 99);
    let composite = merge(&carrier, &payload).unwrap();

    for y in 0..16 {
        for x in 0..16 {
            let c = carrier.pixel(x, y);
            let m = composite.pixel(x, y);
            // Only the low nibble may differ: at most 15 per channel.
            assert!(c.r.abs_diff(m.r) < 16);
            assert!(c.g.abs_diff(m.g) < 16);
            assert!(c.b.abs_diff(m.b) < 16);
        }
    }
}

#[test]
fn smaller_payload_is_cropped_back_out() {
    let carrier = test_image(40, 40, 7);
    // Solid payload so no edge quantizes to black.
    let payload = PixelBuffer::from_fn(13, 21, |_, _| Rgb::new(160, 80, 240));

    let recovered = unmerge(&merge(&carrier, &payload).unwrap());
    assert_eq!(recovered.width(), 13);
    assert_eq!(recovered.height(), 21);
    for y in 0..21 {
        for x in 0..13 {
            assert_eq!(recovered.pixel(x, y), Rgb::new(160, 80, 240));
        }
    }
}

#[test]
fn oversized_payload_reports_dimensions() {
    let carrier = test_image(10, 10, 1);
    let payload = test_image(11, 4, 2);

    let err: DimensionError = merge(&carrier, &payload).unwrap_err();
    assert_eq!(err.carrier, (10, 10));
    assert_eq!(err.payload, (11, 4));
}

#[test]
fn merge_unmerge_twice_is_stable() {
    // After one lossy round trip the payload is nibble-aligned; a second
    // trip through the same carrier changes nothing.
    let carrier = test_image(20, 20, 3);
    let payload = test_image(20, 20, 77);

    let once = unmerge(&merge(&carrier, &payload).unwrap());
    let twice = unmerge(&merge(&carrier, &once).unwrap());
    assert_eq!(once, twice);
}
