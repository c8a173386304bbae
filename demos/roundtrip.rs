// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/nibbleplane

//! Example: merge a synthetic payload into a synthetic carrier and recover
//! it again, printing a few pixels at each stage.

use nibbleplane::{merge, unmerge, PixelBuffer, Rgb};

fn main() {
    // Diagonal gradient carrier, 16x16.
    let carrier = PixelBuffer::from_fn(16, 16, |x, y| {
        Rgb::new((x * 16) as u8, (y * 16) as u8, ((x + y) * 8) as u8)
    });

    // 8x8 payload with nibble-aligned channels so recovery is exact.
    let payload = PixelBuffer::from_fn(8, 8, |x, y| {
        Rgb::new((x * 32) as u8, (y * 32) as u8, 128)
    });

    let composite = merge(&carrier, &payload).expect("payload fits the carrier");
    let recovered = unmerge(&composite);

    println!(
        "carrier {}x{}, payload {}x{}, recovered {}x{}",
        carrier.width(),
        carrier.height(),
        payload.width(),
        payload.height(),
        recovered.width(),
        recovered.height()
    );

    for (x, y) in [(0u32, 0u32), (4, 4), (7, 7)] {
        println!(
            "({x},{y}) payload {:?} -> composite {:?} -> recovered {:?}",
            payload.pixel(x, y),
            composite.pixel(x, y),
            recovered.pixel(x, y)
        );
    }
}
