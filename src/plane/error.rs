// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/nibbleplane

//! The codec's single error kind.

use std::fmt;

/// The payload image exceeds the carrier in at least one axis.
///
/// Raised by [`merge`](crate::plane::codec::merge) before any output is
/// allocated. Never recovered internally — the caller decides how to report
/// it. `unmerge` has no failure mode at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DimensionError {
    /// Carrier size as (width, height).
    pub carrier: (u32, u32),
    /// Payload size as (width, height).
    pub payload: (u32, u32),
}

impl fmt::Display for DimensionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "payload {}x{} must not exceed carrier {}x{} in either axis",
            self.payload.0, self.payload.1, self.carrier.0, self.carrier.1
        )
    }
}

impl std::error::Error for DimensionError {}
