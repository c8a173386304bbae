// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/nibbleplane

//! Error types for the image-file adapter.

use std::fmt;
use std::path::PathBuf;

/// Errors that can occur while decoding or encoding image files.
#[derive(Debug)]
pub enum PixelError {
    /// The file could not be opened or decoded as an image.
    Read {
        path: PathBuf,
        source: image::ImageError,
    },
    /// The buffer could not be encoded or written to the target path.
    Write {
        path: PathBuf,
        source: image::ImageError,
    },
    /// Refused to encode a buffer with a zero dimension — no image format
    /// can represent it.
    EmptyImage { path: PathBuf },
}

impl fmt::Display for PixelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Read { path, source } => {
                write!(f, "cannot read image {}: {source}", path.display())
            }
            Self::Write { path, source } => {
                write!(f, "cannot write image {}: {source}", path.display())
            }
            Self::EmptyImage { path } => {
                write!(f, "cannot write {}: buffer has a zero dimension", path.display())
            }
        }
    }
}

impl std::error::Error for PixelError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Read { source, .. } | Self::Write { source, .. } => Some(source),
            Self::EmptyImage { .. } => None,
        }
    }
}
