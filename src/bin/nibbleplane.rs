// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/nibbleplane

//! Command-line front-end for the bit-plane codec.
//!
//! Two verbs: `merge` hides a payload image inside a carrier and writes the
//! composite; `unmerge` recovers the hidden image from a composite. All
//! file decoding/encoding goes through the `pixel::io` adapter; the codec
//! itself never sees a path.

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use log::info;

use nibbleplane::{merge, read_pixels, unmerge, write_pixels};

#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Hide a payload image inside a carrier image
    Merge {
        /// Image that will host the hidden data
        #[arg(long)]
        carrier: PathBuf,
        /// Image to hide (must not exceed the carrier in either axis)
        #[arg(long)]
        payload: PathBuf,
        /// Where to write the composite
        #[arg(long)]
        output: PathBuf,
    },
    /// Recover the hidden image from a composite
    Unmerge {
        /// Composite image produced by `merge`
        #[arg(long)]
        input: PathBuf,
        /// Where to write the recovered image
        #[arg(long)]
        output: PathBuf,
    },
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Command::Merge { carrier, payload, output } => {
            let carrier_buf = read_pixels(&carrier)
                .with_context(|| format!("loading carrier {}", carrier.display()))?;
            let payload_buf = read_pixels(&payload)
                .with_context(|| format!("loading payload {}", payload.display()))?;
            info!(
                "merging {}x{} payload into {}x{} carrier",
                payload_buf.width(),
                payload_buf.height(),
                carrier_buf.width(),
                carrier_buf.height()
            );

            let composite = merge(&carrier_buf, &payload_buf)?;
            write_pixels(&composite, &output)
                .with_context(|| format!("writing composite {}", output.display()))?;
            info!("composite written to {}", output.display());
        }
        Command::Unmerge { input, output } => {
            let composite = read_pixels(&input)
                .with_context(|| format!("loading composite {}", input.display()))?;
            let recovered = unmerge(&composite);
            if recovered.is_empty() {
                bail!(
                    "{} contains no recoverable image (every hidden pixel is black)",
                    input.display()
                );
            }
            info!(
                "recovered {}x{} image from {}x{} composite",
                recovered.width(),
                recovered.height(),
                composite.width(),
                composite.height()
            );
            write_pixels(&recovered, &output)
                .with_context(|| format!("writing recovered image {}", output.display()))?;
            info!("recovered image written to {}", output.display());
        }
    }
    Ok(())
}
