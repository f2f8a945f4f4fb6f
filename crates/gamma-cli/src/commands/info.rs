//! Curve file info command.
//!
//! Displays header fields and per-channel summaries without modifying
//! anything.

use crate::InfoArgs;
use anyhow::Result;
use gamma_fmt::FileKind;
use std::fs;
#[allow(unused_imports)]
use tracing::{debug, info};

pub fn run(args: InfoArgs, verbose: bool) -> Result<()> {
    for path in &args.input {
        let file_size = fs::metadata(path)?.len();
        let kind = FileKind::detect(path)?;
        let doc = super::load_document(path)?;

        println!("{}", path.display());
        if let FileKind::Curve { version } = kind {
            println!("  Version:    {version}");
        }
        println!("  Resolution: {}", doc.resolution());
        println!("  Channels:   {}", doc.channel_count());
        println!("  Peak:       {}", doc.peak());
        println!("  File size:  {file_size} B");

        for (idx, curve) in doc.channels().iter().enumerate() {
            let state = if curve.is_non_decreasing() {
                "monotone"
            } else {
                "not monotone"
            };
            println!(
                "    {:<6} {} -> {} ({})",
                super::channel_label(&doc, idx),
                curve.first().unwrap_or(0),
                curve.last().unwrap_or(0),
                state
            );
        }

        if verbose {
            println!("  Format:     {kind:?}");
        }

        if args.input.len() > 1 {
            println!();
        }
    }

    Ok(())
}
