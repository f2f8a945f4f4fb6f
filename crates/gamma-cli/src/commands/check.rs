//! Curve file validation command.
//!
//! Reloads a curve file and runs the document-level checks against a
//! device profile. Reports the first violation and exits nonzero, or
//! prints a confirmation when the file is clean.

use crate::CheckArgs;
use anyhow::{Context, Result};
use gamma_curve::validate_document;
#[allow(unused_imports)]
use tracing::{debug, info};

pub fn run(args: CheckArgs, verbose: bool) -> Result<()> {
    let doc = super::load_document(&args.input)?;

    // Without an explicit profile, check against the geometry the file
    // itself declares. That still exercises monotonicity and range.
    let profile = match args.profile {
        Some(arg) => arg.to_profile(),
        None => super::profile_for(&doc),
    };
    debug!(
        "checking against {} samples per channel, peak {}",
        profile.resolution, profile.peak
    );

    validate_document(&doc, &profile)
        .with_context(|| format!("{} failed validation", args.input.display()))?;

    if verbose {
        println!(
            "  {} channels, {} samples per channel, peak {}",
            doc.channel_count(),
            doc.resolution(),
            doc.peak()
        );
    }
    println!("{}: OK", args.input.display());
    Ok(())
}
