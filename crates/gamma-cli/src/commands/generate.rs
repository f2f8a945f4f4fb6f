//! Curve generation command.
//!
//! Builds a curve model from a preset file, a gamma exponent, or the
//! identity mapping, derives the sampled document, validates it, and
//! writes the `.gcv` file atomically.

use crate::preset::Preset;
use crate::GenerateArgs;
use anyhow::{Context, Result};
use gamma_core::CurveDocument;
use gamma_curve::{power_law_points, validate_document, GammaCurves, DEFAULT_ANCHOR_COUNT};
#[allow(unused_imports)]
use tracing::{debug, info};

pub fn run(args: GenerateArgs, verbose: bool) -> Result<()> {
    let profile = args.profile.to_profile();

    let model = if let Some(path) = &args.preset {
        let preset = Preset::load(path)?;
        preset.into_model(profile)?
    } else if let Some(gamma) = args.gamma {
        debug!("seeding power-law anchors for gamma {gamma}");
        let points = power_law_points(&profile, gamma, DEFAULT_ANCHOR_COUNT)
            .with_context(|| format!("unusable gamma exponent {gamma}"))?;
        GammaCurves::with_points(profile, points)?
    } else {
        GammaCurves::new(profile)
    };

    let doc = model.derive_document().context("curve derivation failed")?;
    validate_document(&doc, model.profile()).context("derived document failed validation")?;

    gamma_fmt::write(&args.output, &doc)
        .with_context(|| format!("Failed to write: {}", args.output.display()))?;

    if verbose {
        println!(
            "Wrote {} ({} channels, {} samples, peak {})",
            args.output.display(),
            doc.channel_count(),
            doc.resolution(),
            doc.peak()
        );
    }

    if args.dump {
        dump_samples(&doc);
    }

    Ok(())
}

/// Prints every sample as `index value`, one channel block at a time.
fn dump_samples(doc: &CurveDocument) {
    for (idx, curve) in doc.channels().iter().enumerate() {
        println!("# channel {}", super::channel_label(doc, idx));
        for (i, v) in curve.values().iter().enumerate() {
            println!("{i} {v}");
        }
    }
}
