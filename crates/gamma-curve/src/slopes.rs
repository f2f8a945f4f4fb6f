//! Slope estimation for monotone curve fitting.
//!
//! Secant slopes are averaged with length weighting to produce a smooth
//! slope field, then a limiting pass clamps every slope into the band that
//! keeps the fitted spline from overshooting its knots.

/// A float-space curve point used during fitting.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Knot {
    /// X coordinate (input level).
    pub x: f32,
    /// Y coordinate (output level).
    pub y: f32,
}

impl Knot {
    /// Create a new knot.
    #[inline]
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Estimate monotonicity-safe slopes at every knot.
///
/// A knot where the curve is flat or changes direction gets slope zero, and
/// no slope magnitude may exceed three times the gentler adjacent secant.
/// For non-decreasing knot data the resulting spline cannot overshoot.
///
/// Knot x values must be strictly increasing.
pub fn monotone_slopes(knots: &[Knot]) -> Vec<f32> {
    let mut slopes = estimate_slopes(knots);
    limit_slopes(knots, &mut slopes);
    slopes
}

/// Weighted-average slope estimation.
///
/// Interior slopes average the two adjacent secant slopes weighted by
/// segment length; runs of equal-slope segments are merged first so a long
/// straight stretch dominates its junctions. End slopes extrapolate from
/// the first interior slope.
fn estimate_slopes(knots: &[Knot]) -> Vec<f32> {
    let n = knots.len();
    if n < 2 {
        return vec![];
    }

    let mut secant_slope = Vec::with_capacity(n - 1);
    let mut secant_len = Vec::with_capacity(n - 1);

    for i in 0..n - 1 {
        let del_x = knots[i + 1].x - knots[i].x;
        let del_y = knots[i + 1].y - knots[i].y;
        secant_slope.push(del_y / del_x);
        secant_len.push((del_x * del_x + del_y * del_y).sqrt());
    }

    // Two points: constant slope
    if n == 2 {
        return vec![secant_slope[0], secant_slope[0]];
    }

    // Merge segments with equal slopes
    let mut i = 0;
    while i < n - 1 {
        let mut j = i;
        let mut dl = secant_len[i];
        while j < n - 2 && (secant_slope[j + 1] - secant_slope[j]).abs() < 1e-6 {
            dl += secant_len[j + 1];
            j += 1;
        }
        for k in i..=j {
            secant_len[k] = dl;
        }
        if j >= n - 3 {
            break;
        }
        i = j + 1;
    }

    // Interior slopes from length-weighted averages
    let mut slopes = Vec::with_capacity(n);
    slopes.push(0.0); // placeholder for first slope

    for k in 1..n - 1 {
        let s = (secant_len[k] * secant_slope[k] + secant_len[k - 1] * secant_slope[k - 1])
            / (secant_len[k] + secant_len[k - 1]);
        slopes.push(s);
    }

    // End slopes: extrapolate from interior
    let last_slope = 0.5 * (3.0 * secant_slope[n - 2] - slopes[n - 2]);
    slopes.push(last_slope);
    slopes[0] = 0.5 * (3.0 * secant_slope[0] - slopes[1]);

    slopes
}

/// Clamp estimated slopes so the spline stays inside its knot values.
///
/// The Fritsch-Carlson bound: a slope must share the sign of both adjacent
/// secants and its magnitude may not exceed 3x the gentler of them. A knot
/// between a flat segment and a rising one, or between opposing directions,
/// gets slope zero.
fn limit_slopes(knots: &[Knot], slopes: &mut [f32]) {
    let n = knots.len();
    if n < 2 {
        return;
    }

    let secants: Vec<f32> = knots
        .windows(2)
        .map(|w| (w[1].y - w[0].y) / (w[1].x - w[0].x))
        .collect();

    for (i, slope) in slopes.iter_mut().enumerate() {
        let left = if i > 0 { secants[i - 1] } else { secants[0] };
        let right = if i < n - 1 { secants[i] } else { secants[n - 2] };

        if left * right <= 0.0 {
            *slope = 0.0;
        } else {
            let cap = 3.0 * left.abs().min(right.abs());
            *slope = if left > 0.0 {
                slope.clamp(0.0, cap)
            } else {
                slope.clamp(-cap, 0.0)
            };
        }
    }
}
