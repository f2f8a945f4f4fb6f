//! Monotone quadratic spline fitting.
//!
//! Each knot interval is covered by one quadratic arc, or by two arcs
//! joined at an interior break when the end slopes cannot be met by a
//! single arc. An adjustment pass scales slopes down wherever the fit
//! would otherwise dip against the data direction, then refits.

use crate::slopes::{monotone_slopes, Knot};

/// Precomputed spline data for efficient curve evaluation.
#[derive(Debug, Clone, Default)]
pub struct SplineData {
    /// X-coordinates of segment boundaries (knots).
    pub knots: Vec<f32>,
    /// Quadratic coefficient A for each segment.
    pub coefs_a: Vec<f32>,
    /// Linear coefficient B for each segment.
    pub coefs_b: Vec<f32>,
    /// Constant coefficient C for each segment.
    pub coefs_c: Vec<f32>,
}

impl SplineData {
    /// Create empty spline data.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of segments in the spline.
    #[inline]
    pub fn num_segments(&self) -> usize {
        self.coefs_a.len()
    }

    /// Check if spline is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.knots.is_empty()
    }
}

/// Fit a monotone quadratic spline through the knots.
///
/// Knot x values must be strictly increasing. With fewer than two knots the
/// result is empty.
pub fn fit_monotone_spline(knots: &[Knot]) -> SplineData {
    let n = knots.len();
    if n < 2 {
        return SplineData::new();
    }

    let slopes = monotone_slopes(knots);

    // First pass: fit spline
    let (xs, coefs_a, coefs_b, coefs_c, mut slopes) = fit_segments(knots, slopes);

    // Scale slopes down where the fit dips, then refit
    let adjustment_done = adjust_slopes(knots, &mut slopes, &xs);

    let (xs, coefs_a, coefs_b, coefs_c, _) = if adjustment_done {
        fit_segments(knots, slopes)
    } else {
        (xs, coefs_a, coefs_b, coefs_c, slopes)
    };

    SplineData {
        knots: xs,
        coefs_a,
        coefs_b,
        coefs_c,
    }
}

/// Fit one or two quadratic arcs per knot interval.
fn fit_segments(
    knots: &[Knot],
    slopes: Vec<f32>,
) -> (Vec<f32>, Vec<f32>, Vec<f32>, Vec<f32>, Vec<f32>) {
    let n = knots.len();

    let mut xs = Vec::with_capacity(n * 2);
    let mut coefs_a = Vec::with_capacity(n * 2);
    let mut coefs_b = Vec::with_capacity(n * 2);
    let mut coefs_c = Vec::with_capacity(n * 2);

    xs.push(knots[0].x);

    for i in 0..n - 1 {
        let xi = knots[i].x;
        let xi_pl1 = knots[i + 1].x;
        let yi = knots[i].y;
        let yi_pl1 = knots[i + 1].y;
        let del_x = xi_pl1 - xi;
        let del_y = yi_pl1 - yi;
        let secant_slope = del_y / del_x;

        // Check if a single quadratic is sufficient
        if (slopes[i] + slopes[i + 1] - 2.0 * secant_slope).abs() < 1e-6 {
            // Single segment: y = A*(x-x0)^2 + B*(x-x0) + C
            coefs_c.push(yi);
            coefs_b.push(slopes[i]);
            coefs_a.push(0.5 * (slopes[i + 1] - slopes[i]) / del_x);
        } else {
            // Split into two arcs at ksi
            let ksi = split_point(knots, &slopes, i);

            let s_bar = (2.0 * secant_slope - slopes[i + 1])
                + (slopes[i + 1] - slopes[i]) * (ksi - xi) / del_x;
            let eta = (s_bar - slopes[i]) / (ksi - xi);

            coefs_c.push(yi);
            coefs_b.push(slopes[i]);
            coefs_a.push(0.5 * eta);

            // Second arc
            let t = ksi - xi;
            let y_at_ksi = yi + slopes[i] * t + 0.5 * eta * t * t;
            coefs_c.push(y_at_ksi);
            coefs_b.push(s_bar);
            coefs_a.push(0.5 * (slopes[i + 1] - s_bar) / (xi_pl1 - ksi));

            xs.push(ksi);
        }

        xs.push(xi_pl1);
    }

    (xs, coefs_a, coefs_b, coefs_c, slopes)
}

/// Pick the break point for an interval needing two arcs.
fn split_point(knots: &[Knot], slopes: &[f32], i: usize) -> f32 {
    let xi = knots[i].x;
    let xi_pl1 = knots[i + 1].x;
    let yi = knots[i].y;
    let yi_pl1 = knots[i + 1].y;
    let del_x = xi_pl1 - xi;
    let secant = (yi_pl1 - yi) / del_x;

    let aa = slopes[i] - secant;
    let bb = slopes[i + 1] - secant;

    if aa * bb >= 0.0 {
        // Same sign or zero: use midpoint
        (xi + xi_pl1) * 0.5
    } else if aa.abs() > bb.abs() {
        xi_pl1 + aa * del_x / (slopes[i + 1] - slopes[i])
    } else {
        xi + bb * del_x / (slopes[i + 1] - slopes[i])
    }
}

/// Scale slopes down wherever the mid-arc slope would oppose the data.
fn adjust_slopes(knots: &[Knot], slopes: &mut [f32], xs: &[f32]) -> bool {
    let mut adjustment_done = false;
    let n = xs.len();
    let mut i = 0;
    let mut j = 0;

    while j < n {
        if knots[i].x != xs[j] {
            // A break point: check for a dipping mid-arc slope
            let ksi = xs[j];
            let xi = knots[i].x;
            let xi_pl1 = knots[i + 1].x;
            let yi = knots[i].y;
            let yi_pl1 = knots[i + 1].y;

            let s_bar = (2.0 * (yi_pl1 - yi) - (ksi - xi) * slopes[i]
                - (xi_pl1 - ksi) * slopes[i + 1])
                / (xi_pl1 - xi);
            let secant = (yi_pl1 - yi) / (xi_pl1 - xi);

            // A negative mid-arc slope on a rising interval is a dip; on a
            // falling interval it is the data. Rising intervals with a dip
            // always have a positive slope blend, so the division is safe.
            if s_bar < 0.0 && secant > 0.0 {
                adjustment_done = true;
                let blend_slope = ((ksi - xi) * slopes[i] + (xi_pl1 - ksi) * slopes[i + 1])
                    / (xi_pl1 - xi);
                let aim_slope = (0.01 * 0.5 * (slopes[i] + slopes[i + 1])).min(secant);
                let adjust = (2.0 * secant - aim_slope) / blend_slope;
                slopes[i] *= adjust;
                slopes[i + 1] *= adjust;
            }
            i += 1;
        }
        j += 1;
    }

    adjustment_done
}
