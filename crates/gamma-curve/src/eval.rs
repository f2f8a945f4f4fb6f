//! Spline evaluation.

use crate::spline::SplineData;

/// Evaluate a fitted spline at a given x value.
///
/// Outside the knot span the end segments extrapolate linearly. An empty
/// spline evaluates as identity.
pub fn eval_spline(spline: &SplineData, x: f32) -> f32 {
    if spline.is_empty() {
        return x;
    }

    let num_knots = spline.knots.len();
    let num_segs = spline.num_segments();
    let kn_start = spline.knots[0];
    let kn_end = spline.knots[num_knots - 1];

    if x <= kn_start {
        // Extrapolate below curve start
        let b = spline.coefs_b[0];
        let c = spline.coefs_c[0];
        return (x - kn_start) * b + c;
    }

    if x >= kn_end {
        // Extrapolate above curve end
        let a = spline.coefs_a[num_segs - 1];
        let b = spline.coefs_b[num_segs - 1];
        let c = spline.coefs_c[num_segs - 1];
        let kn = spline.knots[num_knots - 2];
        let t = kn_end - kn;
        let slope = 2.0 * a * t + b;
        let offs = (a * t + b) * t + c;
        return (x - kn_end) * slope + offs;
    }

    // Find the segment containing x
    let mut seg = 0;
    for i in 0..num_knots - 1 {
        if x < spline.knots[i + 1] {
            seg = i;
            break;
        }
    }

    // Evaluate quadratic polynomial
    let a = spline.coefs_a[seg];
    let b = spline.coefs_b[seg];
    let c = spline.coefs_c[seg];
    let kn = spline.knots[seg];
    let t = x - kn;

    (a * t + b) * t + c
}
