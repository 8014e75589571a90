//! Lunar node longitude computation.
//!
//! Mean node: the 5th Delaunay argument Ω (IERS Conventions 2010,
//! Table 5.2e). True node: mean node plus short-period perturbation
//! corrections (the five periodic terms from Meeus, *Astronomical
//! Algorithms* 2nd ed., Chapter 47).
//!
//! Charts use the true node only; the mean node is exposed as the base term
//! and for comparison.

use hd_core::normalize_360;

use crate::nutation::fundamental_arguments;

/// Mean ascending node longitude in degrees [0, 360).
///
/// `t` = Julian centuries of TT since J2000.0.
pub fn mean_node_deg(t: f64) -> f64 {
    let args = fundamental_arguments(t);
    normalize_360(args[4].to_degrees())
}

/// Short-period perturbation correction for the true node, in degrees.
///
/// The five periodic terms closing Meeus Chapter 47:
/// `-1.4979 sin 2(D-F) - 0.1500 sin M - 0.1226 sin 2D + 0.1176 sin 2F
/// - 0.0801 sin 2(M'-F)`.
///
/// `args` = `[l, l', F, D, Ω]` in radians.
fn node_perturbation_deg(args: &[f64; 5]) -> f64 {
    // [nl, nl', nF, nD, amplitude_deg]
    #[rustfmt::skip]
    static TERMS: [[f64; 5]; 5] = [
        // nl   nl'   nF    nD    amplitude (deg)
        [ 0.0,  0.0, -2.0,  2.0, -1.4979],
        [ 0.0,  1.0,  0.0,  0.0, -0.1500],
        [ 0.0,  0.0,  0.0,  2.0, -0.1226],
        [ 0.0,  0.0,  2.0,  0.0,  0.1176],
        [ 2.0,  0.0, -2.0,  0.0, -0.0801],
    ];

    TERMS
        .iter()
        .map(|term| {
            let angle =
                term[0] * args[0] + term[1] * args[1] + term[2] * args[2] + term[3] * args[3];
            term[4] * angle.sin()
        })
        .sum()
}

/// True ascending node longitude in degrees [0, 360).
pub fn true_node_deg(t: f64) -> f64 {
    let args = fundamental_arguments(t);
    normalize_360(args[4].to_degrees() + node_perturbation_deg(&args))
}
