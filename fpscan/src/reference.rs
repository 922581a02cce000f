//! Checks the biased double-shift product against exact rounding.
//!
//! The second formula probed by the scanner, `((c >> 8) + c) >> 8`, is the
//! usual integer approximation of `round(a * b / 255)` used to multiply two
//! 8-bit colour channels.
use log::debug;
use rayon::prelude::*;

use crate::probe::{pair_at, Probe, NUM_PAIRS};

/// Multiply two 8-bit channel values (`255` meaning `1.0`) using shifts only.
pub fn multiply_u8(a: u8, b: u8) -> u8 {
    Probe::new(a, b).r2 as u8
}

/// Multiply two 8-bit channel values in floating point and round to
/// nearest.
pub fn multiply_u8_exact(a: u8, b: u8) -> u8 {
    let a = f64::from(a) / 255.0;
    let b = f64::from(b) / 255.0;
    (a * b * 255.0).round() as u8
}

/// Find all pairs on which [`multiply_u8`] and [`multiply_u8_exact`]
/// disagree, in enumeration order.
pub fn verify_multiply() -> Vec<(u8, u8)> {
    let mismatches: Vec<_> = (0..NUM_PAIRS)
        .into_par_iter()
        .map(pair_at)
        .filter(|&(a, b)| multiply_u8(a, b) != multiply_u8_exact(a, b))
        .collect();
    debug!("verify_multiply: {} mismatches", mismatches.len());
    mismatches
}
