//! Searches all pairs of 8-bit operands for products on which two
//! fixed-point rounding formulas disagree.
//!
//! For each pair `(i, j)`, the product `p = i * j` is biased by half of the
//! Q24.8 scale (`c = p + 128`) and then rounded in two ways:
//!
//!  - `t = c >> 8`
//!  - `r2 = (t + c) >> 8`
//!
//! A pair is *flagged* when `r2 - t == 1`. Flagged pairs are reported as
//! diagnostic blocks (see [`report`]). By default, the scan stops after the
//! first flagged pair whose product has bit 7 set.
use log::info;
use std::io::Write;

mod error;
pub mod par;
pub mod probe;
pub mod reference;
pub mod report;
mod scan;

pub use self::{
    error::Error,
    probe::{pairs, Probe},
    report::Summary,
    scan::{scan, Scan, StopMode},
};

/// Options for [`run`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ScanConfig {
    pub stop: StopMode,
    /// Compute the flagged pairs on the `rayon` pool before reporting them.
    pub parallel: bool,
}

/// Scan the operand pairs and write the report to `out`.
pub fn run(config: &ScanConfig, out: &mut impl Write) -> Result<Summary, Error> {
    let stop_on_round_bit = config.stop == StopMode::FirstRoundBit;

    let summary = if config.parallel {
        report::write_report(out, par::flagged(config.stop), stop_on_round_bit)?
    } else {
        report::write_report(out, scan(config.stop), stop_on_round_bit)?
    };

    info!("{:?}", summary);
    Ok(summary)
}

/// Check [`reference::multiply_u8`] against exact rounding on every pair.
pub fn verify() -> Result<(), Error> {
    let mismatches = reference::verify_multiply();
    if let Some(&(a, b)) = mismatches.first() {
        info!("First mismatch: ({}, {})", a, b);
        return Err(Error::Mismatch {
            count: mismatches.len(),
        });
    }
    Ok(())
}
