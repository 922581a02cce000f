//! The parallel counterpart of [`scan`](crate::scan).
//!
//! Each pair is evaluated independently on the `rayon` global pool. The
//! results are reduced in enumeration order, so they are identical to what
//! the sequential scanner produces.
use log::debug;
use rayon::prelude::*;

use crate::{
    probe::{pair_at, Probe, NUM_PAIRS},
    scan::StopMode,
};

/// Find the first pair (in enumeration order) after which the default scan
/// stops.
pub fn find_stop() -> Option<(u8, u8)> {
    let found = (0..NUM_PAIRS)
        .into_par_iter()
        .map(pair_at)
        .find_first(|&(i, j)| Probe::new(i, j).is_stop());
    debug!("find_stop: {:?}", found);
    found
}

/// Collect the probes yielded by [`scan`](crate::scan) with the same
/// `mode`, computing them in parallel.
pub fn flagged(mode: StopMode) -> Vec<Probe> {
    // The index just past the last pair to report
    let end = match mode {
        StopMode::FirstRoundBit => find_stop().map_or(NUM_PAIRS, |(i, j)| {
            ((usize::from(i) << 8) | usize::from(j)) + 1
        }),
        StopMode::Exhaustive => NUM_PAIRS,
    };

    (0..end)
        .into_par_iter()
        .map(|index| {
            let (i, j) = pair_at(index);
            Probe::new(i, j)
        })
        .filter(Probe::is_flagged)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scan::scan;

    #[test]
    fn find_stop_matches_scan() {
        let last = scan(StopMode::FirstRoundBit).last().map(|p| p.key());
        assert_eq!(find_stop(), last);
        assert_eq!(find_stop(), Some((138, 243)));
    }

    #[test]
    fn flagged_matches_scan() {
        for &mode in &[StopMode::FirstRoundBit, StopMode::Exhaustive] {
            let seq: Vec<_> = scan(mode).collect();
            assert_eq!(flagged(mode), seq, "{:?}", mode);
        }
    }
}
