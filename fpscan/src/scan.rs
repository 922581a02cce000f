//! The sequential scanner.
use log::{debug, trace};
use std::iter::FusedIterator;

use crate::probe::{pairs, Pairs, Probe};

/// Specifies when a scan ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopMode {
    /// Stop after the first flagged pair whose round bit is set.
    FirstRoundBit,
    /// Visit every pair.
    Exhaustive,
}

impl Default for StopMode {
    fn default() -> Self {
        StopMode::FirstRoundBit
    }
}

/// Scan all operand pairs in enumeration order and yield the flagged ones.
///
/// With [`StopMode::FirstRoundBit`], the iterator ends right after yielding
/// the first probe for which [`Probe::is_stop`] holds.
///
/// # Examples
///
///     use fpscan::{scan, StopMode};
///
///     let last = scan(StopMode::FirstRoundBit).last().unwrap();
///     assert_eq!(last.key(), (138, 243));
///
pub fn scan(mode: StopMode) -> Scan {
    Scan {
        pairs: pairs(),
        mode,
        done: false,
    }
}

/// An iterator created by [`scan`].
#[derive(Debug, Clone)]
pub struct Scan {
    pairs: Pairs,
    mode: StopMode,
    done: bool,
}

impl Iterator for Scan {
    type Item = Probe;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        for (i, j) in &mut self.pairs {
            let probe = Probe::new(i, j);
            if !probe.is_flagged() {
                continue;
            }
            trace!("flagged: {:?}", probe);

            if self.mode == StopMode::FirstRoundBit && probe.is_stop() {
                debug!("Stopping at ({}, {})", i, j);
                self.done = true;
            }
            return Some(probe);
        }

        self.done = true;
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.done {
            (0, Some(0))
        } else {
            (0, self.pairs.size_hint().1)
        }
    }
}

impl FusedIterator for Scan {}
