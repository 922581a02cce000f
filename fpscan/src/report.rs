//! Writing diagnostic blocks.
use fixdump::Dump;
use std::io::{self, Write};

use crate::probe::Probe;

/// Statistics about a written report.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    /// The number of diagnostic blocks written.
    pub blocks: usize,
    /// The number of written blocks whose round bit is set.
    pub round_bit_blocks: usize,
    /// The pair the scan stopped at, if it ended early.
    pub stopped_at: Option<(u8, u8)>,
}

/// Write the diagnostic block for one flagged probe.
pub fn write_block(out: &mut impl Write, probe: &Probe) -> io::Result<()> {
    let Probe { i, j, c, t, r2, .. } = *probe;

    write!(out, "\n:::: {} {}\n", i, j)?;
    writeln!(out, "------------- {}", probe.round_bit())?;
    for &(name, value) in &[
        ("p", probe.p),
        ("c", c),
        (" (c>>8)", t),
        (" (c>>8)+c", probe.t_plus_c()),
        ("((c>>8)+c)>>8", probe.t_plus_c() >> fixdump::SHIFT_AMOUNT),
        ("r", r2),
    ] {
        writeln!(out, "{}", Dump::new(name, value))?;
    }
    Ok(())
}

/// Write the diagnostic blocks for `probes` in order.
///
/// If a probe satisfying [`Probe::is_stop`] is reached and `stop_on_round_bit`
/// is set, it is the last one written.
pub fn write_report(
    out: &mut impl Write,
    probes: impl IntoIterator<Item = Probe>,
    stop_on_round_bit: bool,
) -> io::Result<Summary> {
    let mut summary = Summary::default();

    for probe in probes {
        write_block(out, &probe)?;

        summary.blocks += 1;
        if probe.round_bit() == 1 {
            summary.round_bit_blocks += 1;
            if stop_on_round_bit {
                summary.stopped_at = Some(probe.key());
                break;
            }
        }
    }

    out.flush()?;
    Ok(summary)
}
