//! Provides diagnostic formatting for Q24.8 fixed-point values.
//!
//! A Q24.8 value is a `u32` whose high 24 bits hold the integer part and
//! whose low 8 bits hold the fraction, i.e., the real number `raw / 256`.
//!
//! # Examples
//!
//!     use fixdump::{format_fixed_point, render_bits, Q24Dot8};
//!
//!     let x = Q24Dot8(384);
//!     assert_eq!(x.whole(), 1);
//!     assert_eq!(x.fraction(), 50000);
//!
//!     assert_eq!(render_bits(0x1234u16), "00010010_00110100");
//!
//!     assert_eq!(
//!         format_fixed_point("x", 384),
//!         "x                  1 ..    50000 [     384]  \
//!          00000000_00000000_00000001_10000000\n",
//!     );
//!
use std::fmt;

mod bits;
pub use self::bits::*;

/// The number of fractional bits.
pub const SHIFT_AMOUNT: u32 = 8;

/// Selects the fractional bits of a raw value.
pub const SHIFT_MASK: u32 = (1 << SHIFT_AMOUNT) - 1;

/// Half of the fixed-point scale. Adding this before truncating by
/// [`SHIFT_AMOUNT`] bits rounds to nearest.
pub const SHIFT_MSB: u32 = 1 << (SHIFT_AMOUNT - 1);

/// The number of decimal digits [`Q24Dot8::fraction`] is scaled to.
pub const FRACTION_DIGITS: u32 = 5;

const FRACTION_SCALE: u32 = 100_000;

/// A raw `u32` viewed as a Q24.8 fixed-point number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Q24Dot8(pub u32);

impl Q24Dot8 {
    /// Get the raw representation.
    pub fn raw(self) -> u32 {
        self.0
    }

    /// Get the integer part.
    pub fn whole(self) -> u32 {
        self.0 >> SHIFT_AMOUNT
    }

    /// Get the fractional part scaled to [`FRACTION_DIGITS`] decimal digits,
    /// truncated.
    pub fn fraction(self) -> u32 {
        // At most `255 * 100_000`, which fits in `u32`
        (self.0 & SHIFT_MASK) * FRACTION_SCALE / (1 << SHIFT_AMOUNT)
    }
}

impl From<u32> for Q24Dot8 {
    fn from(x: u32) -> Self {
        Self(x)
    }
}

/// A `Display` adapter that renders one labelled diagnostic line for a
/// Q24.8 value (without the trailing newline).
///
/// The columns are: the label, the integer part, the fractional part (see
/// [`Q24Dot8::fraction`]), the raw value, and the bit pattern.
#[derive(Debug, Clone, Copy)]
pub struct Dump<'a> {
    pub name: &'a str,
    pub value: Q24Dot8,
}

impl<'a> Dump<'a> {
    pub fn new(name: &'a str, value: impl Into<Q24Dot8>) -> Self {
        Self {
            name,
            value: value.into(),
        }
    }
}

impl fmt::Display for Dump<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Self { name, value } = *self;
        write!(
            f,
            "{:<15}  {:>3} .. {:>8} [{:>8}]  {}",
            name,
            value.whole(),
            value.fraction(),
            value.raw(),
            Bits(value.raw())
        )
    }
}

/// Format one labelled diagnostic line for a Q24.8 value, terminated by a
/// newline. See [`Dump`].
pub fn format_fixed_point(name: &str, value: u32) -> String {
    format!("{}\n", Dump::new(name, value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickcheck_macros::quickcheck;

    #[test]
    fn constants() {
        assert_eq!(SHIFT_MASK, 255);
        assert_eq!(SHIFT_MSB, 128);
        assert_eq!(FRACTION_SCALE, 10u32.pow(FRACTION_DIGITS));
    }

    #[test]
    fn decompose_one_and_a_half() {
        let x = Q24Dot8(0x1_80);
        assert_eq!(x.whole(), 1);
        assert_eq!(x.fraction(), 50000);
    }

    #[test]
    fn fraction_truncates() {
        // 1/256 = 0.00390625
        assert_eq!(Q24Dot8(1).fraction(), 390);
        // 255/256 = 0.99609375
        assert_eq!(Q24Dot8(255).fraction(), 99609);
        assert_eq!(Q24Dot8(u32::max_value()).whole(), 0xff_ffff);
    }

    #[quickcheck]
    fn decompose(x: u32) -> bool {
        let q = Q24Dot8(x);
        q.whole() == x >> 8 && u64::from(q.fraction()) == u64::from(x & 255) * 100000 / 256
    }

    #[test]
    fn dump_columns() {
        assert_eq!(
            Dump::new(" (c>>8)", 2u32).to_string(),
            " (c>>8)            0 ..      781 [       2]  \
             00000000_00000000_00000000_00000010"
        );
    }

    #[test]
    fn dump_wide_label() {
        // The label column is a minimum width
        let line = Dump::new("a_very_long_label", 0u32).to_string();
        assert!(line.starts_with("a_very_long_label    0 .. "), "{:?}", line);
    }

    #[quickcheck]
    fn format_fixed_point_layout(x: u32) -> bool {
        let line = format_fixed_point("x", x);
        log::debug!("line = {:?}", line);

        let (head, bits) = line.split_at(line.len() - 36);
        assert_eq!(bits, format!("{}\n", render_bits(x)));
        assert!(head.ends_with("]  "));
        assert!(head.contains(&format!("[{:>8}]", x)));
        assert!(head.contains(&format!(" .. {:>8} ", Q24Dot8(x).fraction())));
        true
    }
}
