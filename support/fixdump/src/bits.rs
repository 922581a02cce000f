use std::fmt::{self, Write};

/// Unsigned integer types whose bit patterns can be rendered by [`Bits`].
pub trait BitPattern: Copy {
    /// The width of the type in bits. Must be a multiple of 8.
    const BITS: u32;

    /// Get the bit at position `i` (`0` is the least significant bit).
    fn bit(self, i: u32) -> bool;
}

macro_rules! impl_bit_pattern {
    ($($ty:ty),*) => {$(
        impl BitPattern for $ty {
            const BITS: u32 = <$ty>::BITS;

            #[inline]
            fn bit(self, i: u32) -> bool {
                (self >> i) & 1 != 0
            }
        }
    )*};
}

impl_bit_pattern!(u8, u16, u32, u64);

/// A `Display` adapter that renders the bit pattern of an unsigned integer,
/// most significant bit first, with `_` separating each byte.
///
///     use fixdump::Bits;
///     assert_eq!(Bits(0xa5u8).to_string(), "10100101");
///     assert_eq!(Bits(0x8001u16).to_string(), "10000000_00000001");
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bits<T>(pub T);

impl<T: BitPattern> fmt::Display for Bits<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for i in (0..T::BITS).rev() {
            if i % 8 == 7 && i != T::BITS - 1 {
                f.write_char('_')?;
            }
            f.write_char(if self.0.bit(i) { '1' } else { '0' })?;
        }
        Ok(())
    }
}

/// Render the bit pattern of `v` as a string. See [`Bits`].
pub fn render_bits<T: BitPattern>(v: T) -> String {
    Bits(v).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickcheck_macros::quickcheck;

    #[test]
    fn zero() {
        assert_eq!(render_bits(0u32), "00000000_00000000_00000000_00000000");
    }

    #[test]
    fn byte_order() {
        assert_eq!(
            render_bits(0x0102_0380u32),
            "00000001_00000010_00000011_10000000"
        );
        assert_eq!(
            render_bits(u64::max_value()),
            ["11111111"; 8].join("_")
        );
    }

    #[quickcheck]
    fn shape_u32(x: u32) -> bool {
        let st = render_bits(x);
        assert_eq!(st.len(), 35);
        for (i, ch) in st.chars().enumerate() {
            if i % 9 == 8 {
                assert_eq!(ch, '_', "{:?}", st);
            } else {
                assert!(ch == '0' || ch == '1', "{:?}", st);
            }
        }
        true
    }

    #[quickcheck]
    fn parses_back(x: u32) -> bool {
        u32::from_str_radix(&render_bits(x).replace('_', ""), 2) == Ok(x)
    }

    #[quickcheck]
    fn widths_agree(x: u8) -> bool {
        let narrow = render_bits(x);
        let wide = render_bits(u32::from(x));
        wide.ends_with(&format!("_{}", narrow)) && narrow.len() == 8
    }
}
