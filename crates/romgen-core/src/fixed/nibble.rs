/// How a code width in bits maps to a hex-digit count.
///
/// The two table formats target different hardware word conventions and
/// deliberately do not share one rule:
/// - `Exact` truncates (`bits / 4`) and is only used where validation has
///   already required `bits % 4 == 0` (twiddle ROM rows).
/// - `Ceil` rounds up (`(bits + 3) / 4`) so odd widths like 18-bit DDFS
///   samples still print every nibble.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WidthPolicy {
    Exact,
    Ceil,
}

impl WidthPolicy {
    #[inline]
    pub fn hex_chars(self, bits: u32) -> usize {
        match self {
            WidthPolicy::Exact => (bits / 4) as usize,
            WidthPolicy::Ceil => ((bits + 3) / 4) as usize,
        }
    }
}

/// Zero-padded lowercase hex, exactly `width` digits.
#[inline]
pub fn to_hex(code: u64, width: usize) -> String {
    format!("{code:0width$x}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_truncates_ceil_rounds_up() {
        assert_eq!(WidthPolicy::Exact.hex_chars(24), 6);
        assert_eq!(WidthPolicy::Ceil.hex_chars(24), 6);
        assert_eq!(WidthPolicy::Ceil.hex_chars(18), 5);
        // The truncating variant loses the top nibble for non-multiples
        // of 4; validation keeps it away from such widths.
        assert_eq!(WidthPolicy::Exact.hex_chars(18), 4);
    }

    #[test]
    fn hex_is_zero_padded() {
        assert_eq!(to_hex(0x7f, 2), "7f");
        assert_eq!(to_hex(0, 5), "00000");
        assert_eq!(to_hex(0x1ffff, 5), "1ffff");
    }
}
