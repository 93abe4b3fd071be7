use crate::error::{Error, Result};

/// Quantize `value` in [-1.0, 1.0] to a `bits`-wide two's-complement code,
/// Q1.(bits-1) format.
///
/// The scale factor is `2^(bits-1) - 1`, not `2^(bits-1)`: the most-negative
/// code is deliberately left unused so the scale is symmetric and `+1.0`
/// never aliases to the `-1.0` bit pattern.
///
/// Rounding is round-half-away-from-zero (`f64::round`), so a value that
/// scales to exactly x.5 moves away from zero.
///
/// Inputs outside [-1.0, 1.0], NaN included, are a contract violation and
/// fail with `Error::Range` rather than wrapping into a wrong code. The
/// guard runs before scaling so NaN cannot saturate through the `as i64`
/// cast into a silent zero.
pub fn quantize(value: f64, bits: u32) -> Result<u64> {
    debug_assert!((2..=crate::validate::MAX_BITS).contains(&bits));

    if !value.is_finite() || !(-1.0..=1.0).contains(&value) {
        return Err(Error::Range(format!(
            "value {value} is outside [-1.0, 1.0]"
        )));
    }

    let limit: i64 = 1i64 << (bits - 1);
    let scaled = (value * (limit - 1) as f64).round() as i64;

    let code = if scaled < 0 {
        (1i64 << bits) + scaled
    } else {
        scaled
    };
    Ok(code as u64)
}

/// Inverse of `quantize`: sign-extend a `bits`-wide code and scale back to
/// [-1.0, 1.0]. Exact for codes `quantize` produces; the reserved
/// most-negative code decodes slightly below -1.0.
pub fn decode(code: u64, bits: u32) -> f64 {
    let limit: i64 = 1i64 << (bits - 1);
    let raw = code as i64;
    let signed = if raw >= limit { raw - (1i64 << bits) } else { raw };
    signed as f64 / (limit - 1) as f64
}
