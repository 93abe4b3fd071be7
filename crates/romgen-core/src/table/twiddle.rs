use std::f64::consts::PI;

use crate::error::{Error, Result};
use crate::fixed::nibble::{to_hex, WidthPolicy};
use crate::fixed::qcode::quantize;
use crate::validate::validate_table_params;

/// Twiddle-factor ROM rows for an `n`-point FFT, `n/2` entries.
///
/// Row `k` holds `W_n^k = exp(-j*2*pi*k/n)` with real and imaginary parts
/// quantized to Q1.(bits-1) and packed as one hex word: real part in the
/// high-order nibbles, imaginary in the low. Only the first half period is
/// emitted; the butterfly derives the rest by symmetry.
///
/// `n` is expected to be a power of two but that is not enforced; `bits`
/// must be a multiple of 4 so each part is a whole number of hex digits.
pub fn build_twiddle_table(n: usize, bits: u32) -> Result<Vec<String>> {
    validate_table_params(n, bits, WidthPolicy::Exact)?;
    // n/2 rows: anything below 2 would emit an empty ROM.
    if n < 2 {
        return Err(Error::Config(format!(
            "FFT length must be >= 2 to emit n/2 rows, got {n}"
        )));
    }

    let chars = WidthPolicy::Exact.hex_chars(bits);
    let mut rows = Vec::with_capacity(n / 2);

    for k in 0..n / 2 {
        // Forward-DFT convention: negative exponent.
        let angle = -2.0 * PI * (k as f64) / (n as f64);
        let re = quantize(angle.cos(), bits)?;
        let im = quantize(angle.sin(), bits)?;
        rows.push(format!("{}{}", to_hex(re, chars), to_hex(im, chars)));
    }

    Ok(rows)
}
