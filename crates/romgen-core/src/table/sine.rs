use std::f64::consts::PI;

use crate::error::Result;
use crate::fixed::nibble::{to_hex, WidthPolicy};
use crate::fixed::qcode::quantize;
use crate::validate::validate_table_params;

/// Sine LUT rows for a DDFS / lock-in reference generator: one full cycle
/// across `n` phase steps, one Q1.(bits-1) code per row.
///
/// Unlike the twiddle ROM this format rounds the hex width up, so widths
/// that are not a multiple of 4 (18-bit block-RAM ports) are fine.
pub fn build_sine_table(n: usize, bits: u32) -> Result<Vec<String>> {
    validate_table_params(n, bits, WidthPolicy::Ceil)?;

    let chars = WidthPolicy::Ceil.hex_chars(bits);
    let mut rows = Vec::with_capacity(n);

    for i in 0..n {
        let angle = 2.0 * PI * (i as f64) / (n as f64);
        let code = quantize(angle.sin(), bits)?;
        rows.push(to_hex(code, chars));
    }

    Ok(rows)
}
