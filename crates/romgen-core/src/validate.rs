use crate::error::{Error, Result};
use crate::fixed::nibble::WidthPolicy;

/// Widest supported quantization; keeps a packed twiddle pair (2 * bits)
/// within a u64.
pub const MAX_BITS: u32 = 32;

pub fn validate_table_params(n: usize, bits: u32, policy: WidthPolicy) -> Result<()> {
    // Q1.(bits-1) needs a sign bit plus at least one magnitude bit.
    if bits < 2 {
        return Err(Error::Config(format!(
            "bits must be >= 2 (one sign bit, one magnitude bit), got {bits}"
        )));
    }
    if bits > MAX_BITS {
        return Err(Error::Config(format!(
            "bits must be <= {MAX_BITS}, got {bits}"
        )));
    }

    if n == 0 {
        return Err(Error::Config("table length must be non-zero".into()));
    }

    match policy {
        // Exact nibble formatting is only lossless when the code is a
        // whole number of hex digits.
        WidthPolicy::Exact => {
            if bits % 4 != 0 {
                return Err(Error::Config(format!(
                    "exact nibble width requires bits divisible by 4, got {bits}"
                )));
            }
        }
        WidthPolicy::Ceil => {}
    }

    Ok(())
}
