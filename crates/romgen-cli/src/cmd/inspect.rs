use clap::Args;
use romgen_core::fixed::nibble::WidthPolicy;
use romgen_core::{decode, validate};

use crate::io::hex_file;

#[derive(Args)]
pub struct InspectArgs {
    /// Table file to inspect (.hex)
    #[arg(long)]
    pub input: String,

    /// Bits per component the table was generated with
    #[arg(long)]
    pub bits: u32,

    /// Table layout: "twiddle" or "sine"
    #[arg(long, default_value = "sine")]
    pub format: String,
}

pub fn run(args: InspectArgs) -> anyhow::Result<()> {
    let rows = hex_file::read_rows(&args.input)?;

    match args.format.as_str() {
        "sine" => {
            validate::validate_table_params(rows.len(), args.bits, WidthPolicy::Ceil)?;
            let chars = WidthPolicy::Ceil.hex_chars(args.bits);
            let values = decode_column(&rows, 0, chars, args.bits)?;
            report(&args.input, rows.len(), "sample", &values);
        }
        "twiddle" => {
            validate::validate_table_params(rows.len(), args.bits, WidthPolicy::Exact)?;
            let chars = WidthPolicy::Exact.hex_chars(args.bits);
            let re = decode_column(&rows, 0, chars, args.bits)?;
            let im = decode_column(&rows, chars, chars, args.bits)?;
            report(&args.input, rows.len(), "real", &re);
            report(&args.input, rows.len(), "imag", &im);
        }
        other => anyhow::bail!("unknown --format: {other}"),
    }

    Ok(())
}

fn decode_column(rows: &[String], start: usize, chars: usize, bits: u32) -> anyhow::Result<Vec<f64>> {
    let mut out = Vec::with_capacity(rows.len());
    for (idx, row) in rows.iter().enumerate() {
        let end = start + chars;
        // get() rather than indexing: a malformed file may hold short rows
        // or multi-byte characters, and both must report, not panic.
        let hex = row.get(start..end).ok_or_else(|| {
            anyhow::anyhow!("row {idx}: expected {end} hex chars for {bits}-bit components, got {row:?}")
        })?;
        let code = u64::from_str_radix(hex, 16)
            .map_err(|e| anyhow::anyhow!("row {idx}: bad hex: {e}"))?;
        out.push(decode(code, bits));
    }
    Ok(out)
}

fn report(path: &str, count: usize, label: &str, values: &[f64]) {
    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    println!("{path}: {count} rows, {label} range [{min:.6}, {max:.6}]");
}
