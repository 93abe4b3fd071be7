use clap::Args;
use romgen_core::build_twiddle_table;

use crate::io::hex_file;

#[derive(Args)]
pub struct TwiddleArgs {
    /// FFT length (power of two expected); n/2 rows are emitted
    #[arg(long, default_value_t = 512)]
    pub n: usize,

    /// Bits per component (must be a multiple of 4)
    #[arg(long, default_value_t = 24)]
    pub bits: u32,

    /// Output file path
    #[arg(long, default_value = "twiddle_factors.hex")]
    pub output: String,

    /// Skip the documentation comment header
    #[arg(long)]
    pub no_header: bool,
}

pub fn run(args: TwiddleArgs) -> anyhow::Result<()> {
    eprintln!("generating twiddle factors for a {}-point FFT...", args.n);

    let rows = build_twiddle_table(args.n, args.bits)?;

    let header = if args.no_header {
        None
    } else {
        Some(vec![
            format!("// File: {}", args.output),
            format!("// Twiddle factors for a {}-point FFT", args.n),
            format!(
                "// Format: {}-bit hex (Q1.{} real, Q1.{} imag)",
                args.bits * 2,
                args.bits - 1,
                args.bits - 1
            ),
            String::new(),
        ])
    };
    hex_file::write_rows(&args.output, header.as_deref(), &rows)?;

    println!("wrote {} rows to {}", rows.len(), args.output);
    Ok(())
}
