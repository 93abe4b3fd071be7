use clap::Args;
use romgen_core::build_sine_table;

use crate::io::hex_file;

#[derive(Args)]
pub struct SineArgs {
    /// Phase samples per full cycle
    #[arg(long, default_value_t = 1024)]
    pub n: usize,

    /// Bits per sample
    #[arg(long, default_value_t = 18)]
    pub bits: u32,

    /// Output file path
    #[arg(long, default_value = "ddfs_sin_lut.hex")]
    pub output: String,
}

pub fn run(args: SineArgs) -> anyhow::Result<()> {
    eprintln!(
        "generating sine LUT: {} samples, {} bits...",
        args.n, args.bits
    );

    let rows = build_sine_table(args.n, args.bits)?;
    hex_file::write_rows(&args.output, None, &rows)?;

    println!("wrote {} rows to {}", rows.len(), args.output);
    Ok(())
}
