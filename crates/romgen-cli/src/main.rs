// crates/romgen-cli/src/main.rs

use clap::{Parser, Subcommand};

mod cmd;
mod io;

#[derive(Parser)]
#[command(name = "romgen-cli")]
#[command(about = "Fixed-point hex table generator for FPGA memories", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate an FFT twiddle-factor ROM (.hex)
    Twiddle(cmd::twiddle::TwiddleArgs),

    /// Generate a DDFS / lock-in sine LUT (.hex)
    Sine(cmd::sine::SineArgs),

    /// Inspect a generated .hex table (row count, decoded extremes)
    Inspect(cmd::inspect::InspectArgs),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.cmd {
        Commands::Twiddle(args) => cmd::twiddle::run(args),
        Commands::Sine(args) => cmd::sine::run(args),
        Commands::Inspect(args) => cmd::inspect::run(args),
    }
}
