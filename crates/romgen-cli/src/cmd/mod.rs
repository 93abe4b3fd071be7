// crates/romgen-cli/src/cmd/mod.rs

pub mod inspect;
pub mod sine;
pub mod twiddle;
