// crates/romgen-core/src/table/mod.rs

pub mod sine;
pub mod twiddle;
