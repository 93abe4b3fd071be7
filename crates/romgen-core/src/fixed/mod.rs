// crates/romgen-core/src/fixed/mod.rs

pub mod nibble;
pub mod qcode;
