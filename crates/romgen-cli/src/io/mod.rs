// crates/romgen-cli/src/io/mod.rs

pub mod hex_file;
