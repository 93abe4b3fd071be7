pub mod error;
pub mod validate;

pub mod fixed;
pub mod table;

pub use crate::error::{Error, Result};
pub use crate::fixed::qcode::{decode, quantize};
pub use crate::table::sine::build_sine_table;
pub use crate::table::twiddle::build_twiddle_table;
