pub mod constants;
pub mod values;

pub use constants::*;
pub use values::{ValueGenerator, validate_margins};
