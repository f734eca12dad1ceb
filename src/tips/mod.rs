//! Financial tips and peer comparison

mod comparison;
mod financial;

pub use comparison::*;
pub use financial::*;
