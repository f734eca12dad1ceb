//! Optional advice oracle
//!
//! Narrative only: nothing here changes a score, a chosen choice or the
//! game state.

mod client;
mod fallback;
mod oracle;
mod parser;

pub use client::*;
pub use fallback::*;
pub use oracle::*;
pub use parser::*;
