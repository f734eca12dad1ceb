//! Game progression

mod presets;
mod session;


pub use presets::*;
pub use session::*;
