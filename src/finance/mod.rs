//! Financial state model and impact application

mod calculations;
mod impact;
mod state;


pub use calculations::*;
pub use impact::*;
pub use state::*;
