//! Achievements unlocked by financial milestones

mod checker;

pub use checker::*;
