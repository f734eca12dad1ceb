//! Life Ledger Core - Financial life-simulation engine
//!
//! A player starts from a financial snapshot, walks through an age-ordered
//! sequence of life decisions and watches each choice move income, savings,
//! debt and investments. Every choice can be scored against the player's
//! current position, and a limited number of rewinds replay history from an
//! earlier age.
//!
//! The core is synchronous and deterministic apart from tip selection. The
//! only async surface is the optional [`advisor`], which adds narrative text
//! and never changes a score or a state transition.
//!
//! ```
//! use life_ledger_core::simulator::GameSession;
//!
//! let mut session = GameSession::new();
//! session.initialize(None)?;
//! while let Some(rec) = session.recommend_current() {
//!     session.make_decision(&rec.decision_id, &rec.choice_id)?;
//! }
//! assert!(session.is_complete());
//! # Ok::<(), life_ledger_core::error::GameError>(())
//! ```

pub mod achievement;
pub mod advisor;
pub mod config;
pub mod error;
pub mod finance;
pub mod scenario;
pub mod scoring;
pub mod simulator;
pub mod tips;

pub use crate::config::{SimulationPolicy, DEFAULT_POLICY};
pub use crate::error::{GameError, Result};
pub use crate::finance::{apply_impact, FinancialImpact, FinancialState, Lifestyle, StateOverrides};
pub use crate::scenario::{generate_scenarios, Choice, Decision, RiskLevel, TimeHorizon};
pub use crate::scoring::{analyze_choice, pick_best, recommend, ChoiceAnalysis, DecisionScorer, Recommendation};
pub use crate::simulator::{GameSession, GameStatus};
