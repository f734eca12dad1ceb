//! GameSession - caller-owned progression state machine
//!
//! Holds the financial state, the generated decision sequence, a cursor into
//! it and the rewind budget. States run `NotStarted -> InProgress -> Complete`;
//! a rewind always returns to `InProgress`.

use serde::Serialize;
use tracing::{debug, info, warn};

use super::presets::StartingPreset;
use crate::achievement::{achievement_board, unlock_achievements, Achievement};
use crate::config::SimulationPolicy;
use crate::error::{GameError, Result};
use crate::finance::{apply_impact, FinancialState, StateOverrides};
use crate::scenario::{generate_scenarios_with, Choice, Decision};
use crate::scoring::{recommend_with, Recommendation};
use crate::tips::{pick_relevant_tip, tip_for_decision, Comparison, FinancialTip};

/// Lifecycle of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum GameStatus {
    NotStarted,
    InProgress,
    Complete,
}

/// Cursor and rewind bookkeeping
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GameProgress {
    pub current_decision_index: usize,
    pub completed_decisions: Vec<String>,
    pub rewinds_used: u32,
    pub max_rewinds: u32,
}

impl GameProgress {
    fn new(max_rewinds: u32) -> Self {
        Self {
            current_decision_index: 0,
            completed_decisions: Vec::new(),
            rewinds_used: 0,
            max_rewinds,
        }
    }

    #[inline]
    pub fn rewinds_remaining(&self) -> u32 {
        self.max_rewinds.saturating_sub(self.rewinds_used)
    }
}

/// Result of an accepted decision
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DecisionOutcome {
    pub decision_id: String,
    pub choice_id: String,
    pub previous_age: i32,
    pub years_elapsed: i32,
    pub state: FinancialState,
    /// Achievement ids unlocked by this decision
    pub new_achievements: Vec<&'static str>,
    pub is_complete: bool,
}

/// Result of an accepted rewind
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RewindOutcome {
    pub target_age: i32,
    pub decision_index: usize,
    pub state: FinancialState,
    pub rewinds_used: u32,
    pub rewinds_remaining: u32,
}

/// A decided decision with the choice that was made
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntry<'a> {
    pub decision: &'a Decision,
    pub choice: &'a Choice,
}

/// One interactive game, owned by its caller
#[derive(Debug, Clone)]
pub struct GameSession {
    policy: SimulationPolicy,
    status: GameStatus,
    starting_state: FinancialState,
    state: FinancialState,
    decisions: Vec<Decision>,
    progress: GameProgress,
    achieved: Vec<&'static str>,
    current_tip: Option<&'static FinancialTip>,
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}

impl GameSession {
    /// A session with the default policy, not yet started
    pub fn new() -> Self {
        Self::with_policy(SimulationPolicy::default())
    }

    pub fn with_policy(policy: SimulationPolicy) -> Self {
        let progress = GameProgress::new(policy.max_rewinds);
        Self {
            policy,
            status: GameStatus::NotStarted,
            starting_state: FinancialState::default(),
            state: FinancialState::default(),
            decisions: Vec::new(),
            progress,
            achieved: Vec::new(),
            current_tip: None,
        }
    }

    // ========================================================================
    // Lifecycle
    // ========================================================================

    /// Start a game from the defaults merged with optional overrides
    pub fn initialize(&mut self, overrides: Option<StateOverrides>) -> Result<()> {
        let starting = match overrides {
            Some(overrides) => {
                overrides.validate()?;
                overrides.apply_to(FinancialState::default())
            }
            None => FinancialState::default(),
        };
        self.start(starting);
        Ok(())
    }

    /// Start a game from a named preset
    pub fn initialize_with_preset(&mut self, preset: &StartingPreset) -> Result<()> {
        self.initialize(Some(preset.overrides.clone()))
    }

    /// Discard everything and start again from the defaults
    pub fn reset(&mut self) {
        self.start(FinancialState::default());
    }

    fn start(&mut self, starting: FinancialState) {
        self.decisions = generate_scenarios_with(starting.age, &self.policy);
        self.progress = GameProgress::new(self.policy.max_rewinds);
        self.achieved.clear();
        unlock_achievements(&starting, &mut self.achieved);
        self.current_tip = pick_relevant_tip(&mut rand::thread_rng(), starting.age, None);
        self.status = if self.decisions.is_empty() {
            GameStatus::Complete
        } else {
            GameStatus::InProgress
        };

        info!(
            age = starting.age,
            net_worth = starting.net_worth(),
            decisions = self.decisions.len(),
            "game initialized"
        );

        self.state = starting.clone();
        self.starting_state = starting;
    }

    // ========================================================================
    // Transitions
    // ========================================================================

    /// Select a choice on the decision at the cursor
    ///
    /// A rejected selection leaves the session untouched.
    pub fn make_decision(&mut self, decision_id: &str, choice_id: &str) -> Result<DecisionOutcome> {
        if self.status != GameStatus::InProgress {
            warn!(decision_id, status = ?self.status, "decision rejected: game not in progress");
            return Err(GameError::NotInProgress);
        }

        let index = self.progress.current_decision_index;
        let decision = self.decisions.get(index).ok_or(GameError::NotInProgress)?;

        if decision.id != decision_id {
            warn!(decision_id, current = %decision.id, "decision rejected: not at cursor");
            return Err(if self.decisions.iter().any(|d| d.id == decision_id) {
                GameError::InvalidSelection {
                    decision_id: decision_id.to_string(),
                    choice_id: choice_id.to_string(),
                }
            } else {
                GameError::DecisionNotFound(decision_id.to_string())
            });
        }

        let choice = decision.choice(choice_id).ok_or_else(|| {
            warn!(decision_id, choice_id, "decision rejected: unknown choice");
            GameError::ChoiceNotFound {
                decision_id: decision_id.to_string(),
                choice_id: choice_id.to_string(),
            }
        })?;

        let previous_age = self.state.age;
        let floor = self.policy.retirement_floor(self.starting_state.age);
        let next_age = match self.decisions.get(index + 1) {
            Some(next) => next.age,
            None => (previous_age + self.policy.default_age_step).min(floor),
        }
        .max(previous_age);

        let mut next = apply_impact(&self.state, &choice.impact);
        next.age = next_age;
        let years_elapsed = next_age - previous_age;
        if years_elapsed > 0 && next.investments > 0.0 {
            next.investments *= self.policy.growth_factor(years_elapsed);
        }
        next.recompute_net_worth();

        let category = decision.category.clone();
        self.decisions[index].selected_choice = Some(choice_id.to_string());
        self.progress.current_decision_index = index + 1;
        self.progress
            .completed_decisions
            .push(decision_id.to_string());

        let new_achievements = unlock_achievements(&next, &mut self.achieved);
        self.current_tip = tip_for_decision(&mut rand::thread_rng(), next_age, &category);
        self.state = next;

        let is_complete =
            self.progress.current_decision_index >= self.decisions.len() || next_age >= floor;
        if is_complete {
            self.status = GameStatus::Complete;
            info!(
                age = next_age,
                net_worth = self.state.net_worth(),
                decisions = self.progress.completed_decisions.len(),
                "game complete"
            );
        }

        debug!(
            decision_id,
            choice_id,
            previous_age,
            age = next_age,
            net_worth = self.state.net_worth(),
            unlocked = new_achievements.len(),
            "decision applied"
        );

        Ok(DecisionOutcome {
            decision_id: decision_id.to_string(),
            choice_id: choice_id.to_string(),
            previous_age,
            years_elapsed,
            state: self.state.clone(),
            new_achievements,
            is_complete,
        })
    }

    /// Return to the latest decision scheduled at or before `age`
    ///
    /// The state is rebuilt from the starting state by replaying the impacts
    /// of the earlier selections in order. Passive investment growth is not
    /// replayed.
    pub fn rewind_to_age(&mut self, age: i32) -> Result<RewindOutcome> {
        if self.status == GameStatus::NotStarted {
            return Err(GameError::NotInProgress);
        }
        if self.progress.rewinds_used >= self.progress.max_rewinds {
            warn!(
                used = self.progress.rewinds_used,
                max = self.progress.max_rewinds,
                "rewind rejected: budget exhausted"
            );
            return Err(GameError::RewindExhausted {
                used: self.progress.rewinds_used,
                max: self.progress.max_rewinds,
            });
        }
        if self.decisions.is_empty() {
            return Err(GameError::InvalidState(
                "no decisions to rewind to".to_string(),
            ));
        }

        let index = self
            .decisions
            .iter()
            .rposition(|d| d.age <= age)
            .unwrap_or(0)
            .min(self.progress.current_decision_index);

        let mut state = self.starting_state.clone();
        for decision in &self.decisions[..index] {
            if let Some(choice) = decision.selected() {
                state = apply_impact(&state, &choice.impact);
            }
        }
        state.age = self.decisions[index].age.max(self.starting_state.age);
        state.recompute_net_worth();

        for decision in &mut self.decisions[index..] {
            decision.selected_choice = None;
        }

        self.state = state;
        self.progress.current_decision_index = index;
        self.progress.completed_decisions.truncate(index);
        self.progress.rewinds_used += 1;
        self.status = GameStatus::InProgress;

        info!(
            target_age = age,
            decision_index = index,
            rewinds_used = self.progress.rewinds_used,
            "rewound"
        );

        Ok(RewindOutcome {
            target_age: age,
            decision_index: index,
            state: self.state.clone(),
            rewinds_used: self.progress.rewinds_used,
            rewinds_remaining: self.progress.rewinds_remaining(),
        })
    }

    // ========================================================================
    // Queries
    // ========================================================================

    /// The decision at the cursor; `None` unless the game is in progress
    pub fn current_decision(&self) -> Option<&Decision> {
        match self.status {
            GameStatus::InProgress => self.decisions.get(self.progress.current_decision_index),
            _ => None,
        }
    }

    /// Scored recommendation for the decision at the cursor
    pub fn recommend_current(&self) -> Option<Recommendation> {
        self.current_decision()
            .and_then(|d| recommend_with(&self.state, d, &self.policy))
    }

    /// Decided decisions, in order, with the choices made
    pub fn decision_history(&self) -> Vec<HistoryEntry<'_>> {
        self.decisions[..self.progress.current_decision_index.min(self.decisions.len())]
            .iter()
            .filter_map(|decision| {
                decision
                    .selected()
                    .map(|choice| HistoryEntry { decision, choice })
            })
            .collect()
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_complete(&self) -> bool {
        self.status == GameStatus::Complete
    }

    pub fn state(&self) -> &FinancialState {
        &self.state
    }

    pub fn starting_state(&self) -> &FinancialState {
        &self.starting_state
    }

    pub fn decisions(&self) -> &[Decision] {
        &self.decisions
    }

    pub fn progress(&self) -> &GameProgress {
        &self.progress
    }

    pub fn policy(&self) -> &SimulationPolicy {
        &self.policy
    }

    /// Unlocked achievement ids in unlock order
    pub fn unlocked_achievements(&self) -> &[&'static str] {
        &self.achieved
    }

    /// Every achievement with its unlock flag
    pub fn achievements(&self) -> Vec<Achievement> {
        achievement_board(&self.achieved)
    }

    pub fn current_tip(&self) -> Option<&'static FinancialTip> {
        self.current_tip
    }

    /// Current net worth against the national average for the current age
    pub fn comparison(&self) -> Comparison {
        Comparison::new(self.state.age, self.state.net_worth())
    }
}
