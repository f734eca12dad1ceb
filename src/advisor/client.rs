//! Retrying advisor on top of a [`TextOracle`]
//!
//! Every public method answers with text, falling back to deterministic
//! local content when the oracle is absent, fails, or returns something
//! unusable. Successful answers are cached per prompt.

use std::time::Duration;

use ahash::AHashMap;
use parking_lot::RwLock;
use serde::Serialize;
use tracing::{debug, warn};

use super::fallback::{contextual_fallback, fallback_advice, personalized_fallback_tips, AdviceContext, AdviceProfile};
use super::oracle::{OracleError, TextOracle};
use super::parser::{looks_like_fallback, parse_tips};
use crate::finance::format_currency;
use crate::scoring::Recommendation;

/// Retry and timeout settings for oracle calls
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AdvisorConfig {
    /// Retries after the first attempt, transient failures only
    pub max_retries: u32,
    pub base_delay: Duration,
    pub rate_limit_base_delay: Duration,
    pub max_delay: Duration,
    pub request_timeout: Duration,
}

impl Default for AdvisorConfig {
    fn default() -> Self {
        Self {
            max_retries: 2,
            base_delay: Duration::from_millis(1_000),
            rate_limit_base_delay: Duration::from_millis(2_000),
            max_delay: Duration::from_millis(6_000),
            request_timeout: Duration::from_secs(30),
        }
    }
}

impl AdvisorConfig {
    /// Delay before retry number `attempt + 1`: base doubled per attempt, capped
    pub fn backoff(&self, attempt: u32, error: &OracleError) -> Duration {
        let base = match error {
            OracleError::RateLimited => self.rate_limit_base_delay,
            _ => self.base_delay,
        };
        base.saturating_mul(2u32.saturating_pow(attempt))
            .min(self.max_delay)
    }
}

/// Where a set of tips came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TipProvider {
    Oracle,
    Local,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonalizedTips {
    pub tips: Vec<String>,
    pub ai_generated: bool,
    pub provider: TipProvider,
}

impl PersonalizedTips {
    fn local(profile: &AdviceProfile) -> Self {
        Self {
            tips: personalized_fallback_tips(profile),
            ai_generated: false,
            provider: TipProvider::Local,
        }
    }
}

/// Oracle wrapper with retries, timeouts, a response cache and local fallbacks
pub struct Advisor<O: TextOracle> {
    oracle: O,
    config: AdvisorConfig,
    cache: RwLock<AHashMap<String, String>>,
}

impl<O: TextOracle> Advisor<O> {
    pub fn new(oracle: O) -> Self {
        Self::with_config(oracle, AdvisorConfig::default())
    }

    pub fn with_config(oracle: O, config: AdvisorConfig) -> Self {
        Self {
            oracle,
            config,
            cache: RwLock::new(AHashMap::with_capacity(64)),
        }
    }

    pub fn oracle(&self) -> &O {
        &self.oracle
    }

    pub fn config(&self) -> &AdvisorConfig {
        &self.config
    }

    /// Number of cached oracle answers
    pub fn cached_len(&self) -> usize {
        self.cache.read().len()
    }

    pub fn clear_cache(&self) {
        self.cache.write().clear();
    }

    /// Free advice for a prompt, local text on any oracle failure
    pub async fn advise(&self, prompt: &str) -> String {
        match self.ask(prompt).await {
            Ok(text) => text,
            Err(err) => {
                warn!(error = %err, "oracle unavailable, using local advice");
                fallback_advice(prompt).to_string()
            }
        }
    }

    /// Short analysis of a decision in the player's context
    pub async fn analyze_decision(&self, decision: &str, context: &AdviceContext) -> String {
        let prompt = decision_prompt(decision, context);
        match self.ask(&prompt).await {
            Ok(text) => text,
            Err(err) => {
                warn!(error = %err, decision, "oracle unavailable, using contextual analysis");
                contextual_fallback(decision, context).to_string()
            }
        }
    }

    /// Three tips for a profile; oracle bullets when usable, local tips otherwise
    pub async fn personalized_tips(&self, profile: &AdviceProfile) -> PersonalizedTips {
        let prompt = tips_prompt(profile);
        let text = match self.ask(&prompt).await {
            Ok(text) => text,
            Err(err) => {
                warn!(error = %err, "oracle unavailable, using local tips");
                return PersonalizedTips::local(profile);
            }
        };

        if looks_like_fallback(&text) {
            debug!("oracle tips look canned, using local tips");
            return PersonalizedTips::local(profile);
        }

        match parse_tips(&text) {
            Some(tips) => PersonalizedTips {
                tips,
                ai_generated: true,
                provider: TipProvider::Oracle,
            },
            None => {
                warn!("oracle tips not in bullet form, using local tips");
                PersonalizedTips::local(profile)
            }
        }
    }

    /// Replace a recommendation's reasoning with an oracle insight
    ///
    /// Only `reasoning` and `enriched` change; the chosen choice, its score
    /// and every other field are returned as given.
    pub async fn enrich(&self, mut recommendation: Recommendation) -> Recommendation {
        let prompt = insight_prompt(&recommendation);
        match self.ask(&prompt).await {
            Ok(text) => {
                recommendation.reasoning = text;
                recommendation.enriched = true;
            }
            Err(err) => {
                warn!(error = %err, decision = %recommendation.decision_id, "keeping local reasoning");
            }
        }
        recommendation
    }

    /// One oracle answer with cache, timeout and bounded retries
    async fn ask(&self, prompt: &str) -> Result<String, OracleError> {
        if !self.oracle.is_configured() {
            return Err(OracleError::NotConfigured);
        }
        if let Some(hit) = self.cached(prompt) {
            return Ok(hit);
        }

        let mut attempt = 0;
        loop {
            match self.attempt(prompt).await {
                Ok(text) => {
                    self.cache.write().insert(prompt.to_string(), text.clone());
                    return Ok(text);
                }
                Err(err) if err.is_transient() && attempt < self.config.max_retries => {
                    let delay = self.config.backoff(attempt, &err);
                    debug!(error = %err, attempt, delay_ms = delay.as_millis() as u64, "retrying oracle");
                    tokio::time::sleep(delay).await;
                    attempt += 1;
                }
                Err(err) => return Err(err),
            }
        }
    }

    async fn attempt(&self, prompt: &str) -> Result<String, OracleError> {
        match tokio::time::timeout(self.config.request_timeout, self.oracle.suggest(prompt)).await {
            Err(_) => Err(OracleError::Timeout),
            Ok(Ok(text)) if text.trim().is_empty() => Err(OracleError::EmptyResponse),
            Ok(Ok(text)) => Ok(text.trim().to_string()),
            Ok(Err(err)) => Err(err),
        }
    }

    fn cached(&self, prompt: &str) -> Option<String> {
        self.cache.read().get(prompt).cloned()
    }
}

fn decision_prompt(decision: &str, context: &AdviceContext) -> String {
    format!(
        "As a financial advisor, analyze this decision for someone who is {} years old \
         with an income of {}, savings of {}, and debt of {}.\n\n\
         Decision: {}\n\n\
         Provide a brief analysis (2-3 sentences) focusing on whether this is a good \
         financial decision, its potential risks or benefits, and alternatives if applicable. \
         Keep the response concise and actionable.",
        context.age,
        format_currency(context.income),
        format_currency(context.savings),
        format_currency(context.debt),
        decision
    )
}

fn tips_prompt(profile: &AdviceProfile) -> String {
    let ctx = &profile.context;
    format!(
        "Generate 3 personalized financial tips for someone with this profile:\n\
         - Age: {}\n- Income: {}\n- Savings: {}\n- Debt: {}\n- Goals: {}\n\n\
         Provide 3 specific, actionable tips. Format each tip as a separate line starting with \"•\".",
        ctx.age,
        format_currency(ctx.income),
        format_currency(ctx.savings),
        format_currency(ctx.debt),
        profile.goals.join(", ")
    )
}

fn insight_prompt(recommendation: &Recommendation) -> String {
    let analysis = &recommendation.analysis;
    format!(
        "A financial simulator recommends \"{}\" ({}) with a score of {}/100. \
         Risk: {} Explain in 2-3 sentences why this choice fits the player.",
        analysis.choice.text,
        analysis.choice.explanation,
        analysis.score,
        analysis.risk_assessment
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::advisor::NoOracle;
    use crate::finance::FinancialState;
    use crate::scenario::generate_scenarios;
    use crate::scoring::recommend;
    use parking_lot::Mutex;
    use std::collections::VecDeque;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tokio::time::Instant;

    /// Replays canned replies in order, then reports empty answers
    struct Scripted {
        replies: Mutex<VecDeque<Result<String, OracleError>>>,
        calls: AtomicUsize,
    }

    impl Scripted {
        fn new(replies: Vec<Result<String, OracleError>>) -> Self {
            Self {
                replies: Mutex::new(replies.into()),
                calls: AtomicUsize::new(0),
            }
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    impl TextOracle for Scripted {
        async fn suggest(&self, _prompt: &str) -> Result<String, OracleError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.replies
                .lock()
                .pop_front()
                .unwrap_or(Err(OracleError::EmptyResponse))
        }
    }

    /// Never answers
    struct Stalled;

    impl TextOracle for Stalled {
        async fn suggest(&self, _prompt: &str) -> Result<String, OracleError> {
            std::future::pending().await
        }
    }

    fn ok(text: &str) -> Result<String, OracleError> {
        Ok(text.to_string())
    }

    fn profile() -> AdviceProfile {
        AdviceProfile::new(
            &FinancialState::default()
                .with_age(28)
                .with_income(50_000.0)
                .with_savings(2_000.0),
            vec!["buy a home".into()],
        )
    }

    #[test]
    fn test_backoff_schedule() {
        let config = AdvisorConfig::default();
        let net = OracleError::Network("reset".into());
        assert_eq!(config.backoff(0, &net), Duration::from_millis(1_000));
        assert_eq!(config.backoff(1, &net), Duration::from_millis(2_000));
        assert_eq!(config.backoff(0, &OracleError::RateLimited), Duration::from_millis(2_000));
        assert_eq!(config.backoff(1, &OracleError::RateLimited), Duration::from_millis(4_000));
        assert_eq!(config.backoff(5, &OracleError::RateLimited), Duration::from_millis(6_000));
    }

    #[tokio::test(start_paused = true)]
    async fn test_advise_success_is_cached() {
        let advisor = Advisor::new(Scripted::new(vec![ok("Pay the card first.")]));
        assert_eq!(advisor.advise("debt?").await, "Pay the card first.");
        assert_eq!(advisor.advise("debt?").await, "Pay the card first.");
        assert_eq!(advisor.oracle().calls(), 1);
        assert_eq!(advisor.cached_len(), 1);

        advisor.clear_cache();
        assert_eq!(advisor.cached_len(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_transient_failures_retry_with_backoff() {
        let advisor = Advisor::new(Scripted::new(vec![
            Err(OracleError::RateLimited),
            Err(OracleError::RateLimited),
            ok("Third time lucky."),
        ]));
        let start = Instant::now();
        assert_eq!(advisor.advise("invest?").await, "Third time lucky.");
        assert_eq!(advisor.oracle().calls(), 3);
        assert!(start.elapsed() >= Duration::from_millis(6_000));
    }

    #[tokio::test(start_paused = true)]
    async fn test_retries_are_bounded() {
        let advisor = Advisor::new(Scripted::new(vec![
            Err(OracleError::Server(503)),
            Err(OracleError::Server(503)),
            Err(OracleError::Server(503)),
            ok("too late"),
        ]));
        let text = advisor.advise("Should I pay off debt?").await;
        assert_eq!(text, fallback_advice("debt"));
        assert_eq!(advisor.oracle().calls(), 3);
        assert_eq!(advisor.cached_len(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_permanent_failure_falls_back_immediately() {
        let advisor = Advisor::new(Scripted::new(vec![Err(OracleError::Client("bad key".into()))]));
        let start = Instant::now();
        let text = advisor.advise("emergency savings").await;
        assert!(text.starts_with("Build an emergency fund"));
        assert_eq!(advisor.oracle().calls(), 1);
        assert!(start.elapsed() < Duration::from_millis(1));
    }

    #[tokio::test(start_paused = true)]
    async fn test_blank_answer_is_not_used() {
        let advisor = Advisor::new(Scripted::new(vec![ok("   \n ")]));
        assert!(advisor.advise("hello").await.starts_with("Focus on the fundamentals"));
        assert_eq!(advisor.oracle().calls(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_timeouts_are_retried_then_fall_back() {
        let config = AdvisorConfig {
            request_timeout: Duration::from_secs(5),
            ..AdvisorConfig::default()
        };
        let advisor = Advisor::with_config(Stalled, config);
        let start = Instant::now();
        let text = advisor.advise("I'm young").await;
        assert!(text.starts_with("Starting early"));
        // three timed-out attempts plus 1s and 2s of backoff
        assert!(start.elapsed() >= Duration::from_secs(18));
    }

    #[tokio::test]
    async fn test_unconfigured_oracle_uses_local_text() {
        let advisor = Advisor::new(NoOracle);
        let ctx = AdviceContext {
            age: 24,
            income: 40_000.0,
            savings: 10_000.0,
            debt: 0.0,
        };
        let text = advisor.analyze_decision("Invest in index funds", &ctx).await;
        assert!(text.starts_with("Your young age"));

        let tips = advisor.personalized_tips(&profile()).await;
        assert!(!tips.ai_generated);
        assert_eq!(tips.provider, TipProvider::Local);
        assert_eq!(tips.tips.len(), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn test_personalized_tips_from_oracle() {
        let answer = "Here are three tips tailored to your situation and goals this year:\n\
                      • Open a high-yield account for the down payment\n\
                      • Keep credit utilization under 30 percent\n\
                      • Automate a monthly transfer on payday";
        let advisor = Advisor::new(Scripted::new(vec![ok(answer)]));
        let tips = advisor.personalized_tips(&profile()).await;
        assert!(tips.ai_generated);
        assert_eq!(tips.provider, TipProvider::Oracle);
        assert_eq!(tips.tips[0], "• Open a high-yield account for the down payment");
        assert_eq!(tips.tips.len(), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn test_personalized_tips_reject_unusable_text() {
        let canned = Advisor::new(Scripted::new(vec![ok("• Build an emergency fund\n• Spend less")]));
        assert!(!canned.personalized_tips(&profile()).await.ai_generated);

        let prose = "You are doing fine overall. Keep saving steadily, avoid new card balances, \
                     and revisit your budget each quarter to stay on track with the goal.";
        let unbulleted = Advisor::new(Scripted::new(vec![ok(prose)]));
        let tips = unbulleted.personalized_tips(&profile()).await;
        assert_eq!(tips.provider, TipProvider::Local);
    }

    #[tokio::test(start_paused = true)]
    async fn test_enrich_only_touches_reasoning() {
        let state = FinancialState::default();
        let decision = &generate_scenarios(14)[0];
        let local = recommend(&state, decision).unwrap();

        let advisor = Advisor::new(Scripted::new(vec![ok("A steady job teaches budgeting early.")]));
        let enriched = advisor.enrich(local.clone()).await;
        assert!(enriched.enriched);
        assert_eq!(enriched.reasoning, "A steady job teaches budgeting early.");
        assert_eq!(enriched.choice_id, local.choice_id);
        assert_eq!(enriched.analysis, local.analysis);
        assert_eq!(enriched.long_term_impact, local.long_term_impact);

        let failing = Advisor::new(Scripted::new(vec![Err(OracleError::Client("nope".into()))]));
        assert_eq!(failing.enrich(local.clone()).await, local);
    }
}
