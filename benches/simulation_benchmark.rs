//! Benchmark for simulation performance
//!
//! Target: a full playthrough should complete well under 1ms

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use life_ledger_core::finance::{FinancialState, StateOverrides};
use life_ledger_core::scenario::generate_scenarios;
use life_ledger_core::scoring::{recommend, DecisionScorer};
use life_ledger_core::simulator::{find_preset, GameSession};

/// Play a session to completion, always taking the recommended choice
fn play_recommended(session: &mut GameSession) {
    while let Some(rec) = session.recommend_current() {
        if session
            .make_decision(&rec.decision_id, &rec.choice_id)
            .is_err()
        {
            break;
        }
    }
}

fn benchmark_generation(c: &mut Criterion) {
    c.bench_function("generate_scenarios_teen", |b| {
        b.iter(|| black_box(generate_scenarios(black_box(14))))
    });

    c.bench_function("generate_scenarios_mid_career", |b| {
        b.iter(|| black_box(generate_scenarios(black_box(40))))
    });
}

fn benchmark_scoring(c: &mut Criterion) {
    let state = FinancialState::default()
        .with_age(32)
        .with_income(65_000.0)
        .with_monthly_expenses(3_200.0)
        .with_savings(12_000.0)
        .with_debt(18_000.0)
        .with_investments(25_000.0);
    let decisions = generate_scenarios(30);
    let decision = &decisions[0];

    c.bench_function("score_decision", |b| {
        b.iter(|| {
            let scorer = DecisionScorer::new(black_box(&state), &decision.category);
            black_box(scorer.analyze_all(&decision.choices))
        })
    });

    c.bench_function("recommend_decision", |b| {
        b.iter(|| black_box(recommend(black_box(&state), decision)))
    });
}

fn benchmark_playthrough(c: &mut Criterion) {
    c.bench_function("full_playthrough_default", |b| {
        b.iter(|| {
            let mut session = GameSession::new();
            if session.initialize(None).is_ok() {
                play_recommended(&mut session);
            }
            black_box(session)
        })
    });

    let overrides: Option<StateOverrides> = find_preset("young-professional").map(|p| p.overrides.clone());
    c.bench_function("full_playthrough_with_rewind", |b| {
        b.iter(|| {
            let mut session = GameSession::new();
            if session.initialize(overrides.clone()).is_ok() {
                play_recommended(&mut session);
                let _ = session.rewind_to_age(30);
                play_recommended(&mut session);
            }
            black_box(session)
        })
    });
}

criterion_group!(benches, benchmark_generation, benchmark_scoring, benchmark_playthrough);
criterion_main!(benches);
