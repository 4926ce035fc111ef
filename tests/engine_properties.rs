//! Property-based tests for the guess engine.
//!
//! Every run spawns an animator thread, so case counts are kept small and the
//! tick is 1 ms.

use pwd_brkr::animator::{AnimationConfig, MemorySink};
use pwd_brkr::core::{Alphabet, BreakRequest};
use pwd_brkr::engine::{BreakResult, GuessEngine, Outcome};
use proptest::prelude::*;
use std::sync::Arc;
use std::time::Duration;

fn printable_target(max_len: usize) -> impl Strategy<Value = String> {
    prop::collection::vec(prop::char::range(' ', '~'), 1..=max_len)
        .prop_map(|chars| chars.into_iter().collect())
}

fn fast_animation() -> AnimationConfig {
    AnimationConfig {
        tick: Duration::from_millis(1),
        ..AnimationConfig::default()
    }
}

fn run(request: &BreakRequest) -> (BreakResult, Arc<MemorySink>) {
    let alphabet = Alphabet::printable_ascii();
    let animation = fast_animation();
    let sink = Arc::new(MemorySink::new());
    let engine = GuessEngine::new(&alphabet, &animation, sink.clone());
    let result = engine.run(request).expect("valid request");
    (result, sink)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(24))]

    /// Any printable target is cracked, and steps grow the prefix one
    /// character at a time.
    #[test]
    fn cracks_any_printable_target(target in printable_target(6)) {
        let (result, _) = run(&BreakRequest::new(target.clone()));

        prop_assert_eq!(&result.outcome, &Outcome::Cracked(target.clone()));
        prop_assert_eq!(result.steps.len(), target.chars().count());
        for (i, step) in result.steps.iter().enumerate() {
            prop_assert!(target.starts_with(&step.prefix));
            prop_assert_eq!(step.prefix.chars().count(), i + 1);
        }
    }

    /// Attempts equal the sum of 1-based alphabet indices of the target.
    #[test]
    fn attempts_match_alphabet_positions(target in printable_target(6)) {
        let alphabet = Alphabet::printable_ascii();
        let (result, _) = run(&BreakRequest::new(target.clone()));

        prop_assert_eq!(Some(result.total_attempts), alphabet.attempts_for(&target));
        let per_step: u64 = result.steps.iter().map(|s| s.attempts).sum();
        prop_assert_eq!(per_step, result.total_attempts);
    }

    /// The same request always produces the same counts and steps.
    #[test]
    fn runs_are_deterministic(target in printable_target(4), limit in 1i64..40) {
        let request = BreakRequest::new(target)
            .with_rate_limit(limit)
            .with_cooldown_secs(0);

        let (first, _) = run(&request);
        let (second, _) = run(&request);

        prop_assert_eq!(first.outcome, second.outcome);
        prop_assert_eq!(first.total_attempts, second.total_attempts);
        prop_assert_eq!(first.cooldowns, second.cooldowns);
        prop_assert_eq!(first.steps, second.steps);
    }

    /// With limit k, a run of T attempts takes floor(T / k) cooldowns and the
    /// animator is cleared once per cooldown plus once at the end.
    #[test]
    fn cooldown_count_follows_limit(target in printable_target(4), limit in 1i64..60) {
        let request = BreakRequest::new(target)
            .with_rate_limit(limit)
            .with_cooldown_secs(0);
        let (result, sink) = run(&request);

        let k = limit as u64;
        prop_assert_eq!(result.cooldowns, result.total_attempts / k);
        prop_assert_eq!(sink.clear_count() as u64, result.cooldowns + 1);
    }
}

#[test]
fn five_char_target_with_small_limit() {
    let request = BreakRequest::new("a1B!z")
        .with_rate_limit(3)
        .with_cooldown_secs(0);
    let (result, sink) = run(&request);

    let alphabet = Alphabet::printable_ascii();
    let expected = alphabet.attempts_for("a1B!z").unwrap();

    assert_eq!(result.outcome, Outcome::Cracked("a1B!z".to_string()));
    assert_eq!(result.total_attempts, expected);
    assert_eq!(result.cooldowns, expected / 3);
    assert_eq!(sink.clear_count() as u64, result.cooldowns + 1);
}

#[test]
fn limit_equal_to_total_takes_one_cooldown() {
    // 'a' is the 66th symbol
    let request = BreakRequest::new("a")
        .with_rate_limit(66)
        .with_cooldown_secs(0);
    let (result, sink) = run(&request);

    assert_eq!(result.outcome, Outcome::Cracked("a".to_string()));
    assert_eq!(result.total_attempts, 66);
    assert_eq!(result.cooldowns, 1);
    assert_eq!(sink.clear_count(), 2);
}

#[test]
fn unlimited_run_takes_no_cooldowns() {
    let (result, sink) = run(&BreakRequest::new("~~~"));
    assert_eq!(result.total_attempts, 95 * 3);
    assert_eq!(result.cooldowns, 0);
    assert_eq!(sink.clear_count(), 1);
}
