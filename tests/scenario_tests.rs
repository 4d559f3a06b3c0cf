//! End-to-end engine scenarios over the public library API.

use std::num::NonZeroUsize;

use tokio_util::sync::CancellationToken;

use digitlens::engine::{AnalysisOptions, CooperativeYield, EagerYield, NoopSink, run_analysis};
use digitlens::{NumericToken, Verdict};

/// 150 tokens whose leading digits match the rounded Benford shares,
/// spanning four orders of magnitude.
fn benford_tokens() -> Vec<NumericToken> {
    let counts: [usize; 9] = [45, 26, 19, 15, 12, 10, 9, 8, 6];
    let mut tokens = Vec::new();
    for (i, &n) in counts.iter().enumerate() {
        let digit = (i + 1) as u64;
        for k in 0..n {
            tokens.push(NumericToken::from(digit * 10u64.pow((k % 4) as u32)));
        }
    }
    tokens
}

async fn analyze(tokens: &[NumericToken]) -> digitlens::AnalysisOutcome {
    run_analysis(
        tokens,
        &AnalysisOptions::default(),
        &mut NoopSink,
        &EagerYield,
        &CancellationToken::new(),
    )
    .await
    .unwrap()
}

#[tokio::test]
async fn test_benford_conforming_sample_is_consistent() {
    let outcome = analyze(&benford_tokens()).await;

    assert_eq!(outcome.result.verdict, Verdict::Consistent);
    assert!(outcome.result.sample_compliant);
    let test = outcome.result.test.unwrap();
    assert!(test.statistic < 1.0, "statistic was {}", test.statistic);
    assert!(test.p_value > 0.999, "p-value was {}", test.p_value);
}

#[tokio::test]
async fn test_constant_sample_is_not_applicable() {
    let tokens: Vec<NumericToken> = (0..150).map(|_| NumericToken::from("500")).collect();
    let outcome = analyze(&tokens).await;

    assert_eq!(outcome.result.verdict, Verdict::NotApplicable);
    assert!(!outcome.result.sample_compliant);
    assert!(outcome.result.test.is_none());
    // The histogram is still fully accumulated.
    assert_eq!(outcome.histogram.count(5), 150);
}

#[tokio::test]
async fn test_small_sample_is_insufficient_data() {
    let tokens: Vec<NumericToken> =
        (0..50).map(|i| NumericToken::from((i % 9 + 1) as u64 * 10u64.pow((i % 4) as u32))).collect();
    let outcome = analyze(&tokens).await;

    assert_eq!(outcome.result.verdict, Verdict::InsufficientData);
    assert!(outcome.result.test.is_none());
}

#[tokio::test]
async fn test_skewed_sample_is_anomalous() {
    let tokens: Vec<NumericToken> =
        (0..150).map(|i| NumericToken::from(9 * 10u64.pow(i % 5))).collect();
    let outcome = analyze(&tokens).await;

    assert_eq!(outcome.result.verdict, Verdict::Anomalous);
    assert!(outcome.result.sample_compliant);
    let test = outcome.result.test.unwrap();
    assert!(test.statistic > 1000.0, "statistic was {}", test.statistic);
    assert!(test.p_value < 0.05, "p-value was {}", test.p_value);
}

#[tokio::test]
async fn test_noise_lands_in_the_excluded_bucket() {
    let mut tokens = benford_tokens();
    tokens.push(NumericToken::from("n/a"));
    tokens.push(NumericToken::from("0"));
    let outcome = analyze(&tokens).await;

    assert_eq!(outcome.histogram.excluded(), 2);
    assert_eq!(outcome.histogram.valid_total(), 150);
    // The verdict is unchanged by excluded noise.
    assert_eq!(outcome.result.verdict, Verdict::Consistent);
}

#[tokio::test]
async fn test_batch_size_only_changes_cadence() {
    let tokens = benford_tokens();
    let mut reference = None;

    for batch_size in [1usize, 7, 100, 1000] {
        let options = AnalysisOptions {
            batch_size: NonZeroUsize::new(batch_size).unwrap(),
            ..AnalysisOptions::default()
        };
        let outcome = run_analysis(
            &tokens,
            &options,
            &mut NoopSink,
            &EagerYield,
            &CancellationToken::new(),
        )
        .await
        .unwrap();

        match &reference {
            None => reference = Some(outcome),
            Some(expected) => assert_eq!(&outcome, expected),
        }
    }
}

#[tokio::test]
async fn test_cooperative_yield_matches_the_eager_result() {
    let tokens = benford_tokens();
    let eager = analyze(&tokens).await;
    let cooperative = run_analysis(
        &tokens,
        &AnalysisOptions::default(),
        &mut NoopSink,
        &CooperativeYield,
        &CancellationToken::new(),
    )
    .await
    .unwrap();

    assert_eq!(eager, cooperative);
}

#[tokio::test]
async fn test_empty_sequence_completes_with_insufficient_data() {
    let outcome = analyze(&[]).await;

    assert_eq!(outcome.histogram.total(), 0);
    assert_eq!(outcome.result.verdict, Verdict::InsufficientData);
}
