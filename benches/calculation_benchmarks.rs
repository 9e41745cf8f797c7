//! Performance benchmarks for the legal calculation engine.
//!
//! This benchmark suite verifies that the engine stays well inside
//! interactive-form latency:
//! - Single calculation: < 10μs mean
//! - Full catalog sweep (all ten kinds): < 100μs mean
//! - HTTP round trip through the router: < 1ms mean
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use juscalc::api::{AppState, create_router};
use juscalc::calculation::compute;
use juscalc::catalog::CalculationKind;
use juscalc::models::InputRecord;

use axum::{body::Body, http::Request};
use tower::ServiceExt;

/// Representative form input for a calculation kind.
fn representative_input(kind: CalculationKind) -> InputRecord {
    match kind {
        CalculationKind::SeverancePay => InputRecord::new()
            .with("base_salary", 3000)
            .with("months_worked", 26)
            .with("unused_vacation_periods", 1)
            .with("notice_type", "indemnified")
            .with("termination_reason", "without_cause"),
        CalculationKind::Overtime => InputRecord::new()
            .with("base_salary", 2200)
            .with("monthly_hours", 220)
            .with("overtime_hours", 10)
            .with("premium_percent", 50),
        CalculationKind::NightShiftPremium => InputRecord::new()
            .with("base_salary", 2200)
            .with("night_hours", 40),
        CalculationKind::UnhealthyConditionsPremium => InputRecord::new()
            .with("minimum_wage", 1412)
            .with("degree_percent", 20)
            .with("months", 12),
        CalculationKind::HazardPremium => InputRecord::new()
            .with("base_salary", 3000)
            .with("months", 12),
        CalculationKind::MonetaryCorrection => InputRecord::new()
            .with("original_value", 1000)
            .with("start_date", "2024-01-01")
            .with("end_date", "2024-07-01")
            .with("index", "ipca")
            .with("monthly_interest_percent", 1),
        CalculationKind::AttorneyFees => InputRecord::new()
            .with("case_value", 100000)
            .with("percent", 10),
        CalculationKind::ChildSupport => InputRecord::new()
            .with("payer_monthly_income", 5000)
            .with("percent", 30)
            .with("child_count", 2),
        CalculationKind::AssetDivision => InputRecord::new()
            .with("total_assets", 800000)
            .with("percent", 50),
        CalculationKind::ContributionTime => InputRecord::new()
            .with("start_date", "2000-01-01")
            .with("end_date", "2020-01-01"),
    }
}

/// Benchmark: each calculation kind on its own.
///
/// Target: < 10μs mean
fn bench_single_calculations(c: &mut Criterion) {
    let mut group = c.benchmark_group("single_calculation");

    for kind in CalculationKind::all() {
        let input = representative_input(*kind);
        group.bench_with_input(BenchmarkId::new("kind", kind), kind, |b, kind| {
            b.iter(|| black_box(compute(*kind, black_box(&input))))
        });
    }

    group.finish();
}

/// Benchmark: one pass over every calculation kind.
///
/// Target: < 100μs mean
fn bench_catalog_sweep(c: &mut Criterion) {
    let inputs: Vec<(CalculationKind, InputRecord)> = CalculationKind::all()
        .iter()
        .map(|kind| (*kind, representative_input(*kind)))
        .collect();

    let mut group = c.benchmark_group("catalog_sweep");
    group.throughput(Throughput::Elements(inputs.len() as u64));

    group.bench_function("all_kinds", |b| {
        b.iter(|| {
            let mut results = Vec::with_capacity(inputs.len());
            for (kind, input) in &inputs {
                results.push(compute(*kind, input));
            }
            black_box(results)
        })
    });

    group.finish();
}

/// Benchmark: full HTTP round trip through the router.
///
/// Target: < 1ms mean
fn bench_http_calculate(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let state = AppState::new();
    let router = create_router(state);

    let body = serde_json::json!({
        "kind": "severance_pay",
        "input": {
            "base_salary": "3000",
            "months_worked": 26,
            "notice_type": "indemnified",
            "termination_reason": "without_cause"
        }
    })
    .to_string();

    c.bench_function("http_calculate", |b| {
        b.to_async(&rt).iter(|| async {
            let router = router.clone();
            let response = router
                .oneshot(
                    Request::builder()
                        .method("POST")
                        .uri("/calculate")
                        .header("Content-Type", "application/json")
                        .body(Body::from(body.clone()))
                        .unwrap(),
                )
                .await
                .unwrap();
            black_box(response)
        })
    });
}

criterion_group!(
    benches,
    bench_single_calculations,
    bench_catalog_sweep,
    bench_http_calculate,
);
criterion_main!(benches);
