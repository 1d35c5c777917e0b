//! Performance benchmarks for the training duration engine.
//!
//! Covers a single in-process calculation, the HTTP round trip and a batch
//! of varied requests through the router.
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use training_duration_engine::api::{AppState, create_router};
use training_duration_engine::calculation::DurationCalculator;
use training_duration_engine::config::ConfigLoader;
use training_duration_engine::models::{DurationRequest, ShorteningGrounds};

use axum::{body::Body, http::Request};
use tower::ServiceExt;

/// Creates a test state with loaded configuration.
fn create_test_state() -> AppState {
    let config = ConfigLoader::load("./config/bbig").expect("Failed to load config");
    AppState::new(config)
}

/// Creates a request body for the given base duration and share.
fn create_request_body(base: u32, percentage: u32, with_grounds: bool) -> String {
    serde_json::json!({
        "base_duration_months": base,
        "full_time_hours": "37,5",
        "part_time_input": percentage,
        "input_kind": "percentage",
        "shortening_grounds": {
            "higher_education_entry": with_grounds,
            "over_21": with_grounds,
            "prior_experience_months": if with_grounds { 6 } else { 0 }
        }
    })
    .to_string()
}

/// Benchmark: Single calculation without HTTP.
fn bench_single_calculation(c: &mut Criterion) {
    let calculator = DurationCalculator::default();
    let request = DurationRequest::percentage(36, 40, 70).with_grounds(ShorteningGrounds {
        higher_education_entry: true,
        ..ShorteningGrounds::default()
    });

    c.bench_function("single_calculation", |b| {
        b.iter(|| black_box(calculator.calculate(black_box(&request))))
    });
}

/// Benchmark: One request through the router.
fn bench_http_round_trip(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let router = create_router(create_test_state());
    let body = create_request_body(36, 75, true);

    c.bench_function("http_round_trip", |b| {
        b.to_async(&rt).iter(|| async {
            let router = router.clone();
            let response = router
                .oneshot(
                    Request::builder()
                        .method("POST")
                        .uri("/api/calculate")
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

/// Benchmark: Batches of varied requests through the router.
fn bench_batches(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let state = create_test_state();

    let mut group = c.benchmark_group("batch_processing");

    for batch_size in [10usize, 100, 1000].iter() {
        let requests: Vec<String> = (0..*batch_size)
            .map(|i| {
                let base = 24 + (i % 19) as u32;
                let percentage = 50 + (i % 51) as u32;
                create_request_body(base, percentage, i % 2 == 0)
            })
            .collect();

        group.throughput(Throughput::Elements(*batch_size as u64));
        group.bench_with_input(BenchmarkId::new("requests", batch_size), batch_size, |b, _| {
            b.to_async(&rt).iter(|| async {
                let mut results = Vec::with_capacity(requests.len());
                for body in &requests {
                    let router = create_router(state.clone());
                    let response = router
                        .oneshot(
                            Request::builder()
                                .method("POST")
                                .uri("/api/calculate")
                                .header("Content-Type", "application/json")
                                .body(Body::from(body.clone()))
                                .unwrap(),
                        )
                        .await
                        .unwrap();
                    results.push(response);
                }
                black_box(results)
            })
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_single_calculation,
    bench_http_round_trip,
    bench_batches,
);
criterion_main!(benches);
