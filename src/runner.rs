//! The benchmark runner: drives sizes × shapes × methods and produces the
//! immutable run log.
//!
//! The runner is a pure computation phase and performs no I/O of its own.
//! Callers that want live progress pass an observer, which is invoked after
//! each record is appended (always outside the timing window), so reporting
//! latency can never leak into a measurement.

use std::time::Instant;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::generate::generate_with_swap_pct;
use crate::sorts::{SortFn, INSERTION_METHOD, METHODS};
use crate::types::{Attempt, RunRecord, Status};
use crate::BenchConfig;

/// Run the full benchmark with the fixed method registry, invoking the
/// observer after each record.
///
/// Seeds one `ChaCha8Rng` from `config.seed`; it is the run's only source
/// of randomness.
pub fn run_with_progress(
    config: &BenchConfig,
    on_record: impl FnMut(&RunRecord),
) -> Vec<RunRecord> {
    let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
    run_with_methods(config, METHODS, &mut rng, on_record)
}

/// Run the full benchmark over an explicit method table.
///
/// One combination is one (size, shape, method) triple, visited in
/// configuration order with methods in table order. Each non-skipped
/// combination runs `config.repetitions` trials on freshly generated
/// arrays, then appends a median record. A single erroring trial taints
/// the combination's median record to `error`; the median time is still
/// computed over all trial timings.
pub fn run_with_methods(
    config: &BenchConfig,
    methods: &[(&'static str, SortFn)],
    rng: &mut ChaCha8Rng,
    mut on_record: impl FnMut(&RunRecord),
) -> Vec<RunRecord> {
    assert!(config.repetitions > 0, "repetitions must be > 0");
    assert!(!config.sizes.is_empty(), "size list must be non-empty");
    assert!(!config.shapes.is_empty(), "shape list must be non-empty");

    let mut log = Vec::new();

    for &size in &config.sizes {
        for &shape in &config.shapes {
            for &(method, sort) in methods {
                // Skip policy: insertion sort is O(n²); past the cutoff it
                // would dominate total runtime.
                if method == INSERTION_METHOD && size > config.insertion_cutoff {
                    push(
                        &mut log,
                        &mut on_record,
                        RunRecord {
                            size,
                            shape,
                            method,
                            attempt: None,
                            seconds: None,
                            status: Status::Skipped,
                        },
                    );
                    continue;
                }

                let mut times = Vec::with_capacity(config.repetitions as usize);
                let mut all_ok = true;

                for attempt in 1..=config.repetitions {
                    let input = generate_with_swap_pct(
                        size,
                        shape,
                        config.nearly_sorted_swap_pct,
                        rng,
                    );
                    // Reference ordering, computed outside the timed window.
                    let mut expected = input.clone();
                    expected.sort();

                    let start = Instant::now();
                    let output = sort(&input, rng);
                    let seconds = start.elapsed().as_secs_f64();

                    let status = if output == expected {
                        Status::Ok
                    } else {
                        all_ok = false;
                        Status::Error
                    };
                    times.push(seconds);
                    push(
                        &mut log,
                        &mut on_record,
                        RunRecord {
                            size,
                            shape,
                            method,
                            attempt: Some(Attempt::Trial(attempt)),
                            seconds: Some(seconds),
                            status,
                        },
                    );
                }

                push(
                    &mut log,
                    &mut on_record,
                    RunRecord {
                        size,
                        shape,
                        method,
                        attempt: Some(Attempt::Median),
                        seconds: Some(median(&times)),
                        status: if all_ok { Status::Ok } else { Status::Error },
                    },
                );
            }
        }
    }

    log
}

fn push(log: &mut Vec<RunRecord>, on_record: &mut impl FnMut(&RunRecord), record: RunRecord) {
    on_record(&record);
    log.push(record);
}

/// Median of a non-empty sample, averaging the middle pair for even sizes.
fn median(xs: &[f64]) -> f64 {
    debug_assert!(!xs.is_empty());
    let mut xs = xs.to_vec();
    xs.sort_by(|a, b| a.partial_cmp(b).unwrap());
    let mid = xs.len() / 2;
    if xs.len() % 2 == 0 {
        0.5 * (xs[mid - 1] + xs[mid])
    } else {
        xs[mid]
    }
}
