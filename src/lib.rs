//! Deterministic benchmark harness for classic sorting algorithms.
//!
//! The harness generates integer arrays under several orderings (sorted,
//! nearly sorted, reversed), times five sorting routines on them, verifies
//! every output against the standard library's sort, and turns the
//! resulting run log into CSV reports and ASCII bar charts.
//!
//! Execution is single-threaded and fully deterministic: one `ChaCha8Rng`
//! seeded from the configuration drives both array generation and the
//! randomized quicksort's pivot choices.
//!
//! # Example
//!
//! ```
//! use sortbench::{run, BenchConfig, Shape};
//!
//! let config = BenchConfig {
//!     sizes: vec![16],
//!     shapes: vec![Shape::Reversed],
//!     ..BenchConfig::default()
//! };
//! let log = run(&config);
//!
//! // Five methods, each with one median record.
//! assert_eq!(log.iter().filter(|r| r.is_median()).count(), 5);
//! ```

mod error;
mod generate;
mod runner;
mod types;

pub mod export;
pub mod report;
pub mod sorts;

pub use error::HarnessError;
pub use generate::{generate, generate_with_swap_pct, NEARLY_SORTED_SWAP_PCT};
pub use runner::{run_with_methods, run_with_progress};
pub use types::{Attempt, MethodSummary, RankRecord, RunRecord, Shape, Status, TestCase};

use std::path::PathBuf;

/// Configuration for one harness run.
///
/// The defaults are the harness's fixed constants; they are deliberately
/// not command-line flags. Callers needing different values construct the
/// struct directly.
#[derive(Debug, Clone)]
pub struct BenchConfig {
    /// Array sizes to benchmark.
    pub sizes: Vec<usize>,
    /// Array orderings to benchmark.
    pub shapes: Vec<Shape>,
    /// Timed trials per combination.
    pub repetitions: u32,
    /// Insertion sort is skipped for sizes above this.
    pub insertion_cutoff: usize,
    /// Seed for the run's single RNG.
    pub seed: u64,
    /// Maximum bar width of the ASCII charts, in characters.
    pub chart_width: usize,
    /// Percentage of the array length used as the nearly-sorted swap count.
    pub nearly_sorted_swap_pct: usize,
    /// Directory the artifacts are written to.
    pub out_dir: PathBuf,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            sizes: vec![100, 1_000, 10_000, 100_000],
            shapes: vec![Shape::Sorted, Shape::NearlySorted, Shape::Reversed],
            repetitions: 3,
            insertion_cutoff: 1_000,
            seed: 42,
            chart_width: 48,
            nearly_sorted_swap_pct: NEARLY_SORTED_SWAP_PCT,
            out_dir: PathBuf::from("resultados_ordenamiento"),
        }
    }
}

/// Run the benchmark and return the full run log.
///
/// Pure computation: no files are written and nothing is printed. See
/// [`export::export_all`] for the artifact phase and
/// [`run_with_progress`] for live progress reporting.
pub fn run(config: &BenchConfig) -> Vec<RunRecord> {
    run_with_progress(config, |_| {})
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_constants() {
        let config = BenchConfig::default();
        assert_eq!(config.sizes, vec![100, 1_000, 10_000, 100_000]);
        assert_eq!(
            config.shapes,
            vec![Shape::Sorted, Shape::NearlySorted, Shape::Reversed]
        );
        assert_eq!(config.repetitions, 3);
        assert_eq!(config.insertion_cutoff, 1_000);
        assert_eq!(config.seed, 42);
        assert_eq!(config.chart_width, 48);
        assert_eq!(config.nearly_sorted_swap_pct, 5);
    }

    #[test]
    fn test_run_is_deterministic() {
        let config = BenchConfig {
            sizes: vec![32],
            shapes: vec![Shape::Random],
            ..BenchConfig::default()
        };
        let a = run(&config);
        let b = run(&config);

        // Timings differ between runs; everything else must not.
        assert_eq!(a.len(), b.len());
        for (ra, rb) in a.iter().zip(&b) {
            assert_eq!(ra.size, rb.size);
            assert_eq!(ra.shape, rb.shape);
            assert_eq!(ra.method, rb.method);
            assert_eq!(ra.attempt, rb.attempt);
            assert_eq!(ra.status, rb.status);
        }
    }
}
