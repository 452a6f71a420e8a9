//! Derived views over the run log: median subsets, per-combination
//! ranking, per-method summaries, and ASCII bar charts.
//!
//! Everything here is a pure function of the immutable log; nothing
//! mutates earlier records.

use std::cmp::Ordering;

use rustc_hash::FxHashMap;

use crate::types::{MethodSummary, RankRecord, RunRecord, Shape};

/// The median-only subset of the log, in log order.
pub fn medians(records: &[RunRecord]) -> Vec<RunRecord> {
    records
        .iter()
        .filter(|r| r.is_median())
        .cloned()
        .collect()
}

/// One row per combination: the median record, or the skipped record for
/// combinations the skip policy excluded. This is the input to ranking and
/// charts, where skipped methods still occupy a slot.
pub fn combination_rows(records: &[RunRecord]) -> Vec<RunRecord> {
    records
        .iter()
        .filter(|r| r.is_median() || r.is_skipped())
        .cloned()
        .collect()
}

/// Rank combinations within each (size, shape) group.
///
/// Groups are visited in configuration order. Within a group, rows are
/// stable-sorted ascending by elapsed time with missing times treated as
/// +∞, so skipped methods sort last and the non-skipped methods hold the
/// ranks 1..N exactly. Ties keep log order (stable sort).
pub fn rank_by_combination(
    rows: &[RunRecord],
    sizes: &[usize],
    shapes: &[Shape],
) -> Vec<RankRecord> {
    let mut out = Vec::new();
    for &size in sizes {
        for &shape in shapes {
            let mut group: Vec<&RunRecord> = rows
                .iter()
                .filter(|r| r.size == size && r.shape == shape)
                .collect();
            group.sort_by(|a, b| {
                let ta = a.seconds.unwrap_or(f64::INFINITY);
                let tb = b.seconds.unwrap_or(f64::INFINITY);
                ta.partial_cmp(&tb).unwrap_or(Ordering::Equal)
            });
            for (idx, r) in group.iter().enumerate() {
                out.push(RankRecord {
                    size,
                    shape,
                    method: r.method,
                    seconds: r.seconds,
                    status: r.status,
                    rank: idx + 1,
                });
            }
        }
    }
    out
}

/// Summarize each method across all its rank rows: how often it won, its
/// average rank, and its average elapsed time over rows with a time.
///
/// `methods` fixes the output order (normally registration order).
pub fn method_summaries(ranking: &[RankRecord], methods: &[&'static str]) -> Vec<MethodSummary> {
    #[derive(Default)]
    struct Acc {
        wins: usize,
        rank_sum: usize,
        rank_count: usize,
        time_sum: f64,
        time_count: usize,
    }

    let mut acc: FxHashMap<&str, Acc> = FxHashMap::default();
    for r in ranking {
        let entry = acc.entry(r.method).or_default();
        if r.rank == 1 {
            entry.wins += 1;
        }
        entry.rank_sum += r.rank;
        entry.rank_count += 1;
        if let Some(t) = r.seconds {
            entry.time_sum += t;
            entry.time_count += 1;
        }
    }

    methods
        .iter()
        .map(|&method| {
            let a = acc.get(method);
            MethodSummary {
                method,
                wins: a.map_or(0, |a| a.wins),
                avg_rank: a.and_then(|a| {
                    (a.rank_count > 0).then(|| a.rank_sum as f64 / a.rank_count as f64)
                }),
                avg_seconds: a.and_then(|a| {
                    (a.time_count > 0).then(|| a.time_sum / a.time_count as f64)
                }),
            }
        })
        .collect()
}

/// Build the chart lines for one size: a header, then one bar line per
/// (method, shape) pair present at that size, sorted by method then shape.
///
/// Bar lengths are proportional to the group's slowest time, rounded, and
/// never shorter than one character; skipped entries get a literal
/// placeholder instead of a bar.
pub fn chart_lines(rows: &[RunRecord], size: usize, width: usize) -> Vec<String> {
    let mut group: Vec<&RunRecord> = rows.iter().filter(|r| r.size == size).collect();
    group.sort_by(|a, b| {
        (a.method, a.shape.token()).cmp(&(b.method, b.shape.token()))
    });

    let max_time = group
        .iter()
        .filter_map(|r| r.seconds)
        .fold(0.0f64, f64::max);
    let max_time = if max_time > 0.0 { max_time } else { 1.0 };

    let mut lines = Vec::with_capacity(group.len() + 1);
    lines.push(format!("Gráfica ASCII - tamaño {size}"));
    for r in &group {
        let (bar, time) = match r.seconds {
            Some(t) => {
                let len = ((t / max_time) * width as f64).round() as usize;
                ("#".repeat(len.max(1)), format!(" {t:.6}s"))
            }
            None => ("(omitido)".to_string(), String::new()),
        };
        lines.push(format!("{:15} | {:22} | {}{}", r.method, r.shape.token(), bar, time));
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Attempt, Status};

    fn median_row(
        size: usize,
        shape: Shape,
        method: &'static str,
        seconds: f64,
    ) -> RunRecord {
        RunRecord {
            size,
            shape,
            method,
            attempt: Some(Attempt::Median),
            seconds: Some(seconds),
            status: Status::Ok,
        }
    }

    fn skipped_row(size: usize, shape: Shape, method: &'static str) -> RunRecord {
        RunRecord {
            size,
            shape,
            method,
            attempt: None,
            seconds: None,
            status: Status::Skipped,
        }
    }

    #[test]
    fn test_ranking_orders_by_time_with_skips_last() {
        let rows = vec![
            median_row(10, Shape::Sorted, "mezcla", 0.003),
            median_row(10, Shape::Sorted, "estandar", 0.001),
            skipped_row(10, Shape::Sorted, "insercion"),
            median_row(10, Shape::Sorted, "monticulo", 0.002),
        ];
        let ranking = rank_by_combination(&rows, &[10], &[Shape::Sorted]);

        let order: Vec<(&str, usize)> = ranking.iter().map(|r| (r.method, r.rank)).collect();
        assert_eq!(
            order,
            vec![
                ("estandar", 1),
                ("monticulo", 2),
                ("mezcla", 3),
                ("insercion", 4)
            ]
        );
    }

    #[test]
    fn test_ranking_is_complete_per_group() {
        let rows = vec![
            median_row(10, Shape::Sorted, "a", 0.2),
            median_row(10, Shape::Sorted, "b", 0.1),
            median_row(20, Shape::Sorted, "a", 0.1),
            median_row(20, Shape::Sorted, "b", 0.2),
        ];
        let ranking = rank_by_combination(&rows, &[10, 20], &[Shape::Sorted]);
        for &size in &[10, 20] {
            let mut ranks: Vec<usize> = ranking
                .iter()
                .filter(|r| r.size == size)
                .map(|r| r.rank)
                .collect();
            ranks.sort_unstable();
            assert_eq!(ranks, vec![1, 2]);
        }
    }

    #[test]
    fn test_ranking_ties_keep_log_order() {
        let rows = vec![
            median_row(10, Shape::Sorted, "first", 0.5),
            median_row(10, Shape::Sorted, "second", 0.5),
        ];
        let ranking = rank_by_combination(&rows, &[10], &[Shape::Sorted]);
        assert_eq!(ranking[0].method, "first");
        assert_eq!(ranking[1].method, "second");
    }

    #[test]
    fn test_method_summaries() {
        let rows = vec![
            median_row(10, Shape::Sorted, "a", 0.1),
            median_row(10, Shape::Sorted, "b", 0.2),
            median_row(20, Shape::Sorted, "a", 0.3),
            median_row(20, Shape::Sorted, "b", 0.1),
        ];
        let ranking = rank_by_combination(&rows, &[10, 20], &[Shape::Sorted]);
        let summaries = method_summaries(&ranking, &["a", "b"]);

        assert_eq!(summaries[0].method, "a");
        assert_eq!(summaries[0].wins, 1);
        assert_eq!(summaries[0].avg_rank, Some(1.5));
        assert!((summaries[0].avg_seconds.unwrap() - 0.2).abs() < 1e-12);

        assert_eq!(summaries[1].wins, 1);
        assert_eq!(summaries[1].avg_rank, Some(1.5));
    }

    #[test]
    fn test_summary_for_always_skipped_method() {
        let rows = vec![
            median_row(10, Shape::Sorted, "a", 0.1),
            skipped_row(10, Shape::Sorted, "lento"),
        ];
        let ranking = rank_by_combination(&rows, &[10], &[Shape::Sorted]);
        let summaries = method_summaries(&ranking, &["a", "lento"]);

        let lento = &summaries[1];
        assert_eq!(lento.wins, 0);
        assert_eq!(lento.avg_rank, Some(2.0));
        assert_eq!(lento.avg_seconds, None);
    }

    #[test]
    fn test_chart_lines_scaling_and_placeholder() {
        let rows = vec![
            median_row(10, Shape::Sorted, "a", 0.048),
            median_row(10, Shape::Reversed, "a", 0.001),
            skipped_row(10, Shape::Sorted, "lento"),
        ];
        let lines = chart_lines(&rows, 10, 48);

        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "Gráfica ASCII - tamaño 10");
        // Slowest entry fills the full width.
        assert!(lines[2].contains(&"#".repeat(48)), "{}", lines[2]);
        // Fast entries still get at least one character.
        assert!(lines[1].contains("| #"), "{}", lines[1]);
        // Skipped entries render the placeholder, no time suffix.
        assert!(lines[3].contains("(omitido)"), "{}", lines[3]);
        assert!(!lines[3].contains('#'));
    }

    #[test]
    fn test_chart_lines_sorted_by_method_then_shape() {
        let rows = vec![
            median_row(10, Shape::Reversed, "b", 0.2),
            median_row(10, Shape::Sorted, "b", 0.1),
            median_row(10, Shape::Reversed, "a", 0.3),
        ];
        let lines = chart_lines(&rows, 10, 48);
        assert!(lines[1].starts_with("a "));
        assert!(lines[2].starts_with("b ") && lines[2].contains("inverso"));
        assert!(lines[3].starts_with("b ") && lines[3].contains("ordenado"));
    }

    #[test]
    fn test_medians_and_combination_rows_subsets() {
        let trial = RunRecord {
            size: 10,
            shape: Shape::Sorted,
            method: "a",
            attempt: Some(Attempt::Trial(1)),
            seconds: Some(0.1),
            status: Status::Ok,
        };
        let rows = vec![
            trial,
            median_row(10, Shape::Sorted, "a", 0.1),
            skipped_row(10, Shape::Sorted, "lento"),
        ];
        assert_eq!(medians(&rows).len(), 1);
        assert_eq!(combination_rows(&rows).len(), 2);
    }
}
