//! Core types for the benchmark harness.

use std::fmt;

/// Structural ordering pattern of a generated test array.
///
/// The first three variants form the default shape list. `Random` is the
/// generator's fallback shape (a full shuffle); it is not benchmarked by
/// default but is available to callers building their own configurations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shape {
    Sorted,
    NearlySorted,
    Reversed,
    Random,
}

impl Shape {
    /// Token used in CSV cells and chart lines.
    ///
    /// The report artifacts use a Spanish vocabulary throughout; downstream
    /// consumers of the CSVs key on these exact strings.
    pub fn token(self) -> &'static str {
        match self {
            Shape::Sorted => "ordenado",
            Shape::NearlySorted => "medianamente ordenado",
            Shape::Reversed => "inverso",
            Shape::Random => "aleatorio",
        }
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

/// Outcome of one record in the run log.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// The sort produced the reference ordering.
    Ok,
    /// The sort produced something other than the reference ordering.
    Error,
    /// The combination was not executed (skip policy).
    Skipped,
}

impl Status {
    pub fn token(self) -> &'static str {
        match self {
            Status::Ok => "ok",
            Status::Error => "error",
            Status::Skipped => "omitido",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

/// Which measurement a [`RunRecord`] represents.
///
/// Skipped combinations carry no attempt at all (`Option::None` in the
/// record), matching the empty `intento` cell in the raw CSV.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Attempt {
    /// One timed trial, numbered from 1.
    Trial(u32),
    /// The per-combination aggregate over all trials.
    Median,
}

/// Immutable descriptor for one generated array: how many elements, in
/// which order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TestCase {
    pub size: usize,
    pub shape: Shape,
}

/// One append-only entry in the run log.
///
/// A combination produces one record per trial plus one median record, or a
/// single skipped record when the skip policy applies. Records are never
/// updated in place; every aggregate is recomputed from the full log.
#[derive(Debug, Clone, PartialEq)]
pub struct RunRecord {
    pub size: usize,
    pub shape: Shape,
    pub method: &'static str,
    /// `None` for skipped combinations.
    pub attempt: Option<Attempt>,
    /// Elapsed wall time of the sort call. `None` means skipped.
    pub seconds: Option<f64>,
    pub status: Status,
}

impl RunRecord {
    /// True for the per-combination aggregate record.
    #[inline]
    pub fn is_median(&self) -> bool {
        self.attempt == Some(Attempt::Median)
    }

    /// True for the single record of a skipped combination.
    #[inline]
    pub fn is_skipped(&self) -> bool {
        self.status == Status::Skipped
    }

    /// The `intento` CSV cell: a trial number, `mediana`, or empty.
    pub fn attempt_cell(&self) -> String {
        match self.attempt {
            Some(Attempt::Trial(n)) => n.to_string(),
            Some(Attempt::Median) => "mediana".to_string(),
            None => String::new(),
        }
    }
}

/// One ranked row: a combination's median annotated with its 1-based rank
/// within the (size, shape) group. Skipped methods sort last.
#[derive(Debug, Clone, PartialEq)]
pub struct RankRecord {
    pub size: usize,
    pub shape: Shape,
    pub method: &'static str,
    pub seconds: Option<f64>,
    pub status: Status,
    pub rank: usize,
}

/// Aggregate view of one method across every combination it was ranked in.
#[derive(Debug, Clone, PartialEq)]
pub struct MethodSummary {
    pub method: &'static str,
    /// Number of combinations where this method ranked first.
    pub wins: usize,
    /// Mean rank over all the method's rank rows; `None` if it never ranked.
    pub avg_rank: Option<f64>,
    /// Mean elapsed time over rows with a time; `None` if all were skipped.
    pub avg_seconds: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shape_tokens() {
        assert_eq!(Shape::Sorted.token(), "ordenado");
        assert_eq!(Shape::NearlySorted.token(), "medianamente ordenado");
        assert_eq!(Shape::Reversed.token(), "inverso");
        assert_eq!(Shape::Random.token(), "aleatorio");
    }

    #[test]
    fn test_attempt_cell() {
        let base = RunRecord {
            size: 10,
            shape: Shape::Sorted,
            method: "mezcla",
            attempt: Some(Attempt::Trial(2)),
            seconds: Some(0.001),
            status: Status::Ok,
        };
        assert_eq!(base.attempt_cell(), "2");

        let median = RunRecord {
            attempt: Some(Attempt::Median),
            ..base.clone()
        };
        assert_eq!(median.attempt_cell(), "mediana");
        assert!(median.is_median());

        let skipped = RunRecord {
            attempt: None,
            seconds: None,
            status: Status::Skipped,
            ..base
        };
        assert_eq!(skipped.attempt_cell(), "");
        assert!(skipped.is_skipped());
        assert!(!skipped.is_median());
    }
}
