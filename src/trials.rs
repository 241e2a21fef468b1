use std::time::{Duration, Instant};

use rand::Rng;
use serde::Serialize;
use tracing::debug;

use crate::error::{Error, Result};
use crate::search::SearchKind;
use crate::sort::SortKind;

/// Every run performs exactly this many trials.
pub const TRIAL_COUNT: usize = 10;

/// How instance sizes grow across the trials.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SizeSchedule {
    /// `base * trial`.
    Scaled { base: usize },
    /// Interpolated from `min` to `max` in equal steps; the last trial
    /// lands exactly on `max`.
    Spread { min: i64, max: i64 },
}

impl SizeSchedule {
    /// Instance size for a 1-based trial index. Interpolated sizes that
    /// fall below zero clamp to an empty instance.
    pub fn size_for(&self, trial: usize) -> usize {
        match *self {
            SizeSchedule::Scaled { base } => base * trial,
            SizeSchedule::Spread { min, max } => {
                if trial >= TRIAL_COUNT {
                    return max.max(0) as usize;
                }
                let step = (max - min) / (TRIAL_COUNT as i64 - 1);
                (min + (trial as i64 - 1) * step).max(0) as usize
            }
        }
    }
}

/// Uniform random integers in `[min, max]`, both inclusive.
pub fn random_array<R: Rng>(len: usize, min: i64, max: i64, rng: &mut R) -> Vec<i64> {
    (0..len).map(|_| rng.gen_range(min..=max)).collect()
}

/// Per-trial extra detail beyond the timings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TrialOutcome {
    /// Sort trials carry nothing beyond the timing.
    Sorted,
    /// Search trials record what was probed and where it was found.
    Search {
        largest: i64,
        target: i64,
        position: Option<usize>,
    },
}

/// One row of the result table: trial index, instance size, one elapsed
/// time per timed algorithm (parallel to the report's labels).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrialRecord {
    pub trial: usize,
    pub size: usize,
    pub timings: Vec<Duration>,
    pub outcome: TrialOutcome,
}

/// Everything a table or chart renderer needs from one run. Returned by
/// the run functions rather than held as ambient state; `clear` restores
/// the empty state a fresh report starts in.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TrialReport {
    labels: Vec<String>,
    rows: Vec<TrialRecord>,
}

impl TrialReport {
    pub fn new() -> Self {
        Self::default()
    }

    fn with_labels(labels: Vec<String>) -> Self {
        Self {
            labels,
            rows: Vec::new(),
        }
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn rows(&self) -> &[TrialRecord] {
        &self.rows
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty() && self.rows.is_empty()
    }

    /// One `(label, per-trial milliseconds)` pair per timed algorithm,
    /// in the shape a line chart consumes.
    pub fn series(&self) -> Vec<(String, Vec<f64>)> {
        self.labels
            .iter()
            .enumerate()
            .map(|(index, label)| {
                let times = self
                    .rows
                    .iter()
                    .map(|row| row.timings[index].as_secs_f64() * 1_000.0)
                    .collect();
                (label.clone(), times)
            })
            .collect()
    }

    /// Discard all accumulated results.
    pub fn clear(&mut self) {
        self.labels.clear();
        self.rows.clear();
    }

    fn push(&mut self, row: TrialRecord) {
        debug_assert_eq!(row.timings.len(), self.labels.len());
        self.rows.push(row);
    }
}

fn timed<T>(work: impl FnOnce() -> T) -> (T, Duration) {
    let start = Instant::now();
    let value = work();
    (value, start.elapsed())
}

/// Ten search trials over freshly drawn sorted arrays with values in
/// `[min, max]`. Half the time the probed target is an element actually
/// present, otherwise an arbitrary value from the range.
pub fn run_search_trials<R: Rng>(
    kind: SearchKind,
    min: i64,
    max: i64,
    rng: &mut R,
) -> Result<TrialReport> {
    if min >= max {
        return Err(Error::InvalidRange { min, max });
    }

    let schedule = SizeSchedule::Spread { min, max };
    let mut report = TrialReport::with_labels(vec![kind.label().to_string()]);

    for trial in 1..=TRIAL_COUNT {
        let size = schedule.size_for(trial);
        let mut data = random_array(size, min, max, rng);
        data.sort_unstable();

        let largest = data.last().copied().unwrap_or(min);
        let target = if rng.gen_bool(0.5) && !data.is_empty() {
            data[rng.gen_range(0..data.len())]
        } else {
            rng.gen_range(min..=max)
        };

        let (position, elapsed) = timed(|| kind.run(&data, target));
        report.push(TrialRecord {
            trial,
            size,
            timings: vec![elapsed],
            outcome: TrialOutcome::Search {
                largest,
                target,
                position,
            },
        });
    }

    debug!(kind = kind.label(), min, max, "search trials complete");
    Ok(report)
}

/// Ten sort trials with sizes `base * trial` and values in `1..=100`.
pub fn run_sort_trials<R: Rng>(kind: SortKind, base: usize, rng: &mut R) -> Result<TrialReport> {
    if base == 0 {
        return Err(Error::InvalidInitialSize);
    }

    let schedule = SizeSchedule::Scaled { base };
    let mut report = TrialReport::with_labels(vec![kind.label().to_string()]);

    for trial in 1..=TRIAL_COUNT {
        let size = schedule.size_for(trial);
        let mut data = random_array(size, 1, 100, rng);
        let (_, elapsed) = timed(|| kind.run(&mut data));
        report.push(TrialRecord {
            trial,
            size,
            timings: vec![elapsed],
            outcome: TrialOutcome::Sorted,
        });
    }

    debug!(kind = kind.label(), base, "sort trials complete");
    Ok(report)
}

/// Ten trials timing all five comparison sorts, each on its own copy of
/// the same freshly drawn array so the timings compare like for like.
pub fn run_sort_comparison<R: Rng>(min: i64, max: i64, rng: &mut R) -> Result<TrialReport> {
    if min >= max {
        return Err(Error::InvalidRange { min, max });
    }

    let schedule = SizeSchedule::Spread { min, max };
    let labels = SortKind::COMPARISON
        .iter()
        .map(|kind| kind.label().to_string())
        .collect();
    let mut report = TrialReport::with_labels(labels);

    for trial in 1..=TRIAL_COUNT {
        let size = schedule.size_for(trial);
        let data = random_array(size, min, max, rng);

        let mut timings = Vec::with_capacity(SortKind::COMPARISON.len());
        for kind in SortKind::COMPARISON {
            let mut copy = data.clone();
            let (_, elapsed) = timed(|| kind.run(&mut copy));
            timings.push(elapsed);
        }

        report.push(TrialRecord {
            trial,
            size,
            timings,
            outcome: TrialOutcome::Sorted,
        });
    }

    debug!(min, max, "sort comparison complete");
    Ok(report)
}
