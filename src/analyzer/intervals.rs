use crate::model::{ProducerInterval, ProducerIntervalReport};
use std::collections::BTreeMap;

pub struct IntervalIndicators;

impl IntervalIndicators {
    /// Gap between every adjacent pair of wins, per producer.
    ///
    /// Output is ordered by producer name, then by `previous_win`, given the
    /// ordering `build_win_history` guarantees.
    pub fn consecutive_intervals(history: &BTreeMap<String, Vec<i32>>) -> Vec<ProducerInterval> {
        history
            .iter()
            .flat_map(|(producer, years)| {
                years
                    .windows(2)
                    .map(move |pair| ProducerInterval::between(producer, pair[0], pair[1]))
            })
            .collect()
    }

    /// Smallest and largest interval, if any interval exists.
    pub fn extremes(intervals: &[ProducerInterval]) -> Option<(i64, i64)> {
        let min = intervals.iter().map(|i| i.interval).min()?;
        let max = intervals.iter().map(|i| i.interval).max()?;
        Some((min, max))
    }

    /// Keeps every interval tied at the global minimum and maximum.
    pub fn report(intervals: Vec<ProducerInterval>) -> ProducerIntervalReport {
        let Some((min, max)) = Self::extremes(&intervals) else {
            return ProducerIntervalReport::sentinel();
        };

        let min_entries = intervals
            .iter()
            .filter(|i| i.interval == min)
            .cloned()
            .collect();
        let max_entries = intervals
            .into_iter()
            .filter(|i| i.interval == max)
            .collect();

        ProducerIntervalReport {
            min: min_entries,
            max: max_entries,
        }
    }
}
