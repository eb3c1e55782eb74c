use crate::analyzer::intervals::IntervalIndicators;
use crate::analyzer::win_history::build_win_history;
use crate::model::{AnalysisError, AwardRecord, ProducerIntervalReport};
use tracing::debug;

/// Trait defining the interface for an award analyzer.
pub trait Analyzer {
    /// Producers with the smallest and the largest gap between consecutive wins.
    fn producer_intervals(
        &self,
        records: &[AwardRecord],
    ) -> Result<ProducerIntervalReport, AnalysisError>;
}

/// Consecutive-win interval analyzer.
///
/// Holds no state beyond its limit, so one instance can serve concurrent callers.
#[derive(Debug, Clone, Copy, Default)]
pub struct IntervalAnalyzer {
    max_records: Option<usize>,
}

impl IntervalAnalyzer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rejects inputs larger than `limit` records.
    pub fn with_record_limit(limit: Option<usize>) -> Self {
        Self { max_records: limit }
    }
}

impl Analyzer for IntervalAnalyzer {
    fn producer_intervals(
        &self,
        records: &[AwardRecord],
    ) -> Result<ProducerIntervalReport, AnalysisError> {
        if let Some(limit) = self.max_records {
            if records.len() > limit {
                return Err(AnalysisError::TooManyRecords {
                    count: records.len(),
                    limit,
                });
            }
        }

        let history = build_win_history(records);
        let intervals = IntervalIndicators::consecutive_intervals(&history);
        debug!(
            "{} records, {} producers with wins, {} intervals",
            records.len(),
            history.len(),
            intervals.len()
        );

        Ok(IntervalIndicators::report(intervals))
    }
}
