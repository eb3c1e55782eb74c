use axum::{Json, extract::State};
use tracing::info;

use super::{ApiError, AppState};
use crate::analyzer::Analyzer;
use crate::model::ProducerIntervalReport;

/// GET /producers/winnerintervals
///
/// Producers with the shortest and the longest gap between consecutive wins.
pub async fn winner_intervals(
    State(state): State<AppState>,
) -> Result<Json<ProducerIntervalReport>, ApiError> {
    let records = state.store.award_records().await?;
    let report = state.analyzer.producer_intervals(&records)?;
    info!(
        "Interval report over {} records: {} min / {} max entries",
        records.len(),
        report.min.len(),
        report.max.len()
    );
    Ok(Json(report))
}
