use std::collections::HashSet;

use serde_json::Value;
use tracing::{error, info, warn};
use uuid::Uuid;

use crate::AppError;
use crate::AppState;
use warplog_domain::{normalize_batch, ImportReport, PlayerId, PullId, PullRecord};

/// Normalizes and stores a batch for one player. Malformed rows and rows of
/// other players are skipped; rows already stored (or repeated in the batch)
/// count as duplicates.
pub async fn import_pulls(
    state: &AppState,
    player: &str,
    records: Vec<Value>,
) -> Result<ImportReport, AppError> {
    let player_id = PlayerId::parse(player)?;
    let max = state.config.max_import_records;
    if records.len() > max {
        return Err(AppError::BadRequest(format!(
            "batch of {} records exceeds the limit of {}",
            records.len(),
            max
        )));
    }

    let received = records.len();
    let batch = normalize_batch(records, Some(&player_id));
    let malformed = batch.skipped();
    let mut skipped_reasons: Vec<String> = batch
        .rejected
        .iter()
        .map(|(index, err)| format!("record {}: {}", index, err))
        .collect();

    let (own, foreign): (Vec<PullRecord>, Vec<PullRecord>) = batch
        .pulls
        .into_iter()
        .partition(|pull| pull.player_id == player_id);
    for pull in &foreign {
        skipped_reasons.push(format!(
            "pull {}: belongs to player {}",
            pull.id, pull.player_id
        ));
    }

    let _guard = state.import_lock.lock().await;
    let stored = state
        .pull_repo
        .get_all_pulls(&player_id)
        .await
        .map_err(|err| {
            state.metrics.record_import_error();
            error!("failed to read pulls of {}: {}", player_id, err);
            AppError::Internal(err)
        })?;
    let mut seen: HashSet<PullId> = stored.iter().map(|pull| pull.id).collect();
    let fresh: Vec<PullRecord> = own.into_iter().filter(|pull| seen.insert(pull.id)).collect();
    let duplicates = received - malformed - foreign.len() - fresh.len();

    let imported = if fresh.is_empty() {
        0
    } else {
        state
            .pull_repo
            .append_pulls(&player_id, &fresh)
            .await
            .map_err(|err| {
                state.metrics.record_import_error();
                error!("failed to store pulls of {}: {}", player_id, err);
                AppError::Internal(err)
            })?
    };

    if !skipped_reasons.is_empty() {
        warn!(
            "import for {} skipped {} records (first: {})",
            player_id,
            skipped_reasons.len(),
            skipped_reasons[0]
        );
    }
    state
        .metrics
        .record_import(imported, duplicates, malformed);

    let report = ImportReport {
        import_id: Uuid::new_v4().to_string(),
        player_id,
        received,
        imported,
        duplicates,
        skipped: malformed + foreign.len(),
        skipped_reasons,
    };
    info!(
        "import {} for {}: received={} imported={} duplicates={} skipped={}",
        report.import_id,
        report.player_id,
        report.received,
        report.imported,
        report.duplicates,
        report.skipped
    );
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{raw, rows, test_state};

    #[tokio::test]
    async fn imports_and_deduplicates() {
        let state = test_state();
        let records = vec![
            raw(1, "800000001", "11", "5", "2024-01-05 10:00:00"),
            raw(2, "800000001", "11", "3", "2024-01-05 10:00:01"),
            raw(2, "800000001", "11", "3", "2024-01-05 10:00:01"),
        ];
        let report = import_pulls(&state, "800000001", rows(records.clone()))
            .await
            .expect("first import");
        assert_eq!(report.received, 3);
        assert_eq!(report.imported, 2);
        assert_eq!(report.duplicates, 1);
        assert_eq!(report.skipped, 0);

        let again = import_pulls(&state, "800000001", rows(records))
            .await
            .expect("second import");
        assert_eq!(again.imported, 0);
        assert_eq!(again.duplicates, 3);
        assert_ne!(again.import_id, report.import_id);
    }

    #[tokio::test]
    async fn skips_malformed_and_foreign_records() {
        let state = test_state();
        let mut broken = raw(3, "800000001", "11", "3", "2024-01-05 10:00:02");
        broken.time = Some("not a time".to_string());
        let records = vec![
            raw(1, "800000001", "11", "3", "2024-01-05 10:00:00"),
            raw(2, "800000002", "11", "3", "2024-01-05 10:00:01"),
            broken,
        ];
        let report = import_pulls(&state, "800000001", rows(records))
            .await
            .expect("import");
        assert_eq!(report.imported, 1);
        assert_eq!(report.skipped, 2);
        assert_eq!(report.skipped_reasons.len(), 2);
        assert!(report.skipped_reasons[0].starts_with("record 2:"));
        assert!(report.skipped_reasons[1].contains("800000002"));
    }

    #[tokio::test]
    async fn rejects_oversized_batches_and_bad_players() {
        let mut state = test_state();
        state.config.max_import_records = 1;
        let records = vec![
            raw(1, "800000001", "1", "3", "2024-01-05 10:00:00"),
            raw(2, "800000001", "1", "3", "2024-01-05 10:00:01"),
        ];
        assert!(matches!(
            import_pulls(&state, "800000001", rows(records)).await,
            Err(AppError::BadRequest(_))
        ));
        assert!(matches!(
            import_pulls(&state, "../etc", Vec::new()).await,
            Err(AppError::BadRequest(_))
        ));
    }

    #[tokio::test]
    async fn counts_metrics() {
        let state = test_state();
        import_pulls(
            &state,
            "800000001",
            rows(vec![raw(1, "800000001", "1", "3", "2024-01-05 10:00:00")]),
        )
        .await
        .expect("import");
        let text = state.metrics.render_prometheus();
        assert!(text.contains("warplog_imported_pulls_total 1\n"));
    }

    #[tokio::test]
    async fn rows_of_the_wrong_shape_are_skipped() {
        let state = test_state();
        let mut records = rows(vec![raw(1, "800000001", "11", "3", "2024-01-05 10:00:00")]);
        records.push(Value::Null);
        records.push(serde_json::json!({"id": "3", "rank_type": "3", "rarity": "3"}));
        let report = import_pulls(&state, "800000001", records)
            .await
            .expect("import");
        assert_eq!(report.received, 3);
        assert_eq!(report.imported, 1);
        assert_eq!(report.skipped, 2);
        assert_eq!(report.duplicates, 0);
        assert!(report.skipped_reasons[0].starts_with("record 1:"));
    }
}
