use crate::analysis::{contributors, ingest, qualification, ranks, search, status, summary};
use crate::models::associate::AssociateRecord;
use crate::models::metrics::DashboardMetrics;
use crate::models::snapshot::Snapshot;
use std::path::Path;

/// Parse pasted or uploaded report text, stamped with the current time.
pub fn import_snapshot(text: &str, source_name: &str) -> Result<Snapshot, String> {
    let captured_at = chrono::Utc::now().timestamp();
    ingest::parse_snapshot(text, source_name, captured_at)
        .map_err(|e| format!("Could not import {source_name}: {e}"))
}

pub async fn import_snapshot_file(file_path: String) -> Result<Snapshot, String> {
    let text = tokio::fs::read_to_string(&file_path)
        .await
        .map_err(|e| format!("Could not read {file_path}: {e}"))?;
    let source_name = Path::new(&file_path)
        .file_name()
        .map(|name| name.to_string_lossy().to_string())
        .unwrap_or_else(|| file_path.clone());

    import_snapshot(&text, &source_name)
}

/// All derived metrics for one associate list. Re-run whenever the active snapshot changes.
pub fn get_dashboard(associates: &[AssociateRecord]) -> DashboardMetrics {
    DashboardMetrics {
        summary: summary::compute_org_summary(associates),
        qualification: qualification::compute_qualification(associates),
        status: status::compute_status_summary(associates),
        contributors: contributors::compute_ranked_contributors(associates),
        ranks: ranks::compute_rank_breakdown(associates),
    }
}

pub fn search_associates(associates: &[AssociateRecord], query: &str) -> Vec<AssociateRecord> {
    search::filter_associates(associates, query)
        .into_iter()
        .cloned()
        .collect()
}
