use super::associate::AssociateRecord;
use serde::{Deserialize, Serialize};

/// One parsed upload. Never edited after creation; a later upload supersedes it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub source_name: String,
    pub captured_at: i64,
    pub associates: Vec<AssociateRecord>,
}

/// Listing entry for a stored snapshot, without the associate payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SnapshotHeader {
    pub id: i64,
    pub owner_id: String,
    pub source_name: String,
    pub captured_at: i64,
    pub associate_count: usize,
}
