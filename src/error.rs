use thiserror::Error;

/// The only failure a report parse can surface. No partial snapshot is produced.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    #[error("report needs a header and at least one data row, found {found} non-empty line(s)")]
    TooFewLines { found: usize },

    #[error("no data rows matched the header's field count ({skipped} skipped)")]
    NoValidRows { skipped: usize },
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("Snapshot payload error: {0}")]
    Payload(#[from] serde_json::Error),

    #[error("Failed to create data directory: {0}")]
    CreateDir(std::io::Error),
}
