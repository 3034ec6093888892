use super::settings::{load_store_config, StoreConfig};
use crate::error::StoreError;
use crate::models::snapshot::{Snapshot, SnapshotHeader};
use rusqlite::{params, Connection, OptionalExtension};

const DB_SCHEMA_VERSION: i64 = 2;

pub fn initialize_schema(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch(
        "PRAGMA journal_mode = WAL;
         PRAGMA synchronous = NORMAL;",
    )?;

    let mut version: i64 = conn.pragma_query_value(None, "user_version", |row| row.get(0))?;

    if version < 1 {
        apply_migration_1(conn)?;
        version = 1;
        conn.pragma_update(None, "user_version", version)?;
    }

    if version < 2 {
        apply_migration_2(conn)?;
        version = 2;
        conn.pragma_update(None, "user_version", version)?;
    }

    if version > DB_SCHEMA_VERSION {
        log::warn!("Snapshot database is at schema {version}, newer than {DB_SCHEMA_VERSION}");
    }

    Ok(())
}

fn apply_migration_1(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS snapshots (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            owner_id TEXT NOT NULL,
            source_name TEXT NOT NULL DEFAULT '',
            captured_at INTEGER NOT NULL,
            associate_count INTEGER NOT NULL DEFAULT 0,
            payload_json TEXT NOT NULL
        );
        ",
    )
}

fn apply_migration_2(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch(
        "
        CREATE INDEX IF NOT EXISTS idx_snapshots_owner_captured ON snapshots(owner_id, captured_at);
        ",
    )
}

pub fn get_db_connection(config: &StoreConfig) -> Result<Connection, StoreError> {
    let path = config.database_path();
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(StoreError::CreateDir)?;
    }
    let conn = Connection::open(path)?;
    initialize_schema(&conn)?;
    Ok(conn)
}

pub fn save_snapshot(
    conn: &Connection,
    owner_id: &str,
    snapshot: &Snapshot,
) -> Result<SnapshotHeader, StoreError> {
    let payload = serde_json::to_string(&snapshot.associates)?;

    conn.execute(
        "INSERT INTO snapshots (owner_id, source_name, captured_at, associate_count, payload_json) VALUES (?1, ?2, ?3, ?4, ?5)",
        params![
            owner_id,
            snapshot.source_name,
            snapshot.captured_at,
            snapshot.associates.len() as i64,
            payload,
        ],
    )?;

    Ok(SnapshotHeader {
        id: conn.last_insert_rowid(),
        owner_id: owner_id.to_string(),
        source_name: snapshot.source_name.clone(),
        captured_at: snapshot.captured_at,
        associate_count: snapshot.associates.len(),
    })
}

/// Most recent snapshot for `owner_id`; equal capture times resolve to the later insert.
pub fn load_latest_snapshot(
    conn: &Connection,
    owner_id: &str,
) -> Result<Option<Snapshot>, StoreError> {
    let row = conn
        .query_row(
            "SELECT source_name, captured_at, payload_json FROM snapshots WHERE owner_id = ?1 ORDER BY captured_at DESC, id DESC LIMIT 1",
            params![owner_id],
            |row| {
                Ok((
                    row.get::<_, String>(0)?,
                    row.get::<_, i64>(1)?,
                    row.get::<_, String>(2)?,
                ))
            },
        )
        .optional()?;

    let Some((source_name, captured_at, payload)) = row else {
        return Ok(None);
    };

    Ok(Some(Snapshot {
        source_name,
        captured_at,
        associates: serde_json::from_str(&payload)?,
    }))
}

pub fn list_snapshot_headers(
    conn: &Connection,
    owner_id: &str,
) -> Result<Vec<SnapshotHeader>, StoreError> {
    let mut stmt = conn.prepare(
        "SELECT id, owner_id, source_name, captured_at, associate_count FROM snapshots WHERE owner_id = ?1 ORDER BY captured_at ASC, id ASC",
    )?;

    let headers = stmt
        .query_map(params![owner_id], |row| {
            Ok(SnapshotHeader {
                id: row.get(0)?,
                owner_id: row.get(1)?,
                source_name: row.get(2)?,
                captured_at: row.get(3)?,
                associate_count: row.get::<_, i64>(4)? as usize,
            })
        })?
        .collect::<rusqlite::Result<Vec<_>>>()?;

    Ok(headers)
}

/// Runs `task` against the configured store on the blocking pool.
async fn with_store<T, F>(data_dir: String, task: F) -> Result<T, String>
where
    T: Send + 'static,
    F: FnOnce(&Connection, &StoreConfig) -> Result<T, String> + Send + 'static,
{
    tokio::task::spawn_blocking(move || {
        let config = load_store_config(&data_dir)?;
        let conn = get_db_connection(&config).map_err(|e| format!("DB error: {e}"))?;
        task(&conn, &config)
    })
    .await
    .map_err(|e| format!("Store task failed: {e}"))?
}

pub async fn store_snapshot(data_dir: String, snapshot: Snapshot) -> Result<SnapshotHeader, String> {
    with_store(data_dir, move |conn, config| {
        save_snapshot(conn, &config.owner_id, &snapshot).map_err(|e| format!("Insert error: {e}"))
    })
    .await
}

pub async fn get_latest_snapshot(data_dir: String) -> Result<Option<Snapshot>, String> {
    with_store(data_dir, |conn, config| {
        load_latest_snapshot(conn, &config.owner_id).map_err(|e| format!("Query error: {e}"))
    })
    .await
}

pub async fn get_snapshot_history(data_dir: String) -> Result<Vec<SnapshotHeader>, String> {
    with_store(data_dir, |conn, config| {
        list_snapshot_headers(conn, &config.owner_id).map_err(|e| format!("Query error: {e}"))
    })
    .await
}
