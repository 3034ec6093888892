pub mod analysis;
pub mod commands;
pub mod error;
pub mod models;

use commands::{
    db::{get_latest_snapshot, store_snapshot},
    import::{get_dashboard, import_snapshot_file, search_associates},
    settings::load_log_level,
};

/// Initialise `env_logger` once. `RUST_LOG` overrides `level`.
pub fn init_logging(level: &str) {
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .try_init();
}

/// Command-line entry: `orgpulse [REPORT] [--data-dir DIR] [--search QUERY]`.
///
/// Imports REPORT (if given) into the store, then prints the dashboard for the
/// latest stored snapshot as JSON.
pub async fn run(args: Vec<String>) -> Result<(), String> {
    let mut report = None;
    let mut data_dir = ".".to_string();
    let mut query = None;

    let mut iter = args.into_iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--data-dir" => data_dir = iter.next().ok_or("--data-dir needs a value")?,
            "--search" => query = Some(iter.next().ok_or("--search needs a value")?),
            _ => report = Some(arg),
        }
    }

    init_logging(&load_log_level(&data_dir)?);

    if let Some(path) = report {
        let snapshot = import_snapshot_file(path).await?;
        let header = store_snapshot(data_dir.clone(), snapshot).await?;
        log::info!(
            "Stored snapshot {} ({} associates) for {}",
            header.id,
            header.associate_count,
            header.owner_id
        );
    }

    let snapshot = get_latest_snapshot(data_dir)
        .await?
        .ok_or("No snapshot stored yet. Pass a report file to import one.")?;

    let output = match query {
        Some(query) => serde_json::to_string_pretty(&search_associates(&snapshot.associates, &query)),
        None => serde_json::to_string_pretty(&get_dashboard(&snapshot.associates)),
    }
    .map_err(|e| format!("Failed to serialize output: {e}"))?;

    println!("{output}");
    Ok(())
}
