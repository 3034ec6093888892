use serde_json::{json, Map, Value};
use std::fs;
use std::path::{Path, PathBuf};

const SETTINGS_SCHEMA_VERSION: i64 = 2;
const LOG_LEVELS: &[&str] = &["error", "warn", "info", "debug", "trace"];

/// Everything the snapshot store needs, resolved from settings up front.
#[derive(Debug, Clone, PartialEq)]
pub struct StoreConfig {
    pub data_dir: PathBuf,
    pub owner_id: String,
    pub database_file: String,
}

impl StoreConfig {
    pub fn database_path(&self) -> PathBuf {
        self.data_dir.join(".orgpulse").join(&self.database_file)
    }
}

pub async fn get_settings(data_dir: String) -> Result<Value, String> {
    tokio::task::spawn_blocking(move || load_settings_from_disk(&data_dir))
        .await
        .map_err(|e| format!("Settings task failed: {e}"))?
}

pub async fn save_settings(data_dir: String, settings: Value) -> Result<Value, String> {
    tokio::task::spawn_blocking(move || save_settings_to_disk(&data_dir, settings))
        .await
        .map_err(|e| format!("Settings task failed: {e}"))?
}

pub fn load_store_config(data_dir: &str) -> Result<StoreConfig, String> {
    let settings = load_settings_from_disk(data_dir)?;
    Ok(StoreConfig {
        data_dir: PathBuf::from(data_dir),
        owner_id: string_setting(&settings, "ownerId", "default"),
        database_file: string_setting(&settings, "databaseFile", "snapshots.db"),
    })
}

pub fn load_log_level(data_dir: &str) -> Result<String, String> {
    let settings = load_settings_from_disk(data_dir)?;
    Ok(string_setting(&settings, "logLevel", "info"))
}

pub fn load_settings_from_disk(data_dir: &str) -> Result<Value, String> {
    let path = settings_path(data_dir);
    ensure_orgpulse_dir(data_dir)?;

    let original = if path.exists() {
        let raw = fs::read_to_string(&path)
            .map_err(|e| format!("Failed to read settings.json: {e}"))?;
        match serde_json::from_str::<Value>(&raw) {
            Ok(value) => value,
            Err(e) => {
                let backup = path.with_extension("json.bak");
                log::warn!(
                    "settings.json is not valid JSON ({e}); keeping a copy at {} and resetting to defaults",
                    backup.display()
                );
                fs::write(&backup, &raw)
                    .map_err(|e| format!("Failed to back up settings.json: {e}"))?;
                json!({})
            }
        }
    } else {
        json!({})
    };

    let migrated = migrate_settings(original.clone());
    if migrated != original || !path.exists() {
        write_settings_file(&path, &migrated)?;
    }

    Ok(migrated)
}

pub fn save_settings_to_disk(data_dir: &str, settings: Value) -> Result<Value, String> {
    let path = settings_path(data_dir);
    ensure_orgpulse_dir(data_dir)?;

    let mut merged = load_settings_from_disk(data_dir).unwrap_or_else(|_| default_settings());
    merge_settings(&mut merged, &settings);

    let migrated = migrate_settings(merged);
    write_settings_file(&path, &migrated)?;
    Ok(migrated)
}

fn settings_path(data_dir: &str) -> PathBuf {
    Path::new(data_dir).join(".orgpulse").join("settings.json")
}

fn ensure_orgpulse_dir(data_dir: &str) -> Result<(), String> {
    let dir = Path::new(data_dir).join(".orgpulse");
    fs::create_dir_all(&dir).map_err(|e| format!("Failed to create .orgpulse directory: {e}"))
}

fn write_settings_file(path: &Path, settings: &Value) -> Result<(), String> {
    let raw = serde_json::to_string_pretty(settings)
        .map_err(|e| format!("Failed to serialize settings: {e}"))?;
    fs::write(path, raw).map_err(|e| format!("Failed to write settings.json: {e}"))
}

fn string_setting(settings: &Value, key: &str, default: &str) -> String {
    settings
        .get(key)
        .and_then(Value::as_str)
        .unwrap_or(default)
        .to_string()
}

fn migrate_settings(input: Value) -> Value {
    let mut out = match input {
        Value::Object(map) => Value::Object(map),
        _ => Value::Object(Map::new()),
    };

    let version = out
        .get("schema_version")
        .and_then(Value::as_i64)
        .unwrap_or(0);

    if version < 2 {
        // V2 introduces the log level.
        ensure_key(&mut out, "logLevel", json!("info"));
    }

    fill_defaults(&mut out, &default_settings());
    sanitize_settings(&mut out);
    if let Some(obj) = out.as_object_mut() {
        obj.insert("schema_version".to_string(), json!(SETTINGS_SCHEMA_VERSION));
    }

    out
}

fn default_settings() -> Value {
    json!({
        "schema_version": SETTINGS_SCHEMA_VERSION,
        "ownerId": "default",
        "databaseFile": "snapshots.db",
        "logLevel": "info"
    })
}

fn fill_defaults(target: &mut Value, defaults: &Value) {
    let (Some(target_obj), Some(default_obj)) = (target.as_object_mut(), defaults.as_object()) else {
        return;
    };

    for (key, default_value) in default_obj {
        target_obj
            .entry(key.clone())
            .or_insert_with(|| default_value.clone());
    }
}

fn ensure_key(target: &mut Value, key: &str, value: Value) {
    if let Some(obj) = target.as_object_mut() {
        obj.entry(key.to_string()).or_insert(value);
    }
}

fn merge_settings(target: &mut Value, incoming: &Value) {
    match (target, incoming) {
        (Value::Object(target_obj), Value::Object(incoming_obj)) => {
            for (key, value) in incoming_obj {
                if let Some(existing) = target_obj.get_mut(key) {
                    merge_settings(existing, value);
                } else {
                    target_obj.insert(key.clone(), value.clone());
                }
            }
        }
        (target_slot, incoming_value) => {
            *target_slot = incoming_value.clone();
        }
    }
}

fn sanitize_settings(settings: &mut Value) {
    let Some(obj) = settings.as_object_mut() else {
        return;
    };

    ensure_non_empty_string(obj, "ownerId", "default");
    ensure_non_empty_string(obj, "databaseFile", "snapshots.db");
    sanitize_enum(obj, "logLevel", LOG_LEVELS, "info");
}

fn ensure_non_empty_string(map: &mut Map<String, Value>, key: &str, default: &str) {
    let value = map
        .get(key)
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .unwrap_or(default)
        .to_string();
    map.insert(key.to_string(), json!(value));
}

fn sanitize_enum(map: &mut Map<String, Value>, key: &str, allowed: &[&str], default: &str) {
    let valid = map
        .get(key)
        .and_then(Value::as_str)
        .filter(|value| allowed.contains(value))
        .unwrap_or(default);
    map.insert(key.to_string(), json!(valid));
}
