use super::identity::IdentityResolver;
use super::tabular::{coerce_field, parse_table};
use crate::error::FormatError;
use crate::models::associate::{columns, AssociateRecord, RawRow};
use crate::models::snapshot::Snapshot;

/// Parse report text into a snapshot stamped with `captured_at` (unix seconds).
pub fn parse_snapshot(
    text: &str,
    source_name: &str,
    captured_at: i64,
) -> Result<Snapshot, FormatError> {
    let associates = parse_associates(text)?;

    let roots = associates.iter().filter(|a| a.is_root()).count();
    if roots > 1 {
        log::warn!("{source_name}: {roots} rows at depth 0, the first one is treated as root");
    }
    log::info!(
        "Parsed {} associate(s) from {source_name}",
        associates.len()
    );

    Ok(Snapshot {
        source_name: source_name.to_string(),
        captured_at,
        associates,
    })
}

pub fn parse_associates(text: &str) -> Result<Vec<AssociateRecord>, FormatError> {
    let table = parse_table(text)?;
    let mut resolver = IdentityResolver::new();

    let associates = table
        .rows
        .iter()
        .map(|fields| {
            let row = RawRow {
                fields: table
                    .header
                    .iter()
                    .zip(fields)
                    .map(|(name, raw)| (name.clone(), coerce_field(name, raw)))
                    .collect(),
            };
            let id = resolver.resolve(&row.text(columns::ASSOCIATE_ID));
            AssociateRecord::from_row(&row, id)
        })
        .collect();

    Ok(associates)
}
