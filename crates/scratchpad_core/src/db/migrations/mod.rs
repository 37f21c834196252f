//! Schema steps for the scratchpad store.
//!
//! Step `n` in `SCHEMA_STEPS` brings the store to version `n + 1`; the
//! applied version lives in `PRAGMA user_version`. All pending steps run in
//! one transaction.

use crate::db::{DbError, DbResult};
use log::info;
use rusqlite::Connection;

const SCHEMA_STEPS: &[(&str, &str)] = &[("kv_store", include_str!("0001_kv_store.sql"))];

/// Schema version this binary writes.
pub fn latest_version() -> u32 {
    SCHEMA_STEPS.len() as u32
}

/// Brings `conn` up to `latest_version()`.
pub fn apply_migrations(conn: &mut Connection) -> DbResult<()> {
    let stored: u32 = conn.pragma_query_value(None, "user_version", |row| row.get(0))?;
    let latest = latest_version();
    if stored > latest {
        return Err(DbError::UnsupportedSchemaVersion {
            db_version: stored,
            latest_supported: latest,
        });
    }

    let pending = &SCHEMA_STEPS[stored as usize..];
    if pending.is_empty() {
        return Ok(());
    }

    let tx = conn.transaction()?;
    for (offset, (name, sql)) in pending.iter().enumerate() {
        let version = stored + offset as u32 + 1;
        tx.execute_batch(sql)?;
        tx.pragma_update(None, "user_version", version)?;
        info!("event=db_migrate module=db status=ok step={name} version={version}");
    }
    tx.commit()?;
    Ok(())
}
