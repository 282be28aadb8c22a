//! Environment/runtime helpers
//!
//! Sanity checks to ensure the SQLite store has somewhere to live at startup.

use std::path::Path;

use tracing::{debug, warn};

/// Create the parent directory of a file-backed SQLite store.
/// In-memory stores (`None`) need nothing.
pub async fn ensure_db_dir(db_file: Option<&Path>) -> anyhow::Result<()> {
    let Some(file) = db_file else {
        warn!("database is in-memory; entries will not survive a restart");
        return Ok(());
    };
    let Some(dir) = file.parent().filter(|d| !d.as_os_str().is_empty()) else {
        return Ok(());
    };
    tokio::fs::create_dir_all(dir)
        .await
        .map_err(|e| anyhow::anyhow!("cannot create {}: {e}", dir.display()))?;
    debug!(dir = %dir.display(), "database directory ready");
    Ok(())
}
