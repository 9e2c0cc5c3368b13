//! Environment/runtime helpers
//!
//! Sanity checks run once at startup, before the store is opened.

use std::path::Path;

use tracing::{info, warn};

/// Make sure the directory holding a SQLite database file exists.
///
/// In-memory URLs and URLs without a parent directory are left alone.
pub async fn ensure_sqlite_parent(database_url: &str) -> anyhow::Result<()> {
    let Some(path) = sqlite_file_path(database_url) else {
        info!(%database_url, "in-memory sqlite database; nothing to prepare");
        return Ok(());
    };
    let parent = match Path::new(path).parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => return Ok(()),
    };
    if tokio::fs::metadata(parent).await.is_err() {
        warn!(dir = %parent.display(), "database directory missing; creating it");
    }
    tokio::fs::create_dir_all(parent)
        .await
        .map_err(|e| anyhow::anyhow!("cannot create {}: {e}", parent.display()))?;
    Ok(())
}

/// Extract the file path from a `sqlite:` URL, or `None` for in-memory databases.
pub fn sqlite_file_path(database_url: &str) -> Option<&str> {
    let rest = database_url
        .strip_prefix("sqlite://")
        .or_else(|| database_url.strip_prefix("sqlite:"))?;
    let path = rest.split('?').next().unwrap_or_default();
    if path.is_empty() || path == ":memory:" {
        return None;
    }
    Some(path)
}
