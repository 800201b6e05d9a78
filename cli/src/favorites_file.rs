//! Favorites persisted as a JSON file between CLI runs.

use std::{
    fs,
    io::ErrorKind,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use recipe_flow_shared::FavoritesStore;
use tracing::warn;

/// Where an unreadable favorites file is moved before starting over.
pub fn corrupt_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().map(|n| n.to_os_string()).unwrap_or_default();
    name.push(".corrupt");
    path.with_file_name(name)
}

/// Load favorites from `path`. A missing file is an empty store. A corrupt
/// one is moved to [`corrupt_path`] and treated as empty, so a later
/// [`save`] cannot overwrite the only copy.
pub fn load(path: &Path) -> Result<FavoritesStore> {
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(err) if err.kind() == ErrorKind::NotFound => return Ok(FavoritesStore::new()),
        Err(err) => {
            return Err(err)
                .with_context(|| format!("failed to read favorites from {}", path.display()))
        },
    };

    match FavoritesStore::from_json(&raw) {
        Ok(store) => Ok(store),
        Err(err) => {
            let backup = corrupt_path(path);
            fs::rename(path, &backup).with_context(|| {
                format!("failed to move unreadable favorites to {}", backup.display())
            })?;
            warn!(
                path = %path.display(),
                backup = %backup.display(),
                "unreadable favorites file set aside: {err}"
            );
            Ok(FavoritesStore::new())
        },
    }
}

/// Write all favorites to `path`, creating parent directories as needed.
pub fn save(path: &Path, store: &FavoritesStore) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }
    let raw = store.to_json().context("failed to encode favorites")?;
    fs::write(path, raw)
        .with_context(|| format!("failed to write favorites to {}", path.display()))
}
