use recipe_flow_shared::{FavoritesSnapshot, FavoritesStore};
use web_sys::{window, Storage};

use crate::config::{FAVORITES_CORRUPT_KEY, FAVORITES_STORAGE_KEY};

fn local_storage() -> Option<Storage> {
    window().and_then(|win| win.local_storage().ok().flatten())
}

/// Favorites saved by a previous session. Corrupt data is reported and
/// ignored.
pub fn load_favorites() -> FavoritesStore {
    let raw = local_storage().and_then(|storage| storage.get_item(FAVORITES_STORAGE_KEY).ok().flatten());
    let Some(raw) = raw else {
        return FavoritesStore::new();
    };

    FavoritesStore::from_json(&raw).unwrap_or_else(|e| {
        web_sys::console::warn_1(&format!("Ignoring stored favorites: {}", e).into());
        set_aside_corrupt(&raw);
        FavoritesStore::new()
    })
}

// Keep unreadable data under a separate key so the next save cannot
// overwrite it.
fn set_aside_corrupt(raw: &str) {
    let Some(storage) = local_storage() else {
        return;
    };
    if storage.set_item(FAVORITES_CORRUPT_KEY, raw).is_err() {
        web_sys::console::warn_1(&"Failed to back up unreadable favorites".into());
        return;
    }
    let _ = storage.remove_item(FAVORITES_STORAGE_KEY);
}

pub fn save_favorites(snapshot: &FavoritesSnapshot) {
    let Some(storage) = local_storage() else {
        return;
    };
    match serde_json::to_string(&**snapshot) {
        Ok(raw) => {
            if storage.set_item(FAVORITES_STORAGE_KEY, &raw).is_err() {
                web_sys::console::warn_1(&"Failed to persist favorites".into());
            }
        },
        Err(e) => {
            web_sys::console::error_1(&format!("Failed to encode favorites: {}", e).into());
        },
    }
}
