//! Session credentials in `localStorage`, as left there by the login pages.

use lib_client::core::session::{SessionStore, TOKEN_KEY, USER_ID_KEY};
use web_sys::Storage;

#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorageSession;

fn storage() -> Option<Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

fn read(key: &str) -> Option<String> {
    storage()?
        .get_item(key)
        .ok()
        .flatten()
        .filter(|value| !value.is_empty())
}

impl SessionStore for LocalStorageSession {
    fn token(&self) -> Option<String> {
        read(TOKEN_KEY)
    }

    fn user_id(&self) -> Option<String> {
        read(USER_ID_KEY)
    }

    fn clear(&self) {
        let Some(storage) = storage() else {
            log::warn!("localStorage unavailable, nothing to clear");
            return;
        };
        for key in [TOKEN_KEY, USER_ID_KEY] {
            if let Err(e) = storage.remove_item(key) {
                log::warn!("Failed to remove {} from localStorage: {:?}", key, e);
            }
        }
    }
}
