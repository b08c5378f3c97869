//! `localStorage`-backed session store.

use anyhow::{Result, anyhow};
use sf_session::SessionStore;

#[derive(Default)]
pub struct LocalSessionStore;

fn storage() -> Result<web_sys::Storage> {
    web_sys::window()
        .ok_or_else(|| anyhow!("no global `window`"))?
        .local_storage()
        .map_err(|e| anyhow!("localStorage unavailable: {e:?}"))?
        .ok_or_else(|| anyhow!("localStorage unavailable"))
}

impl SessionStore for LocalSessionStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        storage()?
            .get_item(key)
            .map_err(|e| anyhow!("read {key}: {e:?}"))
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        storage()?
            .set_item(key, value)
            .map_err(|e| anyhow!("write {key}: {e:?}"))
    }

    fn remove(&self, key: &str) -> Result<()> {
        storage()?
            .remove_item(key)
            .map_err(|e| anyhow!("remove {key}: {e:?}"))
    }
}
