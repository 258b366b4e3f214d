//! Browser sessionStorage backend for the admin session gate

use session_gate_core::{MemoryStore, SessionStore, StoreError, StoreResult};
use web_sys::Storage;

/// Tab-scoped store: `window.sessionStorage` when running in a browser,
/// an in-memory map otherwise
#[derive(Debug, Clone)]
pub enum BrowserStore {
    Session(Storage),
    Memory(MemoryStore),
}

impl BrowserStore {
    /// Use sessionStorage if a browser window is reachable
    pub fn session() -> Self {
        match get_session_storage() {
            Some(storage) => Self::Session(storage),
            None => {
                tracing::debug!("sessionStorage unavailable, using in-memory admin session");
                Self::memory()
            }
        }
    }

    pub fn memory() -> Self {
        Self::Memory(MemoryStore::new())
    }

    pub fn is_persistent(&self) -> bool {
        matches!(self, Self::Session(_))
    }
}

impl SessionStore for BrowserStore {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        match self {
            Self::Session(storage) => storage.get_item(key).map_err(js_error),
            Self::Memory(store) => store.get(key),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> StoreResult<()> {
        match self {
            Self::Session(storage) => storage.set_item(key, value).map_err(js_error),
            Self::Memory(store) => store.set(key, value),
        }
    }

    fn remove(&mut self, key: &str) -> StoreResult<()> {
        match self {
            Self::Session(storage) => storage.remove_item(key).map_err(js_error),
            Self::Memory(store) => store.remove(key),
        }
    }
}

/// Get sessionStorage
#[cfg(target_arch = "wasm32")]
fn get_session_storage() -> Option<Storage> {
    web_sys::window().and_then(|w| w.session_storage().ok().flatten())
}

// wasm-bindgen imports panic off wasm32, so there is never a window here
#[cfg(not(target_arch = "wasm32"))]
fn get_session_storage() -> Option<Storage> {
    None
}

fn js_error(value: wasm_bindgen::JsValue) -> StoreError {
    StoreError::backend(value.as_string().unwrap_or_else(|| format!("{value:?}")))
}
