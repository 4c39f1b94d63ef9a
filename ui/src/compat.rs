// Re-export the public API from the appropriate module
#[cfg(target_arch = "wasm32")]
pub use wasm32::*;

#[cfg(not(target_arch = "wasm32"))]
pub use non_wasm32::*;

#[cfg(target_arch = "wasm32")]
pub mod wasm32 {
    use std::sync::Arc;
    use std::time::Duration;

    use api::prefs::user_prefs::UserPrefs;
    use api::session::SessionStore;
    use api::ApiError;
    use wasm_bindgen_futures::JsFuture;
    use web_sys::Storage;
    use web_sys::Window;

    pub async fn sleep(duration: Duration) {
        gloo_timers::future::sleep(duration).await;
    }

    pub async fn clipboard_set(text: String) -> bool {
        match web_sys::window().map(|win: Window| win.navigator().clipboard()) {
            Some(clipboard) => {
                let promise = clipboard.write_text(&text);
                JsFuture::from(promise).await.is_ok()
            }
            _ => false,
        }
    }

    /// Path of the page the app was loaded from.
    pub fn current_path() -> Option<String> {
        web_sys::window()?.location().pathname().ok()
    }

    /// `window.localStorage`, looked up on every call so the store holds no
    /// JS handles.
    #[derive(Debug, Default, Clone, Copy)]
    pub struct BrowserStore;

    impl BrowserStore {
        fn storage() -> Result<Storage, ApiError> {
            let window = web_sys::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
            window
                .local_storage()
                .map_err(|e| anyhow::anyhow!("localStorage unavailable: {:?}", e))?
                .ok_or_else(|| anyhow::anyhow!("localStorage unavailable"))
        }
    }

    impl SessionStore for BrowserStore {
        fn get(&self, key: &str) -> Result<Option<String>, ApiError> {
            Self::storage()?
                .get_item(key)
                .map_err(|e| anyhow::anyhow!("localStorage read failed: {:?}", e))
        }

        fn set(&self, key: &str, value: &str) -> Result<(), ApiError> {
            Self::storage()?
                .set_item(key, value)
                .map_err(|e| anyhow::anyhow!("localStorage write failed: {:?}", e))
        }

        fn remove(&self, key: &str) -> Result<(), ApiError> {
            Self::storage()?
                .remove_item(key)
                .map_err(|e| anyhow::anyhow!("localStorage write failed: {:?}", e))
        }
    }

    /// The browser keeps its own storage; `DEPOSIT_STORE_PATH` does not apply.
    pub fn session_store(_prefs: &UserPrefs) -> Arc<dyn SessionStore> {
        Arc::new(BrowserStore)
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub mod non_wasm32 {
    use std::sync::Arc;
    use std::time::Duration;

    use api::prefs::user_prefs::UserPrefs;
    use api::session::FileStore;
    use api::session::MemoryStore;
    use api::session::SessionStore;
    use dioxus_clipboard::prelude::*;
    use dioxus_logger::tracing::info;

    pub async fn sleep(duration: Duration) {
        tokio::time::sleep(duration).await;
    }

    pub async fn clipboard_set(text: String) -> bool {
        let mut clipboard = use_clipboard();
        clipboard.set(text).is_ok()
    }

    pub fn current_path() -> Option<String> {
        None
    }

    /// A JSON file when `DEPOSIT_STORE_PATH` is set, memory otherwise.
    pub fn session_store(prefs: &UserPrefs) -> Arc<dyn SessionStore> {
        match prefs.store_path() {
            Some(path) => {
                info!("session store: {}", path.display());
                Arc::new(FileStore::new(path))
            }
            None => {
                info!("session store: in-memory");
                Arc::new(MemoryStore::new())
            }
        }
    }
}
