//! Persistent key-value seam for the session and theme state.
//!
//! wasm builds write through to `window.localStorage`; host builds keep a
//! thread-local map so the session lifecycle runs under plain `cargo test`.

use thiserror::Error;

/// Raw Google credential string for the active session.
pub const TOKEN_KEY: &str = "token";
/// Serialized identity JSON for the active session.
pub const USER_KEY: &str = "user";
/// Persisted theme selection.
pub const COLOR_MODE_KEY: &str = "colorMode";

#[derive(Debug, Clone, Error, PartialEq)]
pub enum StorageError {
    #[error("No window object")]
    NoWindow,
    #[error("No localStorage")]
    NoLocalStorage,
    #[error("Storage access failed for key {0}")]
    Access(String),
}

#[cfg(target_arch = "wasm32")]
mod backend {
    use super::StorageError;
    use web_sys::Storage;

    fn local_storage() -> Result<Storage, StorageError> {
        web_sys::window()
            .ok_or(StorageError::NoWindow)?
            .local_storage()
            .map_err(|_| StorageError::NoLocalStorage)?
            .ok_or(StorageError::NoLocalStorage)
    }

    pub fn get_item(key: &str) -> Result<Option<String>, StorageError> {
        local_storage()?
            .get_item(key)
            .map_err(|_| StorageError::Access(key.to_string()))
    }

    pub fn set_item(key: &str, value: &str) -> Result<(), StorageError> {
        local_storage()?
            .set_item(key, value)
            .map_err(|_| StorageError::Access(key.to_string()))
    }

    pub fn remove_item(key: &str) -> Result<(), StorageError> {
        local_storage()?
            .remove_item(key)
            .map_err(|_| StorageError::Access(key.to_string()))
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod backend {
    use super::StorageError;
    use std::cell::RefCell;
    use std::collections::HashMap;

    thread_local! {
        static STORE: RefCell<HashMap<String, String>> = RefCell::new(HashMap::new());
    }

    pub fn get_item(key: &str) -> Result<Option<String>, StorageError> {
        Ok(STORE.with(|store| store.borrow().get(key).cloned()))
    }

    pub fn set_item(key: &str, value: &str) -> Result<(), StorageError> {
        STORE.with(|store| {
            store
                .borrow_mut()
                .insert(key.to_string(), value.to_string())
        });
        Ok(())
    }

    pub fn remove_item(key: &str) -> Result<(), StorageError> {
        STORE.with(|store| store.borrow_mut().remove(key));
        Ok(())
    }
}

pub use backend::{get_item, remove_item, set_item};
