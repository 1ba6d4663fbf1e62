use std::{cell::RefCell, collections::HashMap, rc::Rc};

use dioxus_logger::tracing;

use crate::client::error::StorageError;

/// Persistent key/value slot backing the session
pub trait SessionStorage {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

/// Browser `localStorage`
pub struct LocalStorage(web_sys::Storage);

impl LocalStorage {
    pub fn open() -> Option<Self> {
        let window = web_sys::window()?;
        match window.local_storage() {
            Ok(Some(storage)) => Some(Self(storage)),
            Ok(None) => None,
            Err(e) => {
                tracing::warn!(error = ?e, "Local storage is not accessible");
                None
            }
        }
    }
}

impl SessionStorage for LocalStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.0.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.0
            .set_item(key, value)
            .map_err(|e| StorageError::Write {
                key: key.to_string(),
                reason: format!("{:?}", e),
            })
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.0.remove_item(key).map_err(|e| StorageError::Remove {
            key: key.to_string(),
            reason: format!("{:?}", e),
        })
    }
}

/// Storage that lives for the lifetime of the page only
#[derive(Default)]
pub struct MemoryStorage(RefCell<HashMap<String, String>>);

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.0.borrow().is_empty()
    }
}

impl SessionStorage for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.0.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.0
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.0.borrow_mut().remove(key);
        Ok(())
    }
}

/// `localStorage` when the browser grants it, otherwise an in-memory store.
///
/// With the in-memory fallback a session does not survive a reload.
pub fn browser_storage() -> Rc<dyn SessionStorage> {
    match LocalStorage::open() {
        Some(storage) => Rc::new(storage),
        None => {
            tracing::warn!("Local storage unavailable, session will not persist across reloads");
            Rc::new(MemoryStorage::new())
        }
    }
}
