// ============================================================================
// STORAGE - Almacenes clave/valor detrás de los valores persistentes
// ============================================================================

use std::cell::{Cell, RefCell};
use std::collections::HashMap;

use web_sys::{window, Storage};

use crate::error::StorageError;

/// Almacén clave/valor de strings. Lo implementan el Web Storage del
/// navegador y un mapa en memoria.
pub trait KeyValueStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove_item(&self, key: &str) -> Result<(), StorageError>;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StorageKind {
    /// `window.localStorage`, compartido por todas las pestañas del perfil
    Local,
    /// `window.sessionStorage`, limitado a la pestaña actual
    Session,
}

/// Almacén sobre Web Storage. El objeto `Storage` se busca en cada llamada,
/// así un almacén creado antes de tener window sigue funcionando después.
#[derive(Clone, Copy, Debug)]
pub struct BrowserStorage {
    kind: StorageKind,
}

impl BrowserStorage {
    pub fn local() -> Self {
        Self {
            kind: StorageKind::Local,
        }
    }

    pub fn session() -> Self {
        Self {
            kind: StorageKind::Session,
        }
    }

    pub fn kind(&self) -> StorageKind {
        self.kind
    }

    fn storage(&self) -> Result<Storage, StorageError> {
        let window = window().ok_or(StorageError::Unavailable)?;
        let storage = match self.kind {
            StorageKind::Local => window.local_storage(),
            StorageKind::Session => window.session_storage(),
        };
        // Err = bloqueado por privacidad, Ok(None) = no soportado
        storage.ok().flatten().ok_or(StorageError::Unavailable)
    }
}

impl KeyValueStore for BrowserStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.storage()?
            .get_item(key)
            .map_err(|_| StorageError::Read {
                key: key.to_string(),
            })
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.storage()?
            .set_item(key, value)
            .map_err(|_| StorageError::Write {
                key: key.to_string(),
            })
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        self.storage()?
            .remove_item(key)
            .map_err(|_| StorageError::Remove {
                key: key.to_string(),
            })
    }
}

/// Almacén en memoria. Vive lo mismo que el valor; dos valores persistentes
/// sobre la misma instancia simulan una recarga de página.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    items: RefCell<HashMap<String, String>>,
    fail_writes: Cell<bool>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Hace fallar las escrituras siguientes como una cuota llena
    #[cfg(test)]
    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.set(fail);
    }

    pub fn len(&self) -> usize {
        self.items.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.borrow().is_empty()
    }
}

impl KeyValueStore for MemoryStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.items.borrow().get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        if self.fail_writes.get() {
            return Err(StorageError::Write {
                key: key.to_string(),
            });
        }
        self.items
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        if self.fail_writes.get() {
            return Err(StorageError::Remove {
                key: key.to_string(),
            });
        }
        self.items.borrow_mut().remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_storage_round_trips_items() {
        let storage = MemoryStorage::new();
        assert_eq!(storage.get_item("user").unwrap(), None);

        storage.set_item("user", "{}").unwrap();
        assert_eq!(storage.get_item("user").unwrap().as_deref(), Some("{}"));

        storage.remove_item("user").unwrap();
        assert!(storage.is_empty());
    }

    #[test]
    fn failing_writes_leave_previous_value() {
        let storage = MemoryStorage::new();
        storage.set_item("user", "old").unwrap();
        storage.set_fail_writes(true);

        let err = storage.set_item("user", "new").unwrap_err();
        assert_eq!(
            err,
            StorageError::Write {
                key: "user".to_string()
            }
        );
        assert_eq!(storage.get_item("user").unwrap().as_deref(), Some("old"));
    }

    #[test]
    fn browser_storage_kinds() {
        assert_eq!(BrowserStorage::local().kind(), StorageKind::Local);
        assert_eq!(BrowserStorage::session().kind(), StorageKind::Session);
    }
}
