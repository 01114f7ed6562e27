// ============================================================================
// PERSISTENT VALUE - Valor reactivo reflejado en un almacén clave/valor
// ============================================================================
// Se escribe primero en storage y recién después en memoria + subscribers.
// Cualquier fallo de storage se loguea y deja el valor vacío.
// ============================================================================

use std::rc::Rc;

use serde::{de::DeserializeOwned, Serialize};

use crate::error::StorageError;
use crate::services::storage::KeyValueStore;
use crate::state::reactivity::ReactiveState;

pub struct PersistentValue<T> {
    key: Rc<str>,
    store: Rc<dyn KeyValueStore>,
    state: ReactiveState<Option<T>>,
}

impl<T> PersistentValue<T>
where
    T: Serialize + DeserializeOwned + Clone,
{
    /// Crear el valor y leer su contenido inicial de `store`
    pub fn new(key: &str, store: Rc<dyn KeyValueStore>) -> Self {
        let initial = read_from(store.as_ref(), key);
        Self {
            key: Rc::from(key),
            store,
            state: ReactiveState::new(initial),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn get(&self) -> Option<T> {
        self.state.get()
    }

    pub fn is_set(&self) -> bool {
        self.state.with(Option::is_some)
    }

    /// Releer el valor guardado y publicarlo
    pub fn load(&self) -> Option<T> {
        let value = read_from(self.store.as_ref(), &self.key);
        self.state.set(value.clone());
        value
    }

    /// Guarda `Some(value)` o borra la clave con `None`, luego publica
    pub fn set(&self, value: Option<T>) {
        match self.write(value.as_ref()) {
            Ok(()) => self.state.set(value),
            Err(e) => {
                log::error!("❌ [STORAGE] {}", e);
                self.state.set(None);
            }
        }
    }

    pub fn subscribe<F>(&self, callback: F)
    where
        F: Fn() + 'static,
    {
        self.state.subscribe(callback);
    }

    fn write(&self, value: Option<&T>) -> Result<(), StorageError> {
        match value {
            Some(value) => {
                let json =
                    serde_json::to_string(value).map_err(|e| StorageError::Serialize {
                        key: self.key.to_string(),
                        reason: e.to_string(),
                    })?;
                self.store.set_item(&self.key, &json)
            }
            None => self.store.remove_item(&self.key),
        }
    }
}

impl<T> Clone for PersistentValue<T> {
    fn clone(&self) -> Self {
        Self {
            key: Rc::clone(&self.key),
            store: Rc::clone(&self.store),
            state: self.state.clone(),
        }
    }
}

/// Clave ausente, `null` o JSON inválido se leen como `None`
fn read_from<T: DeserializeOwned>(store: &dyn KeyValueStore, key: &str) -> Option<T> {
    let decoded = store
        .get_item(key)
        .and_then(|raw| decode(key, raw.as_deref()));

    match decoded {
        Ok(value) => value,
        Err(e) => {
            log::warn!("⚠️ [STORAGE] {}", e);
            None
        }
    }
}

fn decode<T: DeserializeOwned>(key: &str, raw: Option<&str>) -> Result<Option<T>, StorageError> {
    let raw = match raw.map(str::trim) {
        None | Some("") | Some("null") => return Ok(None),
        Some(raw) => raw,
    };

    serde_json::from_str(raw)
        .map(Some)
        .map_err(|e| StorageError::Deserialize {
            key: key.to_string(),
            reason: e.to_string(),
        })
}
