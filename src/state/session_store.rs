// ============================================================================
// SESSION STORE - Única fuente de verdad de "hay sesión iniciada"
// ============================================================================

use std::rc::Rc;

use chrono::Utc;

use crate::models::{SessionDraft, SessionRecord};
use crate::router::Route;
use crate::services::navigation::Navigator;
use crate::services::storage::KeyValueStore;
use crate::state::persistent::PersistentValue;

#[derive(Clone)]
pub struct SessionStore {
    record: PersistentValue<SessionRecord>,
    navigator: Rc<dyn Navigator>,
}

impl SessionStore {
    /// Abre el store; el registro persistido (si hay) se carga enseguida
    pub fn new(key: &str, storage: Rc<dyn KeyValueStore>, navigator: Rc<dyn Navigator>) -> Self {
        let record = PersistentValue::new(key, storage);
        if record.is_set() {
            log::info!("💾 [SESSION] Sesión restaurada desde storage");
        }
        Self { record, navigator }
    }

    /// Relee el registro persistido. Datos ausentes o inválidos = sin sesión.
    pub fn load(&self) -> Option<SessionRecord> {
        self.record.load()
    }

    pub fn current(&self) -> Option<SessionRecord> {
        self.record.get()
    }

    pub fn is_signed_in(&self) -> bool {
        self.record.is_set()
    }

    /// Pone fecha al draft, lo persiste, notifica y navega a la página
    /// de inicio autenticada.
    pub fn sign_in(&self, draft: SessionDraft) -> Option<SessionRecord> {
        let record = draft.into_record(Utc::now());
        log::info!("🔐 [SESSION] Iniciando sesión a las {}", record.signed_in_at);

        self.record.set(Some(record));
        let stored = self.record.get();
        if stored.is_none() {
            log::error!("❌ [SESSION] No se pudo guardar la sesión, se sigue sin sesión");
        }

        self.navigator.navigate(Route::Home, false);
        stored
    }

    /// Borra el registro, notifica y navega a la página de sign-in
    pub fn sign_out(&self) {
        log::info!("👋 [SESSION] Cerrando sesión");
        self.record.set(None);
        self.navigator.navigate(Route::SignIn, false);
    }

    pub fn subscribe<F>(&self, callback: F)
    where
        F: Fn() + 'static,
    {
        self.record.subscribe(callback);
    }
}
