// ============================================================================
// APP STATE - Todo lo que necesita un render
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use crate::config::AppConfig;
use crate::services::navigation::Navigator;
use crate::services::storage::KeyValueStore;
use crate::state::session_store::SessionStore;
use crate::viewmodels::{SignInFlow, SignInViewModel};

#[derive(Clone)]
pub struct AppState {
    pub session: SessionStore,
    /// Vive aquí y no en la página para que el flag del easter egg
    /// sobreviva a los re-renders
    pub sign_in_flow: Rc<RefCell<SignInFlow>>,
    pub navigator: Rc<dyn Navigator>,
}

impl AppState {
    pub fn new(
        config: &AppConfig,
        storage: Rc<dyn KeyValueStore>,
        navigator: Rc<dyn Navigator>,
    ) -> Self {
        let session = SessionStore::new(
            &config.session_storage_key,
            storage,
            Rc::clone(&navigator),
        );
        Self {
            session,
            sign_in_flow: Rc::new(RefCell::new(SignInFlow::from_config(config))),
            navigator,
        }
    }

    pub fn sign_in_view_model(&self) -> SignInViewModel {
        SignInViewModel::new(Rc::clone(&self.sign_in_flow), self.session.clone())
    }

    /// Ejecutar `callback` tras cada cambio de sesión
    pub fn subscribe_to_changes<F>(&self, callback: F)
    where
        F: Fn() + 'static,
    {
        self.session.subscribe(callback);
    }
}
