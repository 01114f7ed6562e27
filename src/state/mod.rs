// ============================================================================
// STATE MODULE - State management con Rc<RefCell> y notificaciones
// ============================================================================

pub mod app_state;
pub mod persistent;
pub mod reactivity;
pub mod session_store;

pub use app_state::AppState;
pub use persistent::PersistentValue;
pub use reactivity::ReactiveState;
pub use session_store::SessionStore;
