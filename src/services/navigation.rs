// ============================================================================
// NAVIGATION - Cambios de ubicación con la History API
// ============================================================================

#[cfg(test)]
use std::cell::RefCell;

use wasm_bindgen::JsValue;
use web_sys::window;

use crate::router::Route;

pub trait Navigator {
    /// Path de la ubicación actual (`/` si no se conoce)
    fn current_path(&self) -> String;

    /// Navegar a `route`. Con `replace` se sobrescribe la entrada actual del
    /// historial en vez de agregar una nueva.
    fn navigate(&self, route: Route, replace: bool);
}

/// Navigator sobre `window.history`. Solo cambia la URL; el render lo
/// disparan los observers de sesión y el listener de `popstate`.
#[derive(Clone, Copy, Debug, Default)]
pub struct HistoryNavigator;

impl HistoryNavigator {
    pub fn new() -> Self {
        Self
    }
}

impl Navigator for HistoryNavigator {
    fn current_path(&self) -> String {
        window()
            .and_then(|w| w.location().pathname().ok())
            .unwrap_or_else(|| Route::Home.path().to_string())
    }

    fn navigate(&self, route: Route, replace: bool) {
        let Some(history) = window().and_then(|w| w.history().ok()) else {
            log::warn!("⚠️ [NAV] History API no disponible");
            return;
        };

        let path = route.path();
        let result = if replace {
            history.replace_state_with_url(&JsValue::NULL, "", Some(path))
        } else {
            history.push_state_with_url(&JsValue::NULL, "", Some(path))
        };

        match result {
            Ok(()) => log::debug!("🧭 [NAV] -> {} (replace: {})", path, replace),
            Err(e) => log::error!("❌ [NAV] No se pudo navegar a {}: {:?}", path, e),
        }
    }
}

/// Navigator que solo recuerda a dónde lo mandaron
#[cfg(test)]
#[derive(Debug)]
pub struct RecordingNavigator {
    path: RefCell<String>,
    history: RefCell<Vec<(Route, bool)>>,
}

#[cfg(test)]
impl RecordingNavigator {
    pub fn new(start: Route) -> Self {
        Self {
            path: RefCell::new(start.path().to_string()),
            history: RefCell::new(Vec::new()),
        }
    }

    pub fn at_path(path: &str) -> Self {
        Self {
            path: RefCell::new(path.to_string()),
            history: RefCell::new(Vec::new()),
        }
    }

    /// Cada par `(route, replace)` recibido, del más antiguo al más nuevo
    pub fn history(&self) -> Vec<(Route, bool)> {
        self.history.borrow().clone()
    }

    pub fn last_route(&self) -> Option<Route> {
        self.history.borrow().last().map(|(route, _)| *route)
    }
}

#[cfg(test)]
impl Navigator for RecordingNavigator {
    fn current_path(&self) -> String {
        self.path.borrow().clone()
    }

    fn navigate(&self, route: Route, replace: bool) {
        *self.path.borrow_mut() = route.path().to_string();
        self.history.borrow_mut().push((route, replace));
    }
}
