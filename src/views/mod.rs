// ============================================================================
// VIEWS - Funciones que renderizan DOM por ruta
// ============================================================================

pub mod home;
pub mod layout;
pub mod sign_in;
pub mod user_nav;

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::router::Route;
use crate::state::AppState;

/// Construye la página completa de una ruta ya aprobada por los guards
pub fn render_route(route: Route, state: &AppState) -> Result<Element, JsValue> {
    let page = match (route, state.session.current()) {
        (Route::Home, Some(record)) => home::render_home(&record)?,
        // los guards redirigen antes; por si acaso, mostrar el sign-in
        (Route::Home, None) | (Route::SignIn, _) => sign_in::render_sign_in(state)?,
    };
    layout::render_layout(state, page)
}
