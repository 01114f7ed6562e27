// ============================================================================
// APP - Aplicación principal: resuelve la ruta y la renderiza
// ============================================================================

use std::rc::Rc;

use gloo_timers::callback::Timeout;
use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::config::CONFIG;
use crate::dom::{append_child, get_element_by_id, set_inner_html};
use crate::models::SessionRecord;
use crate::router::{resolve, Resolution, Route};
use crate::services::{BrowserStorage, HistoryNavigator, Navigator};
use crate::state::AppState;
use crate::views::render_route;

/// Cada redirect cae en una ruta que renderiza; dos saltos siempre alcanzan
const MAX_REDIRECTS: usize = 2;

pub struct App {
    state: AppState,
    root: Element,
}

impl App {
    pub fn new() -> Result<Self, JsValue> {
        let root_id = &CONFIG.root_element_id;
        let root = get_element_by_id(root_id)
            .ok_or_else(|| JsValue::from_str(&format!("No #{} element found", root_id)))?;

        let state = AppState::new(
            &CONFIG,
            Rc::new(BrowserStorage::local()),
            Rc::new(HistoryNavigator::new()),
        );

        state.subscribe_to_changes(|| {
            // batchear con lo que corra en este mismo tick
            Timeout::new(0, crate::rerender_app).forget();
        });

        Ok(Self { state, root })
    }

    pub fn render(&mut self) -> Result<(), JsValue> {
        let route = self.current_route();
        log::info!("🎬 [APP] Renderizando {}", route.path());

        set_inner_html(&self.root, "");
        let view = render_route(route, &self.state)?;
        append_child(&self.root, &view)
    }

    fn current_route(&self) -> Route {
        let session = self.state.session.current();
        settle_route(self.state.navigator.as_ref(), session.as_ref())
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }
}

/// Aplica los guards al path actual, reemplazando la entrada del historial
/// en cada redirect, y devuelve la ruta a renderizar
pub fn settle_route(navigator: &dyn Navigator, session: Option<&SessionRecord>) -> Route {
    let mut path = navigator.current_path();

    for _ in 0..=MAX_REDIRECTS {
        match resolve(&path, session) {
            Resolution::Render(route) => return route,
            Resolution::Redirect(route) => {
                log::info!("↪️ [APP] {} redirige a {}", path, route.path());
                navigator.navigate(route, true);
                path = route.path().to_string();
            }
        }
    }

    log::warn!("⚠️ [APP] Loop de redirects en {}, mostrando sign-in", path);
    Route::SignIn
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::navigation::RecordingNavigator;
    use chrono::Utc;

    fn record() -> SessionRecord {
        SessionRecord {
            signed_in_at: Utc::now(),
            user_agent: None,
            found_easter_egg: false,
        }
    }

    #[test]
    fn allowed_route_renders_without_navigation() {
        let navigator = RecordingNavigator::new(Route::SignIn);
        assert_eq!(settle_route(&navigator, None), Route::SignIn);
        assert!(navigator.history().is_empty());
    }

    #[test]
    fn signed_out_home_replaces_to_sign_in() {
        let navigator = RecordingNavigator::new(Route::Home);
        assert_eq!(settle_route(&navigator, None), Route::SignIn);
        assert_eq!(navigator.history(), vec![(Route::SignIn, true)]);
    }

    #[test]
    fn signed_in_sign_in_page_replaces_to_home() {
        let navigator = RecordingNavigator::new(Route::SignIn);
        let session = record();
        assert_eq!(settle_route(&navigator, Some(&session)), Route::Home);
        assert_eq!(navigator.history(), vec![(Route::Home, true)]);
    }

    #[test]
    fn unknown_path_hops_through_home() {
        let navigator = RecordingNavigator::at_path("/nowhere");
        assert_eq!(settle_route(&navigator, None), Route::SignIn);
        assert_eq!(
            navigator.history(),
            vec![(Route::Home, true), (Route::SignIn, true)]
        );

        let navigator = RecordingNavigator::at_path("/nowhere");
        let session = record();
        assert_eq!(settle_route(&navigator, Some(&session)), Route::Home);
        assert_eq!(navigator.history(), vec![(Route::Home, true)]);
    }
}
