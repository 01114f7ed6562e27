// ============================================================================
// PAGE LAYOUT - Envuelve cada página y agrega el user nav con sesión
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::ElementBuilder;
use crate::state::AppState;
use crate::views::user_nav::render_user_nav;

pub fn render_layout(state: &AppState, page: Element) -> Result<Element, JsValue> {
    let layout = ElementBuilder::new("div")?.class("page-layout");

    let layout = match state.session.current() {
        Some(record) => layout.child(render_user_nav(state, &record)?)?,
        None => layout,
    };

    layout.child(page).map(ElementBuilder::build)
}
