// ============================================================================
// USER NAV - Datos de la sesión y botón de cerrar sesión
// ============================================================================

use chrono::Local;
use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::{on_click, ElementBuilder};
use crate::models::SessionRecord;
use crate::state::AppState;
use crate::utils::constants::*;
use crate::utils::format_human_readable_timestamp;

pub fn render_user_nav(state: &AppState, record: &SessionRecord) -> Result<Element, JsValue> {
    let signed_in_since =
        format_human_readable_timestamp(&record.signed_in_at.with_timezone(&Local));
    let user_agent = record.user_agent.as_deref().unwrap_or_default();
    let easter_egg = if record.found_easter_egg {
        EASTER_EGG_NAV_FOUND
    } else {
        EASTER_EGG_NAV_MISSING
    };

    let details = ElementBuilder::new("dl")?
        .class("user-nav-details")
        .children([
            detail_row(NAV_SIGNED_IN_SINCE, &signed_in_since)?,
            detail_row(NAV_USER_AGENT, user_agent)?,
            detail_row(NAV_EASTER_EGG, easter_egg)?,
        ])?
        .build();

    let sign_out = ElementBuilder::new("button")?
        .class("terminal-button sign-out-button")
        .attr("type", "button")?
        .text(NAV_SIGN_OUT)
        .build();

    let vm = state.sign_in_view_model();
    on_click(&sign_out, move |_e| {
        log::info!("👋 [NAV] Click en cerrar sesión");
        vm.sign_out();
    })?;

    ElementBuilder::new("nav")?
        .class("user-nav")
        .child(details)?
        .child(sign_out)
        .map(ElementBuilder::build)
}

fn detail_row(label: &str, value: &str) -> Result<Element, JsValue> {
    ElementBuilder::new("div")?
        .class("user-nav-row")
        .child(ElementBuilder::new("dt")?.text(label).build())?
        .child(ElementBuilder::new("dd")?.text(value).build())
        .map(ElementBuilder::build)
}
