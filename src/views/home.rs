// ============================================================================
// HOME VIEW - Página de inicio autenticada
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::ElementBuilder;
use crate::models::SessionRecord;
use crate::utils::constants::*;

pub fn render_home(record: &SessionRecord) -> Result<Element, JsValue> {
    log::debug!("🎬 [HOME] render_home()");
    let hint = render_easter_egg_hint(record.found_easter_egg)?;

    let container = ElementBuilder::new("div")?
        .class("container")
        .child(hint)?
        .build();

    Ok(ElementBuilder::new("div")?
        .class("page home-page")
        .child(container)?
        .build())
}

/// Felicita si se encontró el easter egg, si no explica cómo encontrarlo
fn render_easter_egg_hint(found: bool) -> Result<Element, JsValue> {
    let hint = ElementBuilder::new("div")?.class("easter-egg-hint");

    if found {
        return Ok(hint
            .child(ElementBuilder::new("p")?.text(EASTER_EGG_HINT_FOUND).build())?
            .build());
    }

    let nudge = ElementBuilder::new("p")?.build();
    nudge.append_with_str_1(EASTER_EGG_HINT_NICE_BEFORE)?;
    nudge.append_child(&ElementBuilder::new("i")?.text(EASTER_EGG_HINT_NICE_WORD).build())?;
    nudge.append_with_str_1(EASTER_EGG_HINT_NICE_AFTER)?;

    Ok(hint
        .child(ElementBuilder::new("p")?.text(EASTER_EGG_HINT_LINE).build())?
        .child(nudge)?
        .build())
}
