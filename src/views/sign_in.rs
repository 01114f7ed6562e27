// ============================================================================
// SIGN-IN VIEW - Pantalla de inicio de sesión
// ============================================================================
// Las teclas nunca re-renderizan la página: los indicadores y el input se
// sincronizan en el lugar para no perder el foco ni el cursor.
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlInputElement};

use crate::dom::{append_child, create_element, on_click, on_input, on_keyup, set_hidden, user_agent, ElementBuilder};
use crate::state::AppState;
use crate::utils::constants::*;
use crate::viewmodels::SignInFlow;

pub fn render_sign_in(state: &AppState) -> Result<Element, JsValue> {
    log::debug!("🎬 [SIGN-IN] render_sign_in()");
    let vm = state.sign_in_view_model();
    let flow = vm.flow();

    let prompt = ElementBuilder::new("h3")?
        .text(SIGN_IN_PROMPT)
        .child(create_element("br")?)?
        .child(ElementBuilder::new("i")?.text(SIGN_IN_QUESTION).build())?
        .build();
    let header = ElementBuilder::new("div")?
        .class("sign-in-top")
        .child(prompt)?
        .build();

    let input = create_element("input")?
        .dyn_into::<HtmlInputElement>()
        .map_err(|_| JsValue::from_str("input is not an HtmlInputElement"))?;
    input.set_class_name("terminal-input");
    input.set_type("password");
    input.set_attribute("autocomplete", "off")?;
    input.set_attribute("aria-label", SIGN_IN_QUESTION)?;
    input.set_value(flow.borrow().input());

    let button = ElementBuilder::new("button")?
        .class("terminal-button")
        .attr("type", "button")?
        .text(SIGN_IN_BUTTON)
        .build();

    let form = ElementBuilder::new("div")?
        .class("sign-in-form")
        .child(input.clone().into())?
        .child(button.clone())?
        .build();

    let invalid = ElementBuilder::new("div")?
        .class("sign-in-invalid")
        .attr("role", "alert")?
        .text(INVALID_SIGN_IN)
        .build();

    let easter_egg = ElementBuilder::new("div")?
        .class("sign-in-easter-egg")
        .child(ElementBuilder::new("b")?.text(EASTER_EGG_FOUND_TITLE).build())?
        .child(create_element("br")?)?
        .build();
    easter_egg.append_with_str_1(EASTER_EGG_FOUND_BODY)?;

    sync_indicators(&flow.borrow(), &input, &invalid, &easter_egg)?;

    {
        let vm = vm.clone();
        let input_el = input.clone();
        on_input(&input, move |_e| {
            vm.set_input(input_el.value());
        })?;
    }

    {
        let vm = vm.clone();
        let flow = flow.clone();
        let (input_el, invalid, easter_egg) = (input.clone(), invalid.clone(), easter_egg.clone());
        on_keyup(&input, move |e| {
            let agent = user_agent();
            vm.key_up(&e.key(), e.key_code(), agent.as_deref());
            if let Err(err) = sync_indicators(&flow.borrow(), &input_el, &invalid, &easter_egg) {
                log::error!("❌ [SIGN-IN] No se pudieron actualizar los indicadores: {:?}", err);
            }
        })?;
    }

    {
        let (input_el, invalid, easter_egg) = (input.clone(), invalid.clone(), easter_egg.clone());
        on_click(&button, move |_e| {
            let agent = user_agent();
            vm.submit(agent.as_deref());
            if let Err(err) = sync_indicators(&flow.borrow(), &input_el, &invalid, &easter_egg) {
                log::error!("❌ [SIGN-IN] No se pudieron actualizar los indicadores: {:?}", err);
            }
        })?;
    }

    let container = ElementBuilder::new("div")?
        .class("container")
        .children([header, form, invalid, easter_egg])?
        .build();

    let page = ElementBuilder::new("div")?.class("page sign-in-page").build();
    append_child(&page, &container)?;
    Ok(page)
}

/// Refleja el flow en el DOM: visibilidad de indicadores y valor del input
/// (se limpia tras el easter egg).
fn sync_indicators(
    flow: &SignInFlow,
    input: &HtmlInputElement,
    invalid: &Element,
    easter_egg: &Element,
) -> Result<(), JsValue> {
    set_hidden(invalid, !flow.shows_invalid())?;
    set_hidden(easter_egg, !flow.shows_easter_egg())?;
    if input.value() != flow.input() {
        input.set_value(flow.input());
    }
    Ok(())
}
