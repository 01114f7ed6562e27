// ============================================================================
// ELEMENT HELPERS - Funciones helper para manipular elementos con web_sys
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, Window};

pub fn window() -> Option<Window> {
    web_sys::window()
}

pub fn document() -> Option<Document> {
    window()?.document()
}

pub fn get_element_by_id(id: &str) -> Option<Element> {
    document()?.get_element_by_id(id)
}

pub fn create_element(tag: &str) -> Result<Element, JsValue> {
    document()
        .ok_or_else(|| JsValue::from_str("No document"))
        .and_then(|doc| doc.create_element(tag))
}

/// Establecer class name (reemplaza todas las clases)
pub fn set_class_name(element: &Element, class: &str) {
    element.set_class_name(class);
}

/// Mostrar u ocultar con el atributo `hidden` (no depende de CSS)
pub fn set_hidden(element: &Element, hidden: bool) -> Result<(), JsValue> {
    if hidden {
        element.set_attribute("hidden", "")
    } else {
        element.remove_attribute("hidden")
    }
}

pub fn set_text_content(element: &Element, text: &str) {
    element.set_text_content(Some(text));
}

pub fn set_inner_html(element: &Element, html: &str) {
    element.set_inner_html(html);
}

pub fn append_child(parent: &Element, child: &Element) -> Result<(), JsValue> {
    parent.append_child(child).map(|_| ())
}

pub fn set_attribute(element: &Element, name: &str, value: &str) -> Result<(), JsValue> {
    element.set_attribute(name, value)
}

/// `navigator.userAgent`, si el navegador lo expone
pub fn user_agent() -> Option<String> {
    window()?.navigator().user_agent().ok()
}
