// ============================================================================
// EVENT HANDLING - Helpers para event listeners
// ============================================================================
// Los listeners de la página se mantienen vivos con `forget()`: la página
// se reconstruye en cada render y el navegador los suelta con su elemento.
// Los listeners de window se registran UNA sola vez (ver `lib.rs`).
// ============================================================================

use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, Event, InputEvent, KeyboardEvent, MouseEvent};

pub fn on_click<F>(element: &Element, handler: F) -> Result<(), JsValue>
where
    F: FnMut(MouseEvent) + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(MouseEvent)>);
    element.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

pub fn on_input<F>(element: &Element, handler: F) -> Result<(), JsValue>
where
    F: FnMut(InputEvent) + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(InputEvent)>);
    element.add_event_listener_with_callback("input", closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

pub fn on_keyup<F>(element: &Element, handler: F) -> Result<(), JsValue>
where
    F: FnMut(KeyboardEvent) + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(KeyboardEvent)>);
    element.add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

/// Listener global en `window`; registrar una vez por tipo de evento
pub fn on_window<F>(event_type: &str, handler: F) -> Result<(), JsValue>
where
    F: FnMut(Event) + 'static,
{
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("No window"))?;
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
    window.add_event_listener_with_callback(event_type, closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}
