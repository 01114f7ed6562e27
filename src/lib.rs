// ============================================================================
// SIGN-IN GATE - SPA protegida por respuesta secreta (Rust puro + MVVM)
// ============================================================================
// - Views: Funciones que renderizan DOM (sin lógica)
// - ViewModels: Estado + lógica del sign-in
// - Services: Storage del navegador, historial, archivos
// - State: State Management con Rc<RefCell> y subscribers
// - Models: El registro de sesión persistido
// ============================================================================

mod app;
pub mod config;
mod dom;
pub mod error;
pub mod models;
pub mod router;
pub mod services;
pub mod state;
pub mod utils;
pub mod viewmodels;
mod views;

use std::cell::RefCell;
use std::rc::Rc;

use serde_json::Value;
use wasm_bindgen::prelude::*;
use wasm_logger::Config;
use web_sys::{File, HtmlImageElement};

use crate::app::App;
use crate::config::CONFIG;
use crate::services::file_service;
use crate::services::{BrowserStorage, KeyValueStore};
use crate::state::PersistentValue;
use crate::utils::image::ResizeLimits;

thread_local! {
    static APP: RefCell<Option<App>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    wasm_logger::init(Config::new(CONFIG.log_level()));
    log::info!("🚀 [MAIN] Iniciando sign-in gate ({})", CONFIG.environment);
    if !CONFIG.is_production() {
        log::debug!(
            "🔧 [MAIN] Clave de sesión \"{}\", root #{}",
            CONFIG.session_storage_key,
            CONFIG.root_element_id
        );
    }

    let mut app = App::new()?;
    app.render()?;

    APP.with(|cell| {
        *cell.borrow_mut() = Some(app);
    });

    // se registra UNA vez aquí; atrás/adelante solo cambia la URL
    dom::on_window("popstate", |_e| {
        log::debug!("🔄 [MAIN] popstate");
        rerender_app();
    })?;

    Ok(())
}

/// Re-render completo de la ruta actual
pub fn rerender_app() {
    APP.with(|cell| match cell.borrow_mut().as_mut() {
        Some(app) => {
            if let Err(e) = app.render() {
                log::error!("❌ [RERENDER] Error re-renderizando: {:?}", e);
            }
        }
        None => log::warn!("⚠️ [RERENDER] App no está inicializada"),
    });
}

/// Cerrar sesión desde fuera de la página (p. ej. un script del host)
#[wasm_bindgen(js_name = signOut)]
pub fn sign_out() {
    APP.with(|cell| {
        if let Some(app) = cell.borrow().as_ref() {
            app.state().sign_in_view_model().sign_out();
        }
    });
}

// ----------------------------------------------------------------------------
// Helpers de archivos
// ----------------------------------------------------------------------------

#[wasm_bindgen(js_name = getFileHash)]
pub async fn get_file_hash(file: File) -> Result<String, JsValue> {
    Ok(file_service::get_file_hash(&file).await?)
}

#[wasm_bindgen(js_name = readFileToBase64)]
pub async fn read_file_to_base64(file: File) -> Result<String, JsValue> {
    Ok(file_service::read_file_to_base64(&file).await?)
}

#[wasm_bindgen(js_name = readFileToImage)]
pub async fn read_file_to_image(file: File) -> Result<HtmlImageElement, JsValue> {
    Ok(file_service::read_file_to_image(&file).await?)
}

#[wasm_bindgen(js_name = loadFileAndResize)]
pub async fn load_file_and_resize(
    file: File,
    min_height: f64,
    max_height: f64,
    min_width: f64,
    max_width: f64,
    max_bytes: usize,
) -> Result<HtmlImageElement, JsValue> {
    let limits = ResizeLimits {
        min_height,
        max_height,
        min_width,
        max_width,
        max_bytes,
    };
    Ok(file_service::load_file_and_resize(&file, &limits).await?)
}

#[wasm_bindgen(js_name = convertImageUrlToBase64)]
pub async fn convert_image_url_to_base64(url: String) -> Result<String, JsValue> {
    Ok(file_service::convert_image_url_to_base64(&url).await?)
}

// ----------------------------------------------------------------------------
// Valores JSON persistidos (localStorage / sessionStorage)
// ----------------------------------------------------------------------------

fn stored_value(key: &str, per_tab: bool) -> PersistentValue<Value> {
    let store: Rc<dyn KeyValueStore> = if per_tab {
        Rc::new(BrowserStorage::session())
    } else {
        Rc::new(BrowserStorage::local())
    };
    PersistentValue::new(key, store)
}

/// Lee `key` como JSON; valores ausentes o inválidos vuelven como `null`
#[wasm_bindgen(js_name = readStoredValue)]
pub fn read_stored_value(key: &str, per_tab: bool) -> Result<JsValue, JsValue> {
    let value = stored_value(key, per_tab).get().unwrap_or(Value::Null);
    serde_json::to_string(&value)
        .map_err(|e| JsValue::from_str(&e.to_string()))
        .and_then(|json| js_sys::JSON::parse(&json))
}

/// Escribe `json` bajo `key`; `null` o un string vacío la borran.
/// Devuelve si queda un valor guardado.
#[wasm_bindgen(js_name = writeStoredValue)]
pub fn write_stored_value(key: &str, json: &str, per_tab: bool) -> Result<bool, JsValue> {
    let value: Option<Value> = if json.trim().is_empty() {
        None
    } else {
        match serde_json::from_str(json).map_err(|e| JsValue::from_str(&e.to_string()))? {
            Value::Null => None,
            other => Some(other),
        }
    };

    let stored = stored_value(key, per_tab);
    stored.set(value);
    Ok(stored.is_set())
}
