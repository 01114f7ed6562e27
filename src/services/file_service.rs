// ============================================================================
// FILE SERVICE - Lado navegador de los helpers de archivos/imágenes
// ============================================================================
// FileReader (gloo-file), <img>.decode(), <canvas> y fetch (gloo-net).
// Todo error vuelve como FileError, cuyo texto se puede mostrar tal cual.
// ============================================================================

use gloo_file::futures::{read_as_bytes, read_as_data_url};
use gloo_net::http::Request;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{CanvasRenderingContext2d, File, HtmlCanvasElement, HtmlImageElement};

use crate::dom::create_element;
use crate::error::FileError;
use crate::utils::encoding::{md5_hex, to_data_url};
use crate::utils::image::{load_and_resize, Dimensions, ImageCodec, ResizeLimits};
use crate::utils::validate::not_empty_string;

/// Decodifica con un `<img>` y re-codifica con un `<canvas>`
#[derive(Clone, Copy, Debug, Default)]
pub struct CanvasImageCodec;

impl ImageCodec for CanvasImageCodec {
    type Image = HtmlImageElement;

    async fn decode(&self, data_url: &str) -> Result<HtmlImageElement, FileError> {
        let image = HtmlImageElement::new().map_err(|_| FileError::Decode)?;
        image.set_src(data_url);
        JsFuture::from(image.decode()).await.map_err(|e| {
            log::warn!("⚠️ [FILE] Falló la decodificación de la imagen: {:?}", e);
            FileError::Decode
        })?;
        Ok(image)
    }

    fn natural_size(&self, image: &HtmlImageElement) -> Dimensions {
        Dimensions::new(
            f64::from(image.natural_height()),
            f64::from(image.natural_width()),
        )
    }

    fn encode_resized(
        &self,
        image: &HtmlImageElement,
        size: Dimensions,
    ) -> Result<String, FileError> {
        let canvas = create_element("canvas")
            .ok()
            .and_then(|el| el.dyn_into::<HtmlCanvasElement>().ok())
            .ok_or(FileError::Processing)?;
        canvas.set_height(size.height.round() as u32);
        canvas.set_width(size.width.round() as u32);

        let context = canvas
            .get_context("2d")
            .ok()
            .flatten()
            .and_then(|ctx| ctx.dyn_into::<CanvasRenderingContext2d>().ok())
            .ok_or(FileError::Processing)?;

        context
            .draw_image_with_html_image_element_and_dw_and_dh(
                image,
                0.0,
                0.0,
                size.width,
                size.height,
            )
            .map_err(|_| FileError::Processing)?;

        canvas.to_data_url().map_err(|_| FileError::Processing)
    }
}

fn gloo_file(file: &File) -> gloo_file::File {
    gloo_file::File::from(file.clone())
}

/// Leer `file` como URL `data:` (contenido en base64)
pub async fn read_file_to_base64(file: &File) -> Result<String, FileError> {
    read_as_data_url(&gloo_file(file)).await.map_err(|e| {
        log::error!("❌ [FILE] Error leyendo {}: {}", file.name(), e);
        FileError::Read
    })
}

/// Leer `file` y decodificarlo en un elemento imagen
pub async fn read_file_to_image(file: &File) -> Result<HtmlImageElement, FileError> {
    let data_url = read_file_to_base64(file).await?;
    CanvasImageCodec.decode(&data_url).await
}

/// MD5 en hex de los bytes del archivo
pub async fn get_file_hash(file: &File) -> Result<String, FileError> {
    let bytes = read_as_bytes(&gloo_file(file)).await.map_err(|e| {
        log::error!("❌ [FILE] Error leyendo {}: {}", file.name(), e);
        FileError::Read
    })?;
    Ok(md5_hex(&bytes))
}

/// Leer una imagen, aplicar `limits` y devolver la imagen redimensionada
pub async fn load_file_and_resize(
    file: &File,
    limits: &ResizeLimits,
) -> Result<HtmlImageElement, FileError> {
    let data_url = read_file_to_base64(file).await.map_err(|_| FileError::Decode)?;
    let resized = load_and_resize(&CanvasImageCodec, &data_url, limits).await?;
    log::info!(
        "🖼️ [FILE] {} redimensionado a {}x{}",
        file.name(),
        resized.size.width,
        resized.size.height
    );
    Ok(resized.image)
}

/// Descargar `url` y devolverla como URL `data:`
pub async fn convert_image_url_to_base64(url: &str) -> Result<String, FileError> {
    if !not_empty_string(url) {
        return Err(FileError::InvalidUrl);
    }

    let fetch_error = |reason: String| FileError::Fetch {
        url: url.to_string(),
        reason,
    };

    let response = Request::get(url)
        .send()
        .await
        .map_err(|e| fetch_error(e.to_string()))?;
    if !response.ok() {
        return Err(fetch_error(format!("HTTP {}", response.status())));
    }

    let mime = response.headers().get("content-type").unwrap_or_default();
    let bytes = response
        .binary()
        .await
        .map_err(|e| fetch_error(e.to_string()))?;

    Ok(to_data_url(&mime, &bytes))
}
