use base64::{engine::general_purpose::STANDARD, Engine as _};
use md5::{Digest, Md5};

/// MIME usado cuando el origen no informa ninguno
pub const FALLBACK_MIME: &str = "application/octet-stream";

/// `data:<mime>;base64,<payload>` de `bytes`
pub fn to_data_url(mime: &str, bytes: &[u8]) -> String {
    let mime = mime.split(';').next().map(str::trim).unwrap_or_default();
    let mime = if mime.is_empty() { FALLBACK_MIME } else { mime };
    format!("data:{};base64,{}", mime, STANDARD.encode(bytes))
}

/// Digest MD5 de `bytes` en hex minúscula
pub fn md5_hex(bytes: &[u8]) -> String {
    format!("{:x}", Md5::digest(bytes))
}

/// Tamaño en bytes de `text` dentro de un Blob (largo UTF-8)
pub fn blob_size(text: &str) -> usize {
    text.len()
}
