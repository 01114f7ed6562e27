// ============================================================================
// ERRORS - Errores de storage y del pipeline de archivos
// ============================================================================
// El texto Display de cada variante es el mensaje que ve el usuario.
// ============================================================================

use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum StorageError {
    #[error("Storage is not available")]
    Unavailable,

    #[error("Error writing \"{key}\" to storage")]
    Write { key: String },

    #[error("Error removing \"{key}\" from storage")]
    Remove { key: String },

    #[error("Error reading \"{key}\" from storage")]
    Read { key: String },

    #[error("Error serializing \"{key}\": {reason}")]
    Serialize { key: String, reason: String },

    #[error("Ignoring malformed \"{key}\": {reason}")]
    Deserialize { key: String, reason: String },
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum FileError {
    #[error("Error reading file. Please try again.")]
    Read,

    #[error("Error reading file. Please select a different file.")]
    Empty,

    #[error("Error loading file. Please try again.")]
    Decode,

    #[error(
        "The selected file's image dimensions are too small. Please select a larger image with a minimum height of {min_height} pixels and a minimum width of {min_width} pixels."
    )]
    TooSmall { min_height: f64, min_width: f64 },

    #[error(
        "The selected file's size is too large. Please select a smaller file with a maximum file size of {max_bytes} bytes."
    )]
    TooLarge { max_bytes: usize },

    #[error("Error processing file. Please try again.")]
    Processing,

    #[error("Invalid url")]
    InvalidUrl,

    #[error("Error fetching \"{url}\": {reason}")]
    Fetch { url: String, reason: String },
}

impl From<StorageError> for JsValue {
    fn from(error: StorageError) -> Self {
        JsValue::from_str(&error.to_string())
    }
}

impl From<FileError> for JsValue {
    fn from(error: FileError) -> Self {
        JsValue::from_str(&error.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn too_small_message_names_both_limits() {
        let message = FileError::TooSmall {
            min_height: 100.0,
            min_width: 50.0,
        }
        .to_string();
        assert!(message.contains("minimum height of 100 pixels"));
        assert!(message.contains("minimum width of 50 pixels"));
    }

    #[test]
    fn too_large_message_names_byte_budget() {
        let message = FileError::TooLarge { max_bytes: 2048 }.to_string();
        assert!(message.ends_with("maximum file size of 2048 bytes."));
    }
}
