// Utilidades compartidas: formateo, validación, encoding e imágenes

pub mod constants;
pub mod encoding;
pub mod format;
pub mod image;
pub mod input;
pub mod validate;

pub use constants::*;
pub use format::{format_human_readable_timestamp, format_phone_number, pad_number, pad_number_with};
pub use input::is_enter_key;
pub use validate::{is_date, is_object, not_empty_array, not_empty_string};
