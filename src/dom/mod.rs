// ============================================================================
// DOM MODULE - Helpers para manipulación del DOM
// ============================================================================

pub mod builder;
pub mod element;
pub mod events;

pub use builder::*;
pub use element::*;
pub use events::*;
