pub mod session;

pub use session::{SessionDraft, SessionRecord};
