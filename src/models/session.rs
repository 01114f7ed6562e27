use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ============================================================================
// SESSION RECORD - Prueba persistida de inicio de sesión
// ============================================================================

/// Registro guardado bajo la clave de sesión. Su presencia es lo único que
/// miran los guards.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SessionRecord {
    /// Lo pone el session store al iniciar sesión
    pub signed_in_at: DateTime<Utc>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_agent: Option<String>,

    #[serde(default)]
    pub found_easter_egg: bool,
}

/// Parte del registro que aporta quien llama; el timestamp lo agrega
/// `SessionStore::sign_in`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionDraft {
    pub user_agent: Option<String>,
    pub found_easter_egg: bool,
}

impl SessionDraft {
    pub fn into_record(self, signed_in_at: DateTime<Utc>) -> SessionRecord {
        SessionRecord {
            signed_in_at,
            user_agent: self.user_agent,
            found_easter_egg: self.found_easter_egg,
        }
    }
}
