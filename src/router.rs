// ============================================================================
// ROUTER - Rutas y guards de sesión
// ============================================================================
// Los guards solo miran si existe un registro de sesión. Se evalúan en
// cada render; no se cachea nada entre navegaciones.
// ============================================================================

use crate::models::SessionRecord;

/// Ubicaciones navegables
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Route {
    /// Página de inicio autenticada
    Home,
    SignIn,
}

impl Route {
    pub fn path(&self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::SignIn => "/login",
        }
    }

    /// Rutas desconocidas dan `None`; quien llama las redirige a `Home`
    pub fn from_path(path: &str) -> Option<Route> {
        let trimmed = path.trim_end_matches('/');
        match trimmed {
            "" => Some(Route::Home),
            "/login" => Some(Route::SignIn),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    Render,
    Redirect(Route),
}

/// Renderiza solo sin sesión, si no redirige a `redirect_to`
/// (por defecto `Home`).
pub fn require_unauthenticated(
    session: Option<&SessionRecord>,
    redirect_to: Option<Route>,
) -> GuardDecision {
    match session {
        None => GuardDecision::Render,
        Some(_) => GuardDecision::Redirect(redirect_to.unwrap_or(Route::Home)),
    }
}

/// Renderiza solo con sesión, si no redirige a `redirect_to`
/// (por defecto `SignIn`).
pub fn require_authenticated(
    session: Option<&SessionRecord>,
    redirect_to: Option<Route>,
) -> GuardDecision {
    match session {
        Some(_) => GuardDecision::Render,
        None => GuardDecision::Redirect(redirect_to.unwrap_or(Route::SignIn)),
    }
}

/// Resultado de buscar una ruta en la tabla
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Resolution {
    Render(Route),
    /// Reemplazar la ubicación actual por esta ruta
    Redirect(Route),
}

/// Tabla de rutas: `/login` sin sesión, `/` con sesión, el resto va a `/`.
pub fn resolve(path: &str, session: Option<&SessionRecord>) -> Resolution {
    let Some(route) = Route::from_path(path) else {
        return Resolution::Redirect(Route::Home);
    };

    let decision = match route {
        Route::SignIn => require_unauthenticated(session, None),
        Route::Home => require_authenticated(session, None),
    };

    match decision {
        GuardDecision::Render => Resolution::Render(route),
        GuardDecision::Redirect(target) => Resolution::Redirect(target),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn record() -> SessionRecord {
        SessionRecord {
            signed_in_at: Utc::now(),
            user_agent: None,
            found_easter_egg: false,
        }
    }

    #[test]
    fn paths_map_to_routes() {
        assert_eq!(Route::from_path("/"), Some(Route::Home));
        assert_eq!(Route::from_path(""), Some(Route::Home));
        assert_eq!(Route::from_path("/login"), Some(Route::SignIn));
        assert_eq!(Route::from_path("/login/"), Some(Route::SignIn));
        assert_eq!(Route::from_path("/settings"), None);

        for route in [Route::Home, Route::SignIn] {
            assert_eq!(Route::from_path(route.path()), Some(route));
        }
    }

    #[test]
    fn authenticated_guard_renders_iff_session_present() {
        let session = record();
        assert_eq!(
            require_authenticated(Some(&session), None),
            GuardDecision::Render
        );
        assert_eq!(
            require_authenticated(None, None),
            GuardDecision::Redirect(Route::SignIn)
        );
    }

    #[test]
    fn unauthenticated_guard_renders_iff_session_absent() {
        let session = record();
        assert_eq!(require_unauthenticated(None, None), GuardDecision::Render);
        assert_eq!(
            require_unauthenticated(Some(&session), None),
            GuardDecision::Redirect(Route::Home)
        );
    }

    #[test]
    fn guards_honor_custom_redirect_target() {
        let session = record();
        assert_eq!(
            require_authenticated(None, Some(Route::Home)),
            GuardDecision::Redirect(Route::Home)
        );
        assert_eq!(
            require_unauthenticated(Some(&session), Some(Route::SignIn)),
            GuardDecision::Redirect(Route::SignIn)
        );
    }

    #[test]
    fn guards_are_idempotent() {
        let session = record();
        for present in [None, Some(&session)] {
            assert_eq!(
                require_authenticated(present, None),
                require_authenticated(present, None)
            );
            assert_eq!(
                require_unauthenticated(present, None),
                require_unauthenticated(present, None)
            );
        }
    }

    #[test]
    fn resolve_applies_guards_and_catch_all() {
        let session = record();

        assert_eq!(resolve("/", Some(&session)), Resolution::Render(Route::Home));
        assert_eq!(resolve("/", None), Resolution::Redirect(Route::SignIn));
        assert_eq!(resolve("/login", None), Resolution::Render(Route::SignIn));
        assert_eq!(
            resolve("/login", Some(&session)),
            Resolution::Redirect(Route::Home)
        );
        assert_eq!(resolve("/nowhere", None), Resolution::Redirect(Route::Home));
        assert_eq!(
            resolve("/nowhere", Some(&session)),
            Resolution::Redirect(Route::Home)
        );
    }
}
