// ============================================================================
// SIGN-IN VIEWMODEL - Verificación de la respuesta y easter egg
// ============================================================================
// Idle -> Validating -> { Accepted | Rejected | EasterEgg }
// Rejected y EasterEgg se muestran hasta la siguiente tecla.
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use crate::config::AppConfig;
use crate::models::SessionDraft;
use crate::state::SessionStore;
use crate::utils::is_enter_key;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SignInStatus {
    Idle,
    Validating,
    Accepted,
    Rejected,
    EasterEgg,
}

#[derive(Clone, Debug, PartialEq)]
pub enum SubmitOutcome {
    Accepted(SessionDraft),
    Rejected,
    EasterEgg,
}

/// Máquina de estados del sign-in. Guarda el valor escrito y el flag del
/// easter egg mientras dura la página de sign-in.
#[derive(Clone, Debug)]
pub struct SignInFlow {
    pass_phrase: String,
    easter_egg_token: String,
    input: String,
    status: SignInStatus,
    found_easter_egg: bool,
}

fn normalize(value: &str) -> String {
    value.trim().to_uppercase()
}

impl SignInFlow {
    pub fn new(pass_phrase: &str, easter_egg_token: &str) -> Self {
        Self {
            pass_phrase: normalize(pass_phrase),
            easter_egg_token: normalize(easter_egg_token),
            input: String::new(),
            status: SignInStatus::Idle,
            found_easter_egg: false,
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(&config.pass_phrase, &config.easter_egg_token)
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn status(&self) -> SignInStatus {
        self.status
    }

    pub fn found_easter_egg(&self) -> bool {
        self.found_easter_egg
    }

    pub fn shows_invalid(&self) -> bool {
        self.status == SignInStatus::Rejected
    }

    pub fn shows_easter_egg(&self) -> bool {
        self.status == SignInStatus::EasterEgg
    }

    pub fn set_input(&mut self, value: impl Into<String>) {
        self.input = value.into();
    }

    /// Limpia el indicador Rejected/EasterEgg visible
    pub fn clear_indicator(&mut self) {
        if matches!(self.status, SignInStatus::Rejected | SignInStatus::EasterEgg) {
            self.status = SignInStatus::Idle;
        }
    }

    /// Tecla soltada en el input: limpia el indicador y envía con Enter
    pub fn key_up(&mut self, key: &str, key_code: u32, user_agent: Option<&str>) -> Option<SubmitOutcome> {
        self.clear_indicator();
        is_enter_key(key, key_code).then(|| self.submit(user_agent))
    }

    pub fn submit(&mut self, user_agent: Option<&str>) -> SubmitOutcome {
        self.status = SignInStatus::Validating;
        let answer = normalize(&self.input);

        if answer == self.easter_egg_token {
            self.input.clear();
            self.found_easter_egg = true;
            self.status = SignInStatus::EasterEgg;
            return SubmitOutcome::EasterEgg;
        }

        if answer == self.pass_phrase {
            self.status = SignInStatus::Accepted;
            return SubmitOutcome::Accepted(SessionDraft {
                user_agent: user_agent.map(str::to_string),
                found_easter_egg: self.found_easter_egg,
            });
        }

        self.status = SignInStatus::Rejected;
        SubmitOutcome::Rejected
    }

    /// Volver a una página nueva: input vacío, sin indicador, flag limpio
    pub fn reset(&mut self) {
        self.input.clear();
        self.status = SignInStatus::Idle;
        self.found_easter_egg = false;
    }
}

/// Conecta el flow de sign-in con el session store
#[derive(Clone)]
pub struct SignInViewModel {
    flow: Rc<RefCell<SignInFlow>>,
    session: SessionStore,
}

impl SignInViewModel {
    pub fn new(flow: Rc<RefCell<SignInFlow>>, session: SessionStore) -> Self {
        Self { flow, session }
    }

    pub fn flow(&self) -> Rc<RefCell<SignInFlow>> {
        Rc::clone(&self.flow)
    }

    pub fn set_input(&self, value: String) {
        self.flow.borrow_mut().set_input(value);
    }

    pub fn key_up(&self, key: &str, key_code: u32, user_agent: Option<&str>) -> Option<SubmitOutcome> {
        let outcome = self.flow.borrow_mut().key_up(key, key_code, user_agent)?;
        self.handle(&outcome);
        Some(outcome)
    }

    pub fn submit(&self, user_agent: Option<&str>) -> SubmitOutcome {
        let outcome = self.flow.borrow_mut().submit(user_agent);
        self.handle(&outcome);
        outcome
    }

    /// Cierra sesión y olvida lo escrito en la página de sign-in
    pub fn sign_out(&self) {
        self.flow.borrow_mut().reset();
        self.session.sign_out();
    }

    fn handle(&self, outcome: &SubmitOutcome) {
        match outcome {
            SubmitOutcome::Accepted(draft) => {
                log::info!("✅ [SIGN-IN] Respuesta aceptada");
                // el borrow del flow ya se soltó antes de correr los observers
                self.session.sign_in(draft.clone());
            }
            SubmitOutcome::Rejected => log::info!("🚫 [SIGN-IN] Respuesta incorrecta"),
            SubmitOutcome::EasterEgg => log::info!("🥚 [SIGN-IN] Easter egg encontrado"),
        }
    }
}
