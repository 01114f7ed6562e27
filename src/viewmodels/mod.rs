pub mod sign_in_viewmodel;

pub use sign_in_viewmodel::{SignInFlow, SignInStatus, SignInViewModel, SubmitOutcome};
