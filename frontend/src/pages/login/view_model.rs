use crate::state::auth::{self, AuthError, LoginOutcome};
use crate::utils::google::CredentialResponse;
use leptos::*;

#[derive(Clone, Copy)]
pub struct LoginViewModel {
    pub error: RwSignal<Option<String>>,
    pub login_action: Action<CredentialResponse, Result<LoginOutcome, AuthError>>,
}

pub fn use_login_view_model() -> LoginViewModel {
    let error = create_rw_signal(None::<String>);
    let login_action = auth::use_login_action();

    create_effect(move |_| {
        if let Some(result) = login_action.value().get() {
            match result {
                Ok(outcome) => {
                    error.set(None);
                    if let Some(window) = web_sys::window() {
                        let _ = window.location().set_href(outcome.redirect_to);
                    }
                }
                Err(err) => error.set(Some(err.to_string())),
            }
        }
    });

    LoginViewModel {
        error,
        login_action,
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::with_runtime;

    #[test]
    fn login_view_model_starts_clean() {
        with_runtime(|| {
            let vm = use_login_view_model();
            assert!(vm.error.get().is_none());
            assert!(!vm.login_action.pending().get());
        });
    }
}
