pub mod ssr;

pub mod helpers {
    use leptos::*;

    use crate::api::types::Identity;
    use crate::state::auth::{AuthContext, AuthState};

    pub fn sample_identity() -> Identity {
        Identity {
            name: Some("Alice Example".to_string()),
            email: Some("alice@example.com".to_string()),
            avatar: Some("https://example.com/alice.png".to_string()),
            userid: "u-1".to_string(),
            claims: Default::default(),
        }
    }

    /// Installs an auth context with a fixed state so guarded components can
    /// be rendered without running the login flow.
    pub fn provide_auth(is_authenticated: bool, loading: bool) {
        let state = AuthState {
            identity: is_authenticated.then(sample_identity),
            is_authenticated,
            loading,
        };
        let (auth, set_auth) = create_signal(state);
        provide_context::<AuthContext>((auth, set_auth));
    }
}
