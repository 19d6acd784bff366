//! Session lifecycle. The token and identity live in persistent storage and
//! are only ever written together: a login that cannot establish the full
//! identity persists nothing, so `check` never sees a half-built session.
//! All reactive transitions flow through the `AuthState` signal pair owned
//! by `AuthProvider`.

use leptos::*;
use thiserror::Error;

use crate::{
    api::{ApiClient, ApiError, Identity, UserUpsertRequest},
    utils::{
        google::{self, CredentialResponse},
        jwt::{self, JwtError},
        storage::{self, StorageError},
    },
};

pub type AuthContext = (ReadSignal<AuthState>, WriteSignal<AuthState>);

#[derive(Debug, Clone, Error, PartialEq)]
pub enum AuthError {
    #[error("No credential returned from the sign-in widget")]
    MissingCredential,
    #[error("Failed to decode credential: {0}")]
    Decode(#[from] JwtError),
    #[error("Profile exchange failed: {0}")]
    ProfileExchange(#[from] ApiError),
    #[error("Session storage failed: {0}")]
    Storage(#[from] StorageError),
}

#[derive(Debug, Clone, PartialEq)]
pub struct LoginOutcome {
    pub success: bool,
    pub redirect_to: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LogoutOutcome {
    pub success: bool,
    pub redirect_to: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AuthErrorInfo {
    pub message: &'static str,
    pub name: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CheckOutcome {
    pub authenticated: bool,
    pub error: Option<AuthErrorInfo>,
    pub logout: bool,
    pub redirect_to: Option<&'static str>,
}

/// Decodes the Google credential, exchanges the profile for a backend user
/// record, and persists the session. Nothing is stored unless both steps
/// succeed.
pub async fn login(
    client: &ApiClient,
    response: CredentialResponse,
) -> Result<LoginOutcome, AuthError> {
    let credential = response.credential.ok_or(AuthError::MissingCredential)?;
    let profile = jwt::parse_jwt(&credential)?;

    let upsert = client
        .upsert_user(&UserUpsertRequest {
            name: profile.name.clone(),
            email: profile.email.clone(),
            avatar: profile.picture.clone(),
        })
        .await?;

    let identity = Identity::from_profile(profile, upsert.id);
    persist_session(&credential, &identity)?;

    Ok(LoginOutcome {
        success: true,
        redirect_to: "/",
    })
}

fn persist_session(token: &str, identity: &Identity) -> Result<(), AuthError> {
    let user_json = serde_json::to_string(identity)
        .map_err(|_| StorageError::Access(storage::USER_KEY.to_string()))?;
    storage::set_item(storage::TOKEN_KEY, token)?;
    // Roll the token back if the identity write fails; the pair is atomic.
    if let Err(error) = storage::set_item(storage::USER_KEY, &user_json) {
        let _ = storage::remove_item(storage::TOKEN_KEY);
        return Err(error.into());
    }
    Ok(())
}

/// Clears the session and best-effort revokes the credential with the
/// identity provider. Always succeeds.
pub async fn logout() -> LogoutOutcome {
    if let Ok(Some(token)) = storage::get_item(storage::TOKEN_KEY) {
        let _ = storage::remove_item(storage::TOKEN_KEY);
        let _ = storage::remove_item(storage::USER_KEY);
        google::revoke(&token);
    }
    LogoutOutcome {
        success: true,
        redirect_to: "/login",
    }
}

pub fn check() -> CheckOutcome {
    match storage::get_item(storage::TOKEN_KEY) {
        Ok(Some(_)) => CheckOutcome {
            authenticated: true,
            error: None,
            logout: false,
            redirect_to: None,
        },
        _ => CheckOutcome {
            authenticated: false,
            error: Some(AuthErrorInfo {
                message: "Check failed",
                name: "Token not found",
            }),
            logout: true,
            redirect_to: Some("/login"),
        },
    }
}

/// The system is flat and role-free.
pub fn get_permissions() -> Option<Vec<String>> {
    None
}

pub fn get_identity() -> Option<Identity> {
    let raw = storage::get_item(storage::USER_KEY).ok().flatten()?;
    serde_json::from_str(&raw).ok()
}

pub fn on_error(error: ApiError) -> ApiError {
    log::error!("API error: {}", error);
    error
}

#[derive(Debug, Clone, Default)]
pub struct AuthState {
    pub identity: Option<Identity>,
    pub is_authenticated: bool,
    pub loading: bool,
}

fn create_auth_context() -> AuthContext {
    let (auth_state, set_auth_state) = create_signal(AuthState::default());
    let outcome = check();
    set_auth_state.update(|state| {
        state.identity = get_identity();
        state.is_authenticated = outcome.authenticated;
        state.loading = false;
    });
    (auth_state, set_auth_state)
}

#[component]
pub fn AuthProvider(children: Children) -> impl IntoView {
    let ctx = create_auth_context();
    provide_context::<AuthContext>(ctx);
    view! { <>{children()}</> }
}

pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().unwrap_or_else(|| create_signal(AuthState::default()))
}

pub async fn login_request(
    client: &ApiClient,
    response: CredentialResponse,
    set_auth_state: WriteSignal<AuthState>,
) -> Result<LoginOutcome, AuthError> {
    set_auth_state.update(|state| state.loading = true);

    match login(client, response).await {
        Ok(outcome) => {
            set_auth_state.update(|state| {
                state.identity = get_identity();
                state.is_authenticated = true;
                state.loading = false;
            });
            Ok(outcome)
        }
        Err(error) => {
            set_auth_state.update(|state| {
                state.identity = None;
                state.is_authenticated = false;
                state.loading = false;
            });
            log::error!("Login failed: {}", error);
            Err(error)
        }
    }
}

pub async fn logout_request(set_auth_state: WriteSignal<AuthState>) -> LogoutOutcome {
    let outcome = logout().await;

    set_auth_state.update(|state| {
        state.identity = None;
        state.is_authenticated = false;
        state.loading = false;
    });

    outcome
}

pub fn use_login_action() -> Action<CredentialResponse, Result<LoginOutcome, AuthError>> {
    let (_auth, set_auth) = use_auth();
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);

    create_action(move |response: &CredentialResponse| {
        let payload = response.clone();
        let api = api.clone();
        async move { login_request(&api, payload, set_auth).await }
    })
}

pub fn use_logout_action() -> Action<(), LogoutOutcome> {
    let (_auth, set_auth) = use_auth();

    create_action(move |_: &()| async move { logout_request(set_auth).await })
}


#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine as _};
    use httpmock::prelude::*;
    use serde_json::json;

    fn google_credential(payload: serde_json::Value) -> String {
        let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"RS256","typ":"JWT"}"#);
        let claims = URL_SAFE_NO_PAD.encode(payload.to_string().as_bytes());
        format!("{}.{}.signature", header, claims)
    }

    #[tokio::test]
    async fn login_success_persists_token_and_identity_together() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(POST).path("/api/v1/users").json_body(json!({
                "name": "Alice",
                "email": "a@x.com",
                "avatar": "url"
            }));
            then.status(200).json_body(json!({"_id": "123"}));
        });

        let runtime = create_runtime();
        let (state, set_state) = create_signal(AuthState::default());
        let api = ApiClient::new_with_base_url(server.url("/api/v1"));

        let credential = google_credential(json!({
            "name": "Alice",
            "email": "a@x.com",
            "picture": "url"
        }));
        let outcome = login_request(
            &api,
            CredentialResponse {
                credential: Some(credential.clone()),
            },
            set_state,
        )
        .await
        .unwrap();

        assert!(outcome.success);
        assert_eq!(outcome.redirect_to, "/");

        assert_eq!(
            storage::get_item(storage::TOKEN_KEY).unwrap().as_deref(),
            Some(credential.as_str())
        );
        let identity = get_identity().unwrap();
        assert_eq!(identity.name.as_deref(), Some("Alice"));
        assert_eq!(identity.email.as_deref(), Some("a@x.com"));
        assert_eq!(identity.avatar.as_deref(), Some("url"));
        assert_eq!(identity.userid, "123");

        assert!(check().authenticated);
        let snapshot = state.get();
        assert!(snapshot.is_authenticated);
        assert_eq!(snapshot.identity, Some(identity));
        runtime.dispose();
    }

    #[tokio::test]
    async fn failed_profile_exchange_persists_nothing() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(POST).path("/api/v1/users");
            then.status(500)
                .json_body(json!({"error": "upsert failed", "code": "INTERNAL"}));
        });

        let runtime = create_runtime();
        let (state, set_state) = create_signal(AuthState::default());
        let api = ApiClient::new_with_base_url(server.url("/api/v1"));

        let credential = google_credential(json!({"name": "Alice", "email": "a@x.com"}));
        let error = login_request(
            &api,
            CredentialResponse {
                credential: Some(credential),
            },
            set_state,
        )
        .await
        .unwrap_err();

        assert!(matches!(error, AuthError::ProfileExchange(_)));
        assert_eq!(storage::get_item(storage::TOKEN_KEY).unwrap(), None);
        assert_eq!(storage::get_item(storage::USER_KEY).unwrap(), None);
        assert!(!check().authenticated);
        assert!(!state.get().is_authenticated);
        runtime.dispose();
    }

    #[tokio::test]
    async fn non_200_profile_exchange_rejects_the_login() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(POST).path("/api/v1/users");
            then.status(201).json_body(json!({"_id": "123"}));
        });

        let runtime = create_runtime();
        let (state, set_state) = create_signal(AuthState::default());
        let api = ApiClient::new_with_base_url(server.url("/api/v1"));

        let credential = google_credential(json!({"name": "Alice", "email": "a@x.com"}));
        let error = login_request(
            &api,
            CredentialResponse {
                credential: Some(credential),
            },
            set_state,
        )
        .await
        .unwrap_err();

        assert!(matches!(error, AuthError::ProfileExchange(_)));
        assert_eq!(storage::get_item(storage::TOKEN_KEY).unwrap(), None);
        assert_eq!(storage::get_item(storage::USER_KEY).unwrap(), None);
        assert!(!state.get().is_authenticated);
        runtime.dispose();
    }

    #[tokio::test]
    async fn malformed_credential_is_rejected_before_any_request() {
        let server = MockServer::start_async().await;
        let runtime = create_runtime();
        let (_state, set_state) = create_signal(AuthState::default());
        let api = ApiClient::new_with_base_url(server.url("/api/v1"));

        let error = login_request(
            &api,
            CredentialResponse {
                credential: Some("not-a-jwt".into()),
            },
            set_state,
        )
        .await
        .unwrap_err();

        assert!(matches!(error, AuthError::Decode(_)));
        assert_eq!(storage::get_item(storage::TOKEN_KEY).unwrap(), None);
        runtime.dispose();
    }

    #[tokio::test]
    async fn missing_credential_is_rejected() {
        let server = MockServer::start_async().await;
        let runtime = create_runtime();
        let (_state, set_state) = create_signal(AuthState::default());
        let api = ApiClient::new_with_base_url(server.url("/api/v1"));

        let error = login_request(&api, CredentialResponse { credential: None }, set_state)
            .await
            .unwrap_err();

        assert_eq!(error, AuthError::MissingCredential);
        runtime.dispose();
    }

    #[tokio::test]
    async fn logout_clears_the_session() {
        storage::set_item(storage::TOKEN_KEY, "tok").unwrap();
        storage::set_item(storage::USER_KEY, r#"{"userid":"123"}"#).unwrap();

        let runtime = create_runtime();
        let (state, set_state) = create_signal(AuthState {
            identity: get_identity(),
            is_authenticated: true,
            loading: false,
        });

        let outcome = logout_request(set_state).await;
        assert!(outcome.success);
        assert_eq!(outcome.redirect_to, "/login");

        assert_eq!(storage::get_item(storage::TOKEN_KEY).unwrap(), None);
        assert_eq!(storage::get_item(storage::USER_KEY).unwrap(), None);
        assert!(get_identity().is_none());

        let check_after = check();
        assert!(!check_after.authenticated);
        assert!(check_after.logout);
        assert_eq!(check_after.redirect_to, Some("/login"));

        let snapshot = state.get();
        assert!(!snapshot.is_authenticated);
        assert!(snapshot.identity.is_none());
        runtime.dispose();
    }
}
