//! Google Identity Services widget integration. The GIS script is loaded by
//! the host page; the API surface is reached through `js_sys::Reflect` so no
//! extern block has to track it. Host builds get no-op stubs.

/// Payload handed to the credential callback by the GIS widget.
#[derive(Debug, Clone, PartialEq)]
pub struct CredentialResponse {
    pub credential: Option<String>,
}

#[cfg(target_arch = "wasm32")]
mod gis {
    use super::CredentialResponse;
    use js_sys::{Function, Object, Reflect};
    use wasm_bindgen::prelude::*;
    use wasm_bindgen::JsCast;

    fn accounts_id() -> Option<Object> {
        let window = web_sys::window()?;
        let google = Reflect::get(&window, &"google".into()).ok()?;
        if google.is_undefined() || google.is_null() {
            return None;
        }
        let accounts = Reflect::get(&google, &"accounts".into()).ok()?;
        let id = Reflect::get(&accounts, &"id".into()).ok()?;
        id.dyn_into::<Object>().ok()
    }

    fn method(target: &Object, name: &str) -> Option<Function> {
        Reflect::get(target, &name.into())
            .ok()
            .and_then(|f| f.dyn_into::<Function>().ok())
    }

    /// Initializes the widget with the configured client id and renders the
    /// sign-in button into `#<button_id>`. Returns false when the GIS script
    /// is missing or the mount point is absent.
    pub fn init_sign_in(
        client_id: &str,
        button_id: &str,
        mut on_credential: impl FnMut(CredentialResponse) + 'static,
    ) -> bool {
        let Some(id) = accounts_id() else {
            log::warn!("Google Identity Services script not loaded");
            return false;
        };

        let callback = Closure::<dyn FnMut(JsValue)>::new(move |response: JsValue| {
            let credential = Reflect::get(&response, &"credential".into())
                .ok()
                .and_then(|value| value.as_string());
            on_credential(CredentialResponse { credential });
        });

        let options = Object::new();
        let _ = Reflect::set(&options, &"client_id".into(), &client_id.into());
        let _ = Reflect::set(&options, &"callback".into(), callback.as_ref());
        callback.forget();

        let Some(initialize) = method(&id, "initialize") else {
            return false;
        };
        if initialize.call1(&id, &options).is_err() {
            return false;
        }

        let Some(target) = web_sys::window()
            .and_then(|window| window.document())
            .and_then(|document| document.get_element_by_id(button_id))
        else {
            log::warn!("Sign-in button mount point #{} not found", button_id);
            return false;
        };

        let button_options = Object::new();
        let _ = Reflect::set(&button_options, &"theme".into(), &"filled_blue".into());
        let _ = Reflect::set(&button_options, &"size".into(), &"large".into());
        match method(&id, "renderButton") {
            Some(render) => render.call2(&id, &target, &button_options).is_ok(),
            None => false,
        }
    }

    /// Best-effort revocation of the credential with the identity provider.
    pub fn revoke(token: &str) {
        let Some(id) = accounts_id() else {
            return;
        };
        if let Some(revoke) = method(&id, "revoke") {
            let done = Closure::<dyn FnMut(JsValue)>::new(|_: JsValue| {});
            let _ = revoke.call2(&id, &token.into(), done.as_ref());
            done.forget();
        }
    }
}

#[cfg(target_arch = "wasm32")]
pub use gis::{init_sign_in, revoke};

#[cfg(not(target_arch = "wasm32"))]
pub fn init_sign_in(
    _client_id: &str,
    _button_id: &str,
    _on_credential: impl FnMut(CredentialResponse) + 'static,
) -> bool {
    false
}

#[cfg(not(target_arch = "wasm32"))]
pub fn revoke(_token: &str) {}
