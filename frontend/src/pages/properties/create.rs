use leptos::*;

use super::form::{PropertyForm, PropertyFormSignals};
use super::repository::use_properties_repository;
use super::utils::validate_property_form;
use crate::api::PropertyPayload;
use crate::state::auth;

#[component]
pub fn PropertyCreatePage() -> impl IntoView {
    let repo = use_properties_repository();
    let form = PropertyFormSignals::new();
    let error = create_rw_signal(None::<String>);

    let create_action = create_action(move |payload: &PropertyPayload| {
        let repo = repo.clone();
        let payload = payload.clone();
        async move { repo.create(&payload).await }
    });

    create_effect(move |_| {
        if let Some(result) = create_action.value().get() {
            match result {
                Ok(_) => {
                    if let Some(window) = web_sys::window() {
                        let _ = window.location().set_href("/properties");
                    }
                }
                Err(err) => error.set(Some(err.to_string())),
            }
        }
    });

    let pending = create_action.pending();
    let on_submit = Callback::new(move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        if pending.get_untracked() {
            return;
        }
        let email = auth::get_identity().and_then(|identity| identity.email);
        match validate_property_form(&form.snapshot(), email) {
            Ok(payload) => {
                error.set(None);
                create_action.dispatch(payload);
            }
            Err(message) => error.set(Some(message)),
        }
    });

    view! {
        <PropertyForm
            heading="Add Property"
            submit_label="Create"
            form=form
            error=error
            pending=pending
            on_submit=on_submit
        />
    }
}
