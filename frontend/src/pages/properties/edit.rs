use leptos::*;

use super::form::{PropertyForm, PropertyFormSignals};
use super::repository::use_properties_repository;
use super::utils::validate_property_form;
use crate::api::PropertyPayload;
use crate::components::layout::{ErrorMessage, LoadingSpinner};
use crate::state::auth;

#[component]
pub fn PropertyEditPage(#[prop(into)] id: Signal<String>) -> impl IntoView {
    let repo = use_properties_repository();
    let form = PropertyFormSignals::new();
    let error = create_rw_signal(None::<String>);

    let fetch_repo = repo.clone();
    let property = create_resource(
        move || id.get(),
        move |id| {
            let repo = fetch_repo.clone();
            async move { repo.get(&id).await }
        },
    );

    create_effect(move |_| {
        if let Some(Ok(existing)) = property.get() {
            form.populate(&existing);
        }
    });

    let update_action = create_action(move |input: &(String, PropertyPayload)| {
        let repo = repo.clone();
        let (id, payload) = input.clone();
        async move { repo.update(&id, &payload).await }
    });

    create_effect(move |_| {
        if let Some(result) = update_action.value().get() {
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

    let pending = update_action.pending();
    let on_submit = Callback::new(move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        if pending.get_untracked() {
            return;
        }
        let email = auth::get_identity().and_then(|identity| identity.email);
        match validate_property_form(&form.snapshot(), email) {
            Ok(payload) => {
                error.set(None);
                update_action.dispatch((id.get_untracked(), payload));
            }
            Err(message) => error.set(Some(message)),
        }
    });

    view! {
        {move || match property.get() {
            None => view! { <LoadingSpinner /> }.into_view(),
            Some(Err(err)) => view! { <ErrorMessage message=err.to_string()/> }.into_view(),
            Some(Ok(_)) => view! {
                <PropertyForm
                    heading="Edit Property"
                    submit_label="Save"
                    form=form
                    error=error
                    pending=pending
                    on_submit=on_submit
                />
            }
            .into_view(),
        }}
    }
}
