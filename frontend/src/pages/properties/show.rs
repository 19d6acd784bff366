use leptos::*;

use super::repository::use_properties_repository;
use crate::api::Property;
use crate::components::layout::{ErrorMessage, LoadingSpinner};
use crate::pages::dashboard::utils::format_price;
use crate::resources;

#[component]
pub fn PropertyShowPage(#[prop(into)] id: Signal<String>) -> impl IntoView {
    let repo = use_properties_repository();

    let fetch_repo = repo.clone();
    let property = create_resource(
        move || id.get(),
        move |id| {
            let repo = fetch_repo.clone();
            async move { repo.get(&id).await }
        },
    );

    let delete_action = create_action(move |id: &String| {
        let repo = repo.clone();
        let id = id.clone();
        async move { repo.delete(&id).await }
    });

    let delete_error = create_rw_signal(None::<String>);
    create_effect(move |_| {
        if let Some(result) = delete_action.value().get() {
            match result {
                Ok(()) => {
                    if let Some(window) = web_sys::window() {
                        let _ = window.location().set_href("/properties");
                    }
                }
                Err(err) => delete_error.set(Some(err.to_string())),
            }
        }
    });

    let can_delete = resources::resource_by_name("properties")
        .map(|resource| resource.can_delete)
        .unwrap_or(false);
    let delete_pending = delete_action.pending();
    let on_delete = move |_| {
        if delete_pending.get_untracked() {
            return;
        }
        delete_action.dispatch(id.get_untracked());
    };

    view! {
        <div>
            {move || delete_error.get().map(|message| view! { <ErrorMessage message=message/> })}
            {move || match property.get() {
                None => view! { <LoadingSpinner /> }.into_view(),
                Some(Err(err)) => view! { <ErrorMessage message=err.to_string()/> }.into_view(),
                Some(Ok(property)) => view! {
                    <PropertyDetail
                        property=property
                        can_delete=can_delete
                        delete_pending=delete_pending
                        on_delete=Callback::new(on_delete)
                    />
                }
                .into_view(),
            }}
        </div>
    }
}

#[component]
fn PropertyDetail(
    property: Property,
    can_delete: bool,
    #[prop(into)] delete_pending: Signal<bool>,
    on_delete: Callback<()>,
) -> impl IntoView {
    let edit_href = format!("/properties/edit/{}", property.id);
    let price = format_price(property.price);

    view! {
        <div class="max-w-3xl bg-surface-elevated rounded-lg shadow-sm border border-border overflow-hidden">
            <img src=property.photo.clone() alt=property.title.clone() class="h-64 w-full object-cover"/>
            <div class="p-6">
                <div class="flex items-start justify-between">
                    <div>
                        <span class="text-xs uppercase tracking-wide text-fg-muted capitalize">
                            {property.property_type.clone()}
                        </span>
                        <h1 class="mt-1 text-2xl font-semibold text-fg">{property.title.clone()}</h1>
                        <p class="mt-1 text-sm text-fg-muted">
                            <i class="fas fa-location-dot mr-1"></i>
                            {property.location.clone()}
                        </p>
                    </div>
                    <span class="rounded-md action-primary-bg px-3 py-1 text-sm font-medium text-white">
                        {price}
                    </span>
                </div>
                <p class="mt-4 text-sm text-fg-muted whitespace-pre-line">
                    {property.description.clone()}
                </p>
                <div class="mt-6 flex gap-3">
                    <a
                        href=edit_href
                        class="rounded-md border border-border px-4 py-2 text-sm text-fg hover:bg-surface"
                    >
                        <i class="fas fa-pen mr-2"></i>
                        "Edit"
                    </a>
                    <Show when=move || can_delete>
                        <button
                            class="rounded-md status-error-bg px-4 py-2 text-sm font-medium text-white disabled:opacity-50"
                            disabled=move || delete_pending.get()
                            on:click=move |_| on_delete.call(())
                        >
                            <i class="fas fa-trash mr-2"></i>
                            {move || if delete_pending.get() { "Deleting..." } else { "Delete" }}
                        </button>
                    </Show>
                </div>
            </div>
        </div>
    }
}
