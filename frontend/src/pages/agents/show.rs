use leptos::*;

use super::repository::use_agents_repository;
use crate::api::Agent;
use crate::components::cards::PropertyCard;
use crate::components::layout::{ErrorMessage, LoadingSpinner};

#[component]
pub fn AgentShowPage(#[prop(into)] id: Signal<String>) -> impl IntoView {
    let repo = use_agents_repository();
    let agent = create_resource(
        move || id.get(),
        move |id| {
            let repo = repo.clone();
            async move { repo.get(&id).await }
        },
    );

    view! {
        {move || match agent.get() {
            None => view! { <LoadingSpinner /> }.into_view(),
            Some(Err(error)) => view! { <ErrorMessage message=error.to_string()/> }.into_view(),
            Some(Ok(agent)) => view! { <AgentProfile agent=agent/> }.into_view(),
        }}
    }
}

#[component]
fn AgentProfile(agent: Agent) -> impl IntoView {
    let count = agent.all_properties.len();

    view! {
        <div>
            <div class="max-w-3xl bg-surface-elevated rounded-lg shadow-sm border border-border p-6 flex items-center gap-4">
                <img
                    src=agent.avatar.clone().unwrap_or_default()
                    alt=agent.name.clone()
                    class="h-20 w-20 rounded-full object-cover"
                />
                <div>
                    <h1 class="text-2xl font-semibold text-fg">{agent.name.clone()}</h1>
                    <p class="text-sm text-fg-muted">{agent.email.clone()}</p>
                    <p class="mt-1 text-sm text-fg-muted">{format!("{} properties", count)}</p>
                </div>
            </div>
            <h2 class="mt-8 text-lg font-semibold text-fg">"Listed Properties"</h2>
            {if agent.all_properties.is_empty() {
                view! { <p class="mt-4 text-sm text-fg-muted">"No properties listed"</p> }
                    .into_view()
            } else {
                view! {
                    <div class="mt-4 grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-3 gap-4">
                        {agent
                            .all_properties
                            .into_iter()
                            .map(|property| view! { <PropertyCard property=property/> })
                            .collect_view()}
                    </div>
                }
                .into_view()
            }}
        </div>
    }
}
