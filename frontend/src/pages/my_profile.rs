use std::rc::Rc;

use leptos::*;

use crate::api::{Agent, ApiClient};
use crate::components::cards::PropertyCard;
use crate::components::layout::{ErrorMessage, LoadingSpinner};
use crate::state::auth::use_auth;

#[component]
pub fn MyProfilePage() -> impl IntoView {
    let (auth, _) = use_auth();
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let client = Rc::new(api);

    let profile = create_resource(
        move || auth.with(|state| state.identity.as_ref().map(|i| i.userid.clone())),
        move |userid| {
            let client = client.clone();
            async move {
                match userid {
                    Some(userid) => client.get_agent(&userid).await.map(Some),
                    None => Ok(None),
                }
            }
        },
    );

    view! {
        <div>
            <h1 class="text-2xl font-semibold text-fg">"My Profile"</h1>
            {move || match profile.get() {
                None => view! { <LoadingSpinner /> }.into_view(),
                Some(Err(error)) => view! { <ErrorMessage message=error.to_string()/> }.into_view(),
                Some(Ok(None)) => {
                    view! { <p class="mt-8 text-sm text-fg-muted">"Not signed in"</p> }.into_view()
                }
                Some(Ok(Some(agent))) => view! {
                    <ProfileCard agent=agent.clone()/>
                    <ProfileProperties agent=agent/>
                }
                .into_view(),
            }}
        </div>
    }
}

#[component]
fn ProfileCard(agent: Agent) -> impl IntoView {
    view! {
        <div class="mt-6 max-w-3xl bg-surface-elevated rounded-lg shadow-sm border border-border p-6 flex items-center gap-4">
            <img
                src=agent.avatar.clone().unwrap_or_default()
                alt=agent.name.clone()
                class="h-20 w-20 rounded-full object-cover"
            />
            <div>
                <h2 class="text-xl font-semibold text-fg">{agent.name.clone()}</h2>
                <p class="text-sm text-fg-muted">{agent.email.clone()}</p>
            </div>
        </div>
    }
}

#[component]
fn ProfileProperties(agent: Agent) -> impl IntoView {
    view! {
        <h2 class="mt-8 text-lg font-semibold text-fg">"My Properties"</h2>
        {if agent.all_properties.is_empty() {
            view! { <p class="mt-4 text-sm text-fg-muted">"No properties yet"</p> }.into_view()
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
    }
}
