use leptos::*;

use super::repository::use_agents_repository;
use crate::components::cards::AgentCard;
use crate::components::layout::{ErrorMessage, LoadingSpinner};

#[component]
pub fn AgentListPage() -> impl IntoView {
    let repo = use_agents_repository();
    let agents = create_resource(
        || (),
        move |_| {
            let repo = repo.clone();
            async move { repo.list().await }
        },
    );

    view! {
        <div>
            <h1 class="text-2xl font-semibold text-fg">"Agents"</h1>
            {move || match agents.get() {
                None => view! { <LoadingSpinner /> }.into_view(),
                Some(Err(error)) => view! { <ErrorMessage message=error.to_string()/> }.into_view(),
                Some(Ok(agents)) => {
                    if agents.is_empty() {
                        view! { <p class="mt-8 text-sm text-fg-muted">"No agents yet"</p> }
                            .into_view()
                    } else {
                        view! {
                            <div class="mt-6 grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-3 gap-4">
                                {agents
                                    .into_iter()
                                    .map(|agent| view! { <AgentCard agent=agent/> })
                                    .collect_view()}
                            </div>
                        }
                        .into_view()
                    }
                }
            }}
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn agent_list_renders_heading_and_spinner() {
        let html = render_to_string(move || view! { <AgentListPage /> });
        assert!(html.contains("Agents"));
        assert!(html.contains("animate-spin"));
    }
}
