use crate::api::{Agent, Property};
use leptos::*;

#[component]
pub fn PropertyCard(property: Property) -> impl IntoView {
    let detail = format!("/properties/show/{}", property.id);
    let title = property.title.clone();
    view! {
        <a
            href=detail
            class="block bg-surface-elevated rounded-lg shadow-sm border border-border overflow-hidden hover:shadow-md"
        >
            <img class="h-40 w-full object-cover" src=property.photo alt=title.clone()/>
            <div class="p-4">
                <div class="flex items-center justify-between gap-2">
                    <h3 class="text-sm font-semibold text-fg truncate">{title}</h3>
                    <span class="text-xs font-medium text-action-primary-bg bg-action-ghost-bg-hover px-2 py-1 rounded whitespace-nowrap">
                        {format!("${:.0}", property.price)}
                    </span>
                </div>
                <p class="mt-2 text-xs text-fg-muted">
                    <i class="fas fa-location-dot mr-1"></i>
                    {property.location}
                </p>
            </div>
        </a>
    }
}

#[component]
pub fn AgentCard(agent: Agent) -> impl IntoView {
    let detail = format!("/agents/show/{}", agent.id);
    let avatar = agent.avatar.unwrap_or_default();
    let name = agent.name.clone();
    view! {
        <a
            href=detail
            class="flex items-center gap-4 bg-surface-elevated rounded-lg shadow-sm border border-border p-4 hover:shadow-md"
        >
            <img class="h-16 w-16 rounded-full object-cover" src=avatar alt=name.clone()/>
            <div class="min-w-0">
                <h3 class="text-sm font-semibold text-fg truncate">{name}</h3>
                <p class="text-xs text-fg-muted truncate">{agent.email}</p>
                <p class="mt-1 text-xs text-fg-muted">
                    {format!("{} properties", agent.all_properties.len())}
                </p>
            </div>
        </a>
    }
}

#[component]
pub fn StatCard(title: &'static str, value: String, icon: &'static str) -> impl IntoView {
    view! {
        <div class="bg-surface-elevated rounded-lg shadow-sm border border-border p-4 flex items-center gap-4">
            <div class="h-10 w-10 rounded-full bg-action-ghost-bg-hover flex items-center justify-center text-action-primary-bg">
                <i class=format!("fas {}", icon)></i>
            </div>
            <div>
                <p class="text-xs text-fg-muted">{title}</p>
                <p class="text-lg font-semibold text-fg">{value}</p>
            </div>
        </div>
    }
}
