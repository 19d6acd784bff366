use leptos::*;

use super::utils::{format_price, latest_properties, property_stats, PropertyStats};
use super::view_model::use_dashboard_view_model;
use crate::components::cards::{PropertyCard, StatCard};
use crate::components::layout::{ErrorMessage, LoadingSpinner};

#[component]
pub fn DashboardPanel() -> impl IntoView {
    let vm = use_dashboard_view_model();

    view! {
        <div>
            <h1 class="text-2xl font-semibold text-fg">"Dashboard"</h1>
            {move || match vm.properties.get() {
                None => view! { <LoadingSpinner /> }.into_view(),
                Some(Err(error)) => view! { <ErrorMessage message=error.to_string()/> }.into_view(),
                Some(Ok(properties)) => {
                    let stats = property_stats(&properties);
                    let latest = latest_properties(&properties, 4);
                    let total = stats.total.to_string();
                    let average = format_price(stats.average_price);
                    let locations = stats.locations.to_string();
                    view! {
                        <div class="mt-6 grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-3 gap-4">
                            <StatCard title="Properties" value=total icon="fa-building"/>
                            <StatCard title="Average Price" value=average icon="fa-sack-dollar"/>
                            <StatCard title="Locations" value=locations icon="fa-location-dot"/>
                        </div>
                        <TypeBreakdown stats=stats/>
                        <h2 class="mt-8 text-lg font-semibold text-fg">"Latest Properties"</h2>
                        <div class="mt-4 grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-4 gap-4">
                            {latest
                                .into_iter()
                                .map(|property| view! { <PropertyCard property=property/> })
                                .collect_view()}
                        </div>
                    }
                    .into_view()
                }
            }}
        </div>
    }
}

#[component]
fn TypeBreakdown(stats: PropertyStats) -> impl IntoView {
    view! {
        <div class="mt-6 bg-surface-elevated rounded-lg shadow-sm border border-border p-4">
            <h2 class="text-sm font-semibold text-fg">"Properties by Type"</h2>
            <ul class="mt-3 space-y-2">
                {stats
                    .by_type
                    .into_iter()
                    .map(|(kind, count)| {
                        view! {
                            <li class="flex justify-between text-sm text-fg-muted">
                                <span class="capitalize">{kind}</span>
                                <span>{count}</span>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </div>
    }
}
