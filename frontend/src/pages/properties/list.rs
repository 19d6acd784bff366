use leptos::*;

use super::repository::use_properties_repository;
use super::utils::{filter_properties, sort_by_price, PriceOrder, PROPERTY_TYPES};
use crate::components::cards::PropertyCard;
use crate::components::layout::{ErrorMessage, LoadingSpinner};

#[component]
pub fn PropertyListPage() -> impl IntoView {
    let repo = use_properties_repository();
    let properties = create_resource(
        || (),
        move |_| {
            let repo = repo.clone();
            async move { repo.list().await }
        },
    );

    let query = create_rw_signal(String::new());
    let type_filter = create_rw_signal(String::new());
    let order = create_rw_signal(PriceOrder::Unsorted);

    view! {
        <div>
            <div class="flex items-center justify-between">
                <h1 class="text-2xl font-semibold text-fg">"All Properties"</h1>
                <a
                    href="/properties/create"
                    class="rounded-md action-primary-bg px-4 py-2 text-sm font-medium text-white"
                >
                    <i class="fas fa-plus mr-2"></i>
                    "Add Property"
                </a>
            </div>
            <div class="mt-4 flex flex-wrap items-center gap-3">
                <input
                    type="text"
                    placeholder="Search by title"
                    class="rounded-md border border-border bg-surface px-3 py-2 text-sm text-fg"
                    prop:value=move || query.get()
                    on:input=move |ev| query.set(event_target_value(&ev))
                />
                <select
                    class="rounded-md border border-border bg-surface px-3 py-2 text-sm text-fg capitalize"
                    prop:value=move || type_filter.get()
                    on:change=move |ev| type_filter.set(event_target_value(&ev))
                >
                    <option value="">"All types"</option>
                    {PROPERTY_TYPES
                        .iter()
                        .map(|kind| view! { <option value=*kind class="capitalize">{*kind}</option> })
                        .collect_view()}
                </select>
                <button
                    class="rounded-md border border-border px-3 py-2 text-sm text-fg-muted hover:bg-surface"
                    on:click=move |_| order.update(|o| *o = o.toggled())
                >
                    {move || match order.get() {
                        PriceOrder::Descending => "Price: high to low",
                        _ => "Price: low to high",
                    }}
                </button>
            </div>
            {move || match properties.get() {
                None => view! { <LoadingSpinner /> }.into_view(),
                Some(Err(error)) => view! { <ErrorMessage message=error.to_string()/> }.into_view(),
                Some(Ok(all)) => {
                    let mut visible =
                        query.with(|q| type_filter.with(|t| filter_properties(&all, q, t)));
                    sort_by_price(&mut visible, order.get());
                    if visible.is_empty() {
                        view! {
                            <p class="mt-8 text-sm text-fg-muted">"No properties found"</p>
                        }
                        .into_view()
                    } else {
                        view! {
                            <div class="mt-6 grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-3 gap-4">
                                {visible
                                    .into_iter()
                                    .map(|property| view! { <PropertyCard property=property/> })
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
    fn list_page_renders_heading_and_create_link() {
        let html = render_to_string(move || view! { <PropertyListPage /> });
        assert!(html.contains("All Properties"));
        assert!(html.contains("href=\"/properties/create\""));
        assert!(html.contains("Add Property"));
    }

    #[test]
    fn list_page_offers_type_filter() {
        let html = render_to_string(move || view! { <PropertyListPage /> });
        assert!(html.contains("All types"));
        assert!(html.contains("Search by title"));
    }
}
