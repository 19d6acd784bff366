use leptos::*;

use super::utils::{PropertyFormInput, PROPERTY_TYPES};
use crate::api::Property;
use crate::components::layout::ErrorMessage;

#[derive(Clone, Copy)]
pub struct PropertyFormSignals {
    pub title: RwSignal<String>,
    pub description: RwSignal<String>,
    pub property_type: RwSignal<String>,
    pub location: RwSignal<String>,
    pub price: RwSignal<String>,
    pub photo: RwSignal<String>,
}

impl PropertyFormSignals {
    pub fn new() -> Self {
        Self {
            title: create_rw_signal(String::new()),
            description: create_rw_signal(String::new()),
            property_type: create_rw_signal("apartment".to_string()),
            location: create_rw_signal(String::new()),
            price: create_rw_signal(String::new()),
            photo: create_rw_signal(String::new()),
        }
    }

    pub fn snapshot(&self) -> PropertyFormInput {
        PropertyFormInput {
            title: self.title.get_untracked(),
            description: self.description.get_untracked(),
            property_type: self.property_type.get_untracked(),
            location: self.location.get_untracked(),
            price: self.price.get_untracked(),
            photo: self.photo.get_untracked(),
        }
    }

    pub fn populate(&self, property: &Property) {
        self.title.set(property.title.clone());
        self.description.set(property.description.clone());
        self.property_type.set(property.property_type.clone());
        self.location.set(property.location.clone());
        self.price.set(property.price.to_string());
        self.photo.set(property.photo.clone());
    }
}

#[component]
pub fn PropertyForm(
    heading: &'static str,
    submit_label: &'static str,
    form: PropertyFormSignals,
    error: RwSignal<Option<String>>,
    #[prop(into)] pending: Signal<bool>,
    on_submit: Callback<ev::SubmitEvent>,
) -> impl IntoView {
    view! {
        <div class="max-w-2xl">
            <h1 class="text-2xl font-semibold text-fg">{heading}</h1>
            <form
                class="mt-6 space-y-4 bg-surface-elevated rounded-lg shadow-sm border border-border p-6"
                on:submit=move |ev| on_submit.call(ev)
            >
                {move || error.get().map(|message| view! { <ErrorMessage message=message/> })}
                <div>
                    <label class="block text-sm font-medium text-fg-muted">"Title"</label>
                    <input
                        type="text"
                        class="mt-1 w-full rounded-md border border-border bg-surface px-3 py-2 text-sm text-fg"
                        prop:value=move || form.title.get()
                        on:input=move |ev| form.title.set(event_target_value(&ev))
                    />
                </div>
                <div>
                    <label class="block text-sm font-medium text-fg-muted">"Description"</label>
                    <textarea
                        class="mt-1 w-full rounded-md border border-border bg-surface px-3 py-2 text-sm text-fg"
                        rows="4"
                        prop:value=move || form.description.get()
                        on:input=move |ev| form.description.set(event_target_value(&ev))
                    ></textarea>
                </div>
                <div class="grid grid-cols-1 sm:grid-cols-2 gap-4">
                    <div>
                        <label class="block text-sm font-medium text-fg-muted">"Property Type"</label>
                        <select
                            class="mt-1 w-full rounded-md border border-border bg-surface px-3 py-2 text-sm text-fg capitalize"
                            prop:value=move || form.property_type.get()
                            on:change=move |ev| form.property_type.set(event_target_value(&ev))
                        >
                            {PROPERTY_TYPES
                                .iter()
                                .map(|kind| view! { <option value=*kind class="capitalize">{*kind}</option> })
                                .collect_view()}
                        </select>
                    </div>
                    <div>
                        <label class="block text-sm font-medium text-fg-muted">"Price"</label>
                        <input
                            type="number"
                            class="mt-1 w-full rounded-md border border-border bg-surface px-3 py-2 text-sm text-fg"
                            prop:value=move || form.price.get()
                            on:input=move |ev| form.price.set(event_target_value(&ev))
                        />
                    </div>
                </div>
                <div>
                    <label class="block text-sm font-medium text-fg-muted">"Location"</label>
                    <input
                        type="text"
                        class="mt-1 w-full rounded-md border border-border bg-surface px-3 py-2 text-sm text-fg"
                        prop:value=move || form.location.get()
                        on:input=move |ev| form.location.set(event_target_value(&ev))
                    />
                </div>
                <div>
                    <label class="block text-sm font-medium text-fg-muted">"Photo URL"</label>
                    <input
                        type="text"
                        class="mt-1 w-full rounded-md border border-border bg-surface px-3 py-2 text-sm text-fg"
                        prop:value=move || form.photo.get()
                        on:input=move |ev| form.photo.set(event_target_value(&ev))
                    />
                </div>
                <div class="flex justify-end gap-3">
                    <a
                        href="/properties"
                        class="rounded-md border border-border px-4 py-2 text-sm text-fg-muted hover:bg-surface"
                    >
                        "Cancel"
                    </a>
                    <button
                        type="submit"
                        class="rounded-md action-primary-bg px-4 py-2 text-sm font-medium text-white disabled:opacity-50"
                        disabled=move || pending.get()
                    >
                        {move || if pending.get() { "Saving..." } else { submit_label }}
                    </button>
                </div>
            </form>
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn form_renders_every_property_type_option() {
        let html = render_to_string(move || {
            let form = PropertyFormSignals::new();
            let error = create_rw_signal(None::<String>);
            view! {
                <PropertyForm
                    heading="Add Property"
                    submit_label="Create"
                    form=form
                    error=error
                    pending=Signal::derive(|| false)
                    on_submit=Callback::new(|_| {})
                />
            }
        });
        assert!(html.contains("Add Property"));
        for kind in PROPERTY_TYPES {
            assert!(html.contains(kind), "missing option {kind}");
        }
    }

    #[test]
    fn populate_fills_signals_from_property() {
        crate::test_support::ssr::with_runtime(|| {
            let form = PropertyFormSignals::new();
            form.populate(&Property {
                id: "p-1".into(),
                title: "Sunset Villa".into(),
                description: "Sea view".into(),
                property_type: "villa".into(),
                location: "Lagos".into(),
                price: 2500.0,
                photo: "https://example.com/p.png".into(),
                creator: None,
            });
            let input = form.snapshot();
            assert_eq!(input.title, "Sunset Villa");
            assert_eq!(input.property_type, "villa");
            assert_eq!(input.price, "2500");
        });
    }

    #[test]
    fn pending_form_disables_submit() {
        let html = render_to_string(move || {
            let form = PropertyFormSignals::new();
            let error = create_rw_signal(None::<String>);
            view! {
                <PropertyForm
                    heading="Add Property"
                    submit_label="Create"
                    form=form
                    error=error
                    pending=Signal::derive(|| true)
                    on_submit=Callback::new(|_| {})
                />
            }
        });
        assert!(html.contains("Saving..."));
    }
}
