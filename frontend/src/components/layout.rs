use crate::{
    components::theme::ThemeToggle,
    resources,
    state::auth::{self, use_auth},
};
use leptos::*;

#[component]
pub fn Header() -> impl IntoView {
    let (auth, _set_auth) = use_auth();
    let logout_action = auth::use_logout_action();
    let logout_pending = logout_action.pending();
    create_effect(move |_| {
        if let Some(outcome) = logout_action.value().get() {
            if let Some(win) = web_sys::window() {
                let _ = win.location().set_href(outcome.redirect_to);
            }
        }
    });
    let on_logout = move |_| {
        if logout_pending.get_untracked() {
            return;
        }
        logout_action.dispatch(());
    };
    let display_name = move || {
        auth.get()
            .identity
            .as_ref()
            .and_then(|identity| identity.name.clone())
            .unwrap_or_default()
    };
    let avatar = move || {
        auth.get()
            .identity
            .as_ref()
            .and_then(|identity| identity.avatar.clone())
    };
    view! {
        <header class="bg-surface-elevated shadow-sm border-b border-border">
            <div class="px-4 sm:px-6 lg:px-8">
                <div class="flex justify-end items-center h-16 space-x-4">
                    <ThemeToggle/>
                    <span class="text-sm font-medium text-fg">{display_name}</span>
                    {move || {
                        avatar()
                            .map(|src| {
                                view! { <img class="h-8 w-8 rounded-full object-cover" src=src alt="avatar"/> }
                            })
                    }}
                    <button
                        on:click=on_logout
                        class="text-fg-muted hover:text-fg px-3 py-2 rounded-md text-sm font-medium disabled:opacity-50 hover:bg-action-ghost-bg-hover"
                        disabled=move || logout_pending.get()
                    >
                        "Logout"
                    </button>
                </div>
            </div>
        </header>
    }
}

/// Navigation rail generated from the resource registry.
#[component]
pub fn Sider() -> impl IntoView {
    view! {
        <aside class="w-64 min-h-screen bg-surface-elevated border-r border-border flex flex-col">
            <div class="h-16 flex items-center px-6 border-b border-border">
                <a href="/" class="text-xl font-semibold text-fg">"Yariga"</a>
            </div>
            <nav class="flex-1 px-3 py-4 space-y-1">
                {resources::RESOURCES
                    .iter()
                    .map(|resource| {
                        view! {
                            <a
                                href=resource.list
                                class="flex items-center text-fg-muted hover:text-fg px-3 py-2 rounded-md text-sm font-medium hover:bg-action-ghost-bg-hover"
                            >
                                <i class=format!("fas {} w-5 mr-3", resource.icon)></i>
                                {resource.label}
                            </a>
                        }
                    })
                    .collect_view()}
            </nav>
        </aside>
    }
}

#[component]
pub fn Layout(children: Children) -> impl IntoView {
    view! {
        <div class="min-h-screen flex bg-surface">
            <Sider/>
            <div class="flex-1 flex flex-col min-w-0">
                <Header/>
                <main class="flex-1 max-w-7xl w-full mx-auto py-6 px-4 sm:px-6 lg:px-8">
                    {children()}
                </main>
            </div>
        </div>
    }
}

#[component]
pub fn LoadingSpinner() -> impl IntoView {
    view! {
        <div class="flex justify-center items-center p-8">
            <div class="animate-spin rounded-full h-8 w-8 border-b-2 border-action-primary-bg"></div>
        </div>
    }
}

#[component]
pub fn ErrorMessage(message: String) -> impl IntoView {
    view! {
        <div class="bg-status-error-bg border border-status-error-border text-status-error-text px-4 py-3 rounded mb-4">
            <div class="flex">
                <div class="flex-shrink-0">
                    <i class="fas fa-exclamation-circle"></i>
                </div>
                <div class="ml-3">
                    <p class="text-sm">{message}</p>
                </div>
            </div>
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::helpers::provide_auth;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn sider_links_every_registered_resource() {
        let html = render_to_string(move || view! { <Sider /> });
        for resource in resources::RESOURCES {
            assert!(html.contains(resource.label), "missing {}", resource.label);
            assert!(
                html.contains(&format!("href=\"{}\"", resource.list)),
                "missing link {}",
                resource.list
            );
        }
    }

    #[test]
    fn header_shows_identity_name() {
        let html = render_to_string(move || {
            provide_auth(true, false);
            view! { <Header /> }
        });
        assert!(html.contains("Alice Example"));
        assert!(html.contains("Logout"));
    }

    #[test]
    fn layout_renders_children() {
        let html = render_to_string(move || {
            provide_auth(true, false);
            view! { <Layout><div>"child"</div></Layout> }
        });
        assert!(html.contains("child"));
        assert!(html.contains("Yariga"));
    }

    #[test]
    fn renders_feedback_components() {
        let html = render_to_string(move || {
            view! {
                <div>
                    <LoadingSpinner />
                    <ErrorMessage message="something broke".into() />
                </div>
            }
        });
        assert!(html.contains("animate-spin"));
        assert!(html.contains("something broke"));
    }
}
