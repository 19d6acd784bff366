use super::view_model::use_login_view_model;
use crate::components::layout::ErrorMessage;
use crate::config;
use crate::utils::google;
use leptos::*;

const SIGN_IN_BUTTON_ID: &str = "google-signin-button";

#[component]
pub fn LoginPanel() -> impl IntoView {
    let vm = use_login_view_model();
    let pending = vm.login_action.pending();

    // The GIS widget can only render once the mount node exists.
    create_effect(move |_| {
        let Some(client_id) = config::google_client_id() else {
            vm.error.set(Some("Google client id is not configured".into()));
            return;
        };
        let action = vm.login_action;
        let mounted = google::init_sign_in(&client_id, SIGN_IN_BUTTON_ID, move |response| {
            action.dispatch(response);
        });
        if !mounted {
            vm.error.set(Some("Google sign-in is unavailable".into()));
        }
    });

    view! {
        <div class="min-h-screen bg-surface flex items-center justify-center px-4">
            <div class="max-w-md w-full bg-surface-elevated rounded-lg shadow-sm border border-border p-8 text-center">
                <h1 class="text-3xl font-extrabold text-fg">"Yariga"</h1>
                <p class="mt-2 text-sm text-fg-muted">"Real estate dashboard"</p>
                {move || {
                    vm.error
                        .get()
                        .map(|message| view! { <div class="mt-4 text-left"><ErrorMessage message=message/></div> })
                }}
                <div class="mt-6 flex justify-center" id=SIGN_IN_BUTTON_ID></div>
                <Show when=move || pending.get()>
                    <p class="mt-4 text-sm text-fg-muted">"Signing in..."</p>
                </Show>
            </div>
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn login_panel_renders_brand_and_button_mount_point() {
        let html = render_to_string(move || view! { <LoginPanel /> });
        assert!(html.contains("Yariga"));
        assert!(html.contains(SIGN_IN_BUTTON_ID));
        assert!(!html.contains("Signing in..."));
    }
}
