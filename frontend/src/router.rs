use leptos::*;
use leptos_router::*;

use crate::api::ApiClient;
use crate::components::guard::{RedirectAuthenticated, RequireAuth};
use crate::components::layout::Layout;
use crate::components::theme::ThemeProvider;
use crate::pages::agents::{AgentListPage, AgentShowPage};
use crate::pages::dashboard::DashboardPage;
use crate::pages::login::LoginPage;
use crate::pages::my_profile::MyProfilePage;
use crate::pages::not_found::NotFoundPage;
use crate::pages::properties::{
    PropertyCreatePage, PropertyEditPage, PropertyListPage, PropertyShowPage,
};
use crate::state::auth::AuthProvider;

pub const ROUTE_PATHS: [&str; 12] = [
    "/",
    "/login",
    "/properties",
    "/properties/create",
    "/properties/edit/:id",
    "/properties/show/:id",
    "/agents",
    "/agents/show/:id",
    "/reviews",
    "/messages",
    "/my-profile",
    "/*any",
];

pub const PUBLIC_PATHS: [&str; 1] = ["/login"];

pub const PROTECTED_PATHS: [&str; 11] = [
    "/",
    "/properties",
    "/properties/create",
    "/properties/edit/:id",
    "/properties/show/:id",
    "/agents",
    "/agents/show/:id",
    "/reviews",
    "/messages",
    "/my-profile",
    "/*any",
];

fn route_id() -> Signal<String> {
    let params = use_params_map();
    Signal::derive(move || params.with(|p| p.get("id").cloned().unwrap_or_default()))
}

#[component]
fn Protected(children: ChildrenFn) -> impl IntoView {
    // RequireAuth re-renders its children, so they are stashed rather than
    // moved into the inner view.
    let children = store_value(children);
    view! {
        <RequireAuth>
            <Layout>{move || children.with_value(|children| children())}</Layout>
        </RequireAuth>
    }
}

#[component]
fn PublicLogin() -> impl IntoView {
    view! {
        <RedirectAuthenticated>
            <LoginPage />
        </RedirectAuthenticated>
    }
}

#[component]
fn ProtectedPropertyEdit() -> impl IntoView {
    let id = route_id();
    view! {
        <Protected>
            <PropertyEditPage id=id/>
        </Protected>
    }
}

#[component]
fn ProtectedPropertyShow() -> impl IntoView {
    let id = route_id();
    view! {
        <Protected>
            <PropertyShowPage id=id/>
        </Protected>
    }
}

#[component]
fn ProtectedAgentShow() -> impl IntoView {
    let id = route_id();
    view! {
        <Protected>
            <AgentShowPage id=id/>
        </Protected>
    }
}

#[component]
pub fn AppRoot() -> impl IntoView {
    provide_context(ApiClient::new());

    view! {
        <ThemeProvider>
            <AuthProvider>
                <Router>
                    <Routes>
                        <Route path="/login" view=PublicLogin/>
                        <Route
                            path="/"
                            view=|| view! { <Protected><DashboardPage /></Protected> }
                        />
                        <Route
                            path="/properties"
                            view=|| view! { <Protected><PropertyListPage /></Protected> }
                        />
                        <Route
                            path="/properties/create"
                            view=|| view! { <Protected><PropertyCreatePage /></Protected> }
                        />
                        <Route path="/properties/edit/:id" view=ProtectedPropertyEdit/>
                        <Route path="/properties/show/:id" view=ProtectedPropertyShow/>
                        <Route
                            path="/agents"
                            view=|| view! { <Protected><AgentListPage /></Protected> }
                        />
                        <Route path="/agents/show/:id" view=ProtectedAgentShow/>
                        <Route
                            path="/reviews"
                            view=|| view! { <Protected><DashboardPage /></Protected> }
                        />
                        <Route
                            path="/messages"
                            view=|| view! { <Protected><DashboardPage /></Protected> }
                        />
                        <Route
                            path="/my-profile"
                            view=|| view! { <Protected><MyProfilePage /></Protected> }
                        />
                        <Route
                            path="/*any"
                            view=|| view! { <Protected><NotFoundPage /></Protected> }
                        />
                    </Routes>
                </Router>
            </AuthProvider>
        </ThemeProvider>
    }
}

#[cfg(target_arch = "wasm32")]
pub fn mount_app() {
    leptos::mount_to_body(|| view! { <AppRoot /> });
}
