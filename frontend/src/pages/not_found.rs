use leptos::*;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="flex min-h-[60vh] flex-col items-center justify-center text-center">
            <p class="text-6xl font-bold text-fg">"404"</p>
            <p class="mt-2 text-sm text-fg-muted">"The page you are looking for does not exist."</p>
            <a
                href="/"
                class="mt-6 rounded-md action-primary-bg px-4 py-2 text-sm font-medium text-white"
            >
                "Back to dashboard"
            </a>
        </div>
    }
}
