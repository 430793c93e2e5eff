use leptos::*;
use leptos_router::use_location;

use crate::components::EmptyState;
use crate::routes;

#[component]
pub fn NotFound() -> impl IntoView {
    let pathname = use_location().pathname;
    tracing::warn!(path = %pathname.get_untracked(), "no route matched");

    view! {
        <EmptyState title="Page Not Found" description="The page you're looking for doesn't exist.">
            <a href=routes::DASHBOARD class="btn btn-primary">"Return to Dashboard"</a>
        </EmptyState>
    }
}
