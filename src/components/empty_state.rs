use leptos::*;

/// Centered message with a single way out, used for "not found" and
/// placeholder pages.
#[component]
pub fn EmptyState(
    #[prop(into)] title: String,
    #[prop(into)] description: String,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="empty-state">
            <h2 class="empty-state-title">{title}</h2>
            <p class="empty-state-description">{description}</p>
            <div class="empty-state-actions">{children()}</div>
        </div>
    }
}
