//! Navigation panel: logo, primary routes, settings pinned at the bottom.

use leptos::*;
use leptos_router::use_location;

use crate::components::Icon;
use crate::routes::{NavItem, PRIMARY_NAV, SETTINGS_NAV};

#[component]
pub fn Sidebar(
    /// Called after any link is clicked (closes the mobile sheet).
    #[prop(optional, into)]
    on_navigate: Option<Callback<()>>,
) -> impl IntoView {
    let pathname = use_location().pathname;

    let link = move |item: NavItem| {
        let is_active = move || item.is_active(&pathname.get());
        view! {
            <a
                href=item.path
                class="nav-link"
                class:nav-link-active=is_active
                aria-current=move || is_active().then_some("page")
                on:click=move |_| {
                    if let Some(cb) = on_navigate {
                        cb.call(());
                    }
                }
            >
                <Icon name=item.icon class="nav-icon" />
                <span class="nav-label">{item.label}</span>
            </a>
        }
    };

    view! {
        <aside class="sidebar">
            <div class="sidebar-brand">
                <div class="brand-mark">
                    <Icon name="flame" class="brand-icon" />
                </div>
                <div>
                    <h1 class="brand-name">"TITAN X"</h1>
                    <p class="brand-tagline">"Gym AI"</p>
                </div>
            </div>

            <nav class="sidebar-nav">
                {PRIMARY_NAV.into_iter().map(link).collect_view()}
            </nav>

            <div class="sidebar-footer">
                {link(SETTINGS_NAV)}
            </div>
        </aside>
    }
}
