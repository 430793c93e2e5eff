use leptos::*;

use crate::components::{Icon, Sidebar};
use crate::layout::use_is_mobile;

/// Page shell. Desktop gets a fixed sidebar; mobile gets a menu button that
/// opens the same sidebar as a slide-over sheet.
#[component]
pub fn AppLayout(children: Children) -> impl IntoView {
    let is_mobile = use_is_mobile();
    let (sheet_open, set_sheet_open) = create_signal(false);

    // Leaving mobile mode must not leave a stale sheet behind.
    create_effect(move |_| {
        if !is_mobile.get() {
            set_sheet_open.set(false);
        }
    });

    view! {
        <div class="app-shell">
            <Show
                when=move || is_mobile.get()
                fallback=|| view! { <Sidebar /> }
            >
                <button
                    class="menu-button"
                    aria-label="Open navigation"
                    on:click=move |_| set_sheet_open.set(true)
                >
                    <Icon name="menu" />
                </button>
                <Show when=move || sheet_open.get()>
                    <div class="sheet-backdrop" on:click=move |_| set_sheet_open.set(false)></div>
                    <div class="sheet sheet-left">
                        <Sidebar on_navigate=move |_| set_sheet_open.set(false) />
                    </div>
                </Show>
            </Show>

            <main class="app-main" class:app-main-mobile=move || is_mobile.get()>
                {children()}
            </main>
        </div>
    }
}
