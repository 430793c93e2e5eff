//! Toast notifications.

use leptos::*;

use crate::notify::Notification;

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: usize,
    pub notification: Notification,
}

#[derive(Clone, Copy)]
pub struct ToastContext {
    toasts: RwSignal<Vec<Toast>>,
    next_id: StoredValue<usize>,
}

impl ToastContext {
    pub fn new() -> Self {
        Self {
            toasts: create_rw_signal(Vec::new()),
            next_id: store_value(0),
        }
    }

    /// Show a notification and schedule its removal.
    pub fn push(&self, notification: Notification) {
        let id = self.next_id.get_value();
        self.next_id.update_value(|n| *n += 1);

        let delay = notification.kind.dismiss_after_ms();
        self.toasts.update(|toasts| toasts.push(Toast { id, notification }));

        let toasts = self.toasts;
        gloo_timers::callback::Timeout::new(delay, move || {
            toasts.update(|toasts| toasts.retain(|t| t.id != id));
        })
        .forget();
    }

    pub fn dismiss(&self, id: usize) {
        self.toasts.update(|toasts| toasts.retain(|t| t.id != id));
    }

    pub fn toasts(&self) -> Vec<Toast> {
        self.toasts.get()
    }
}

impl Default for ToastContext {
    fn default() -> Self {
        Self::new()
    }
}

pub fn provide_toasts() -> ToastContext {
    let ctx = ToastContext::new();
    provide_context(ctx);
    ctx
}

pub fn use_toast() -> ToastContext {
    expect_context::<ToastContext>()
}

#[component]
pub fn ToastContainer() -> impl IntoView {
    let toasts = use_toast();

    view! {
        <div class="toast-container">
            <For
                each=move || toasts.toasts()
                key=|toast| toast.id
                children=move |toast| view! { <ToastItem toast=toast /> }
            />
        </div>
    }
}

#[component]
fn ToastItem(toast: Toast) -> impl IntoView {
    let toasts = use_toast();
    let id = toast.id;
    let kind = toast.notification.kind;

    view! {
        <div class=format!("toast {}", kind.class()) role="status">
            <span class="toast-icon">{kind.icon()}</span>
            <div class="toast-content">
                <div class="toast-title">{toast.notification.title}</div>
                <div class="toast-description">{toast.notification.description}</div>
            </div>
            <button class="toast-close" aria-label="Dismiss" on:click=move |_| toasts.dismiss(id)>
                "×"
            </button>
        </div>
    }
}
