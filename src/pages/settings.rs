use leptos::*;

use crate::components::{use_toast, Icon};
use crate::config::use_config;
use crate::notify::Notification;

const NOTIFICATION_TOGGLES: [(&str, &str, bool); 3] = [
    ("Workout reminders", "Get a nudge before scheduled sessions", true),
    ("Progress updates", "Weekly summary of your training volume", true),
    ("Coach tips", "Suggestions from the AI coach", false),
];

#[component]
pub fn Settings() -> impl IntoView {
    let config = use_config();

    let display_name = create_rw_signal(config.athlete_name.clone());
    let weight_unit = create_rw_signal("kg".to_string());
    let weekly_goal = create_rw_signal("5".to_string());

    view! {
        <div class="page settings">
            <div class="page-header">
                <div>
                    <h1 class="page-title">"SETTINGS"</h1>
                    <p class="page-subtitle">"Manage your profile and preferences"</p>
                </div>
            </div>

            <section class="card settings-section">
                <h3 class="card-title"><Icon name="settings" />"Profile"</h3>
                <EditableField
                    label="Display name"
                    hint="Shown in the dashboard greeting"
                    value=display_name
                />
                <EditableField
                    label="Weight unit"
                    hint="Used for lifts and personal records"
                    value=weight_unit
                />
                <EditableField
                    label="Weekly goal"
                    hint="Workouts per week"
                    value=weekly_goal
                    input_type="number"
                />
            </section>

            <section class="card settings-section">
                <h3 class="card-title"><Icon name="zap" />"Notifications"</h3>
                {NOTIFICATION_TOGGLES.into_iter().map(|(label, hint, initial)| {
                    let enabled = create_rw_signal(initial);
                    view! {
                        <label class="toggle-row">
                            <div>
                                <p>{label}</p>
                                <p class="settings-hint">{hint}</p>
                            </div>
                            <input
                                type="checkbox"
                                class="toggle"
                                prop:checked=enabled
                                on:change=move |ev| enabled.set(event_target_checked(&ev))
                            />
                        </label>
                    }
                }).collect_view()}
            </section>
        </div>
    }
}

/// Read-only value with an "Edit" button that swaps in an input and ✓/✕.
#[component]
fn EditableField(
    label: &'static str,
    hint: &'static str,
    value: RwSignal<String>,
    #[prop(default = "text")] input_type: &'static str,
) -> impl IntoView {
    let toasts = use_toast();
    let (editing, set_editing) = create_signal(false);
    let (input, set_input) = create_signal(String::new());

    let confirm = move |_: ev::MouseEvent| {
        let next = input.get().trim().to_string();
        if !next.is_empty() {
            value.set(next.clone());
            tracing::debug!(field = label, value = %next, "setting changed");
            toasts.push(Notification::info("Settings updated", format!("{} set to {}", label, next)));
        }
        set_editing.set(false);
    };

    view! {
        <div class="setting-row">
            <div>
                <p>{label}</p>
                <p class="settings-hint">{hint}</p>
            </div>
            {move || if editing.get() {
                view! {
                    <div class="setting-edit">
                        <input
                            type=input_type
                            class="input"
                            prop:value=input
                            on:input=move |ev| set_input.set(event_target_value(&ev))
                        />
                        <button class="btn btn-primary btn-sm" aria-label="Save" on:click=confirm>"✓"</button>
                        <button class="btn btn-outline btn-sm" aria-label="Cancel" on:click=move |_| set_editing.set(false)>"✕"</button>
                    </div>
                }.into_view()
            } else {
                view! {
                    <div class="setting-display">
                        <span class="setting-value">{value.get()}</span>
                        <button class="btn btn-outline btn-sm" on:click=move |_| {
                            set_input.set(value.get_untracked());
                            set_editing.set(true);
                        }>"Edit"</button>
                    </div>
                }.into_view()
            }}
        </div>
    }
}
