use leptos::*;
use leptos_router::use_navigate;

use crate::builder::WorkoutBuilder;
use crate::components::{use_toast, Icon};
use crate::notify::Notification;
use crate::routes;
use crate::types::{EntryField, EntryId, WorkoutCategory};

#[component]
pub fn NewWorkout() -> impl IntoView {
    let builder = create_rw_signal(WorkoutBuilder::new());
    let toasts = use_toast();
    let navigate = use_navigate();

    let back = {
        let navigate = navigate.clone();
        move |_: ev::MouseEvent| navigate(routes::WORKOUTS, Default::default())
    };
    let cancel = back.clone();

    let save = move |_: ev::MouseEvent| match builder.with(WorkoutBuilder::save) {
        Ok(saved) => {
            tracing::info!(
                name = %saved.name,
                category = saved.category.as_str(),
                exercises = saved.exercise_count(),
                "workout saved"
            );
            toasts.push(Notification::workout_saved(&saved));
            navigate(routes::WORKOUTS, Default::default());
        }
        Err(err) => {
            tracing::warn!(reason = %err, "workout rejected");
            toasts.push(err.into());
        }
    };

    let row_ids = move || builder.with(|b| b.rows().iter().map(|r| r.id).collect::<Vec<_>>());

    view! {
        <div class="page new-workout">
            <div class="page-header">
                <button class="icon-button" aria-label="Back to workouts" on:click=back>
                    <Icon name="arrow-left" />
                </button>
                <div>
                    <h1 class="page-title">"NEW "<span class="accent">"WORKOUT"</span></h1>
                    <p class="page-subtitle">"Create your custom workout routine"</p>
                </div>
            </div>

            <div class="card">
                <h3 class="card-title">"Workout Details"</h3>
                <div class="form-grid">
                    <label class="field">
                        <span class="field-label">"Workout Name"</span>
                        <input
                            type="text"
                            class="input"
                            placeholder="e.g., Push Day - Chest & Shoulders"
                            prop:value=move || builder.with(|b| b.name().to_string())
                            on:input=move |ev| builder.update(|b| b.set_name(event_target_value(&ev)))
                        />
                    </label>
                    <label class="field">
                        <span class="field-label">"Workout Type"</span>
                        <select
                            class="input"
                            prop:value=move || builder.with(|b| b.category().map(|c| c.as_str()).unwrap_or(""))
                            on:change=move |ev| {
                                let category = WorkoutCategory::parse(&event_target_value(&ev));
                                builder.update(|b| b.set_category(category));
                            }
                        >
                            <option value="">"Select type"</option>
                            {WorkoutCategory::ALL.into_iter().map(|c| view! {
                                <option value=c.as_str()>{c.label()}</option>
                            }).collect_view()}
                        </select>
                    </label>
                </div>
            </div>

            <div class="card">
                <div class="card-header-row">
                    <h3 class="card-title">"Exercises"</h3>
                    <button class="btn btn-outline btn-sm" on:click=move |_| { builder.update(|b| { b.add_row(); }); }>
                        <Icon name="plus" />
                        "Add Exercise"
                    </button>
                </div>
                <div class="entry-list">
                    <For
                        each=row_ids
                        key=|id| *id
                        children=move |id| view! { <EntryRow id=id builder=builder /> }
                    />
                </div>
            </div>

            <div class="form-actions">
                <button class="btn btn-outline" on:click=cancel>"Cancel"</button>
                <button class="btn btn-primary" on:click=save>
                    <Icon name="save" />
                    "Save Workout"
                </button>
            </div>
        </div>
    }
}

#[component]
fn EntryRow(id: EntryId, builder: RwSignal<WorkoutBuilder>) -> impl IntoView {
    let value_of = move |field: EntryField| {
        move || builder.with(|b| b.row(id).map(|r| r.field(field).to_string()).unwrap_or_default())
    };
    let set = move |field: EntryField| {
        move |ev: ev::Event| {
            let value = event_target_value(&ev);
            builder.update(|b| {
                b.update_row(id, field, value);
            });
        }
    };
    let position = move || builder.with(|b| b.position(id).map(|p| p + 1).unwrap_or_default());

    view! {
        <div class="entry">
            <div class="entry-head">
                <span class="muted">"Exercise "{position}</span>
                <button
                    class="icon-button danger"
                    aria-label="Remove exercise"
                    disabled=move || builder.with(|b| !b.can_remove())
                    on:click=move |_| { builder.update(|b| { b.remove_row(id); }); }
                >
                    <Icon name="trash" />
                </button>
            </div>
            <div class="entry-grid">
                <label class="field span-2">
                    <span class="field-label">"Exercise Name"</span>
                    <input
                        type="text"
                        class="input"
                        placeholder="e.g., Bench Press"
                        prop:value=value_of(EntryField::Name)
                        on:input=set(EntryField::Name)
                    />
                </label>
                <label class="field">
                    <span class="field-label">"Sets"</span>
                    <input type="number" class="input" placeholder="3"
                        prop:value=value_of(EntryField::Sets)
                        on:input=set(EntryField::Sets)
                    />
                </label>
                <label class="field">
                    <span class="field-label">"Reps"</span>
                    <input type="number" class="input" placeholder="10"
                        prop:value=value_of(EntryField::Reps)
                        on:input=set(EntryField::Reps)
                    />
                </label>
                <label class="field">
                    <span class="field-label">"Weight"</span>
                    <input type="text" class="input" placeholder="kg"
                        prop:value=value_of(EntryField::Weight)
                        on:input=set(EntryField::Weight)
                    />
                </label>
            </div>
        </div>
    }
}
