use leptos::*;
use leptos_router::{use_navigate, use_params_map};

use crate::components::{EmptyState, Icon};
use crate::config::use_config;
use crate::routes;
use crate::types::WorkoutRecord;

#[component]
pub fn WorkoutDetail() -> impl IntoView {
    let config = use_config();
    let params = use_params_map();

    move || {
        let id = params.with(|p| p.get("id").cloned()).unwrap_or_default();
        match config.workout(&id) {
            Some(record) => {
                let badge = config.badge_class(record.category).to_string();
                view! { <WorkoutView record=record.clone() badge=badge /> }.into_view()
            }
            None => {
                tracing::debug!(%id, "workout not found");
                view! { <WorkoutNotFound /> }.into_view()
            }
        }
    }
}

#[component]
fn WorkoutView(record: WorkoutRecord, badge: String) -> impl IntoView {
    let exercise_count = record.exercises.len();

    view! {
        <div class="page workout-detail">
            <div class="page-header">
                <a href=routes::WORKOUTS class="icon-button" aria-label="Back to workouts">
                    <Icon name="arrow-left" />
                </a>
                <div class="grow">
                    <div class="workout-card-top">
                        <span class=format!("badge {}", badge)>{record.category.as_str()}</span>
                        {record.scheduled.map(|s| view! { <span class="workout-when">{s}</span> })}
                        {record.last_completed.map(|s| view! { <span class="muted">"Last: "{s}</span> })}
                    </div>
                    <h1 class="page-title">{record.name}</h1>
                </div>
            </div>

            <div class="workout-meta">
                <span><Icon name="dumbbell" />{exercise_count}" exercises"</span>
                <span><Icon name="clock" />{record.duration}</span>
            </div>

            <div class="card">
                <h3 class="card-title"><Icon name="dumbbell" />"Exercises"</h3>
                <ol class="exercise-list">
                    {record.exercises.into_iter().enumerate().map(|(idx, ex)| view! {
                        <li class="exercise-item">
                            <div class="exercise-head">
                                <span class="exercise-index">{idx + 1}</span>
                                <span class="exercise-name">{ex.name}</span>
                            </div>
                            <div class="exercise-spec">
                                <span>{ex.sets}" sets"</span>
                                <span class="sep">"•"</span>
                                <span>{ex.reps}" reps"</span>
                                <span class="sep">"•"</span>
                                <span class="accent">{ex.load}</span>
                            </div>
                        </li>
                    }).collect_view()}
                </ol>
            </div>
        </div>
    }
}

#[component]
fn WorkoutNotFound() -> impl IntoView {
    let navigate = use_navigate();

    view! {
        <EmptyState
            title="Workout not found"
            description="The workout you're looking for doesn't exist."
        >
            <button class="btn btn-primary" on:click=move |_| navigate(routes::WORKOUTS, Default::default())>
                <Icon name="arrow-left" />
                "Back to Workouts"
            </button>
        </EmptyState>
    }
}
