use leptos::*;
use leptos_router::use_navigate;

use crate::components::Icon;
use crate::config::use_config;
use crate::routes;
use crate::types::WorkoutRecord;

#[component]
pub fn Workouts() -> impl IntoView {
    let config = use_config();
    let navigate = use_navigate();

    let scheduled: Vec<(WorkoutRecord, String)> = config
        .scheduled_workouts()
        .map(|w| (w.clone(), config.badge_class(w.category).to_string()))
        .collect();
    let recent: Vec<(WorkoutRecord, String)> = config
        .recent_workouts()
        .map(|w| (w.clone(), config.badge_class(w.category).to_string()))
        .collect();
    let summary = config.workout_summary.clone();

    let open = move |id: String| {
        let navigate = navigate.clone();
        move |_: ev::MouseEvent| navigate(&routes::workout_path(&id), Default::default())
    };

    view! {
        <div class="page workouts">
            <div class="page-header">
                <div>
                    <h1 class="page-title">"YOUR "<span class="accent">"WORKOUTS"</span></h1>
                    <p class="page-subtitle">"Manage and track your training sessions"</p>
                </div>
                <a href=routes::NEW_WORKOUT class="btn btn-primary">
                    <Icon name="plus" />
                    "New Workout"
                </a>
            </div>

            <section>
                <h2 class="section-title"><Icon name="clock" />"SCHEDULED"</h2>
                <div class="card-grid">
                    {scheduled.into_iter().map(|(w, badge)| view! {
                        <div class="card workout-card clickable" on:click=open(w.id.clone())>
                            <div class="workout-card-top">
                                <span class=format!("badge {}", badge)>{w.category.as_str()}</span>
                                <span class="workout-when">{w.scheduled.clone().unwrap_or_default()}</span>
                            </div>
                            <h3 class="workout-name">{w.name.clone()}</h3>
                            <div class="workout-meta">
                                <span><Icon name="dumbbell" />{w.exercises.len()}" exercises"</span>
                                <span><Icon name="clock" />{w.duration.clone()}</span>
                            </div>
                            <button
                                class="btn btn-primary btn-block"
                                on:click={
                                    let go = open(w.id.clone());
                                    move |ev: ev::MouseEvent| {
                                        ev.stop_propagation();
                                        go(ev);
                                    }
                                }
                            >
                                <Icon name="play" />
                                "Start Workout"
                            </button>
                        </div>
                    }).collect_view()}
                </div>
            </section>

            <section>
                <h2 class="section-title"><Icon name="check" />"RECENT WORKOUTS"</h2>
                <div class="list">
                    {recent.into_iter().map(|(w, badge)| view! {
                        <div class="card workout-row clickable" on:click=open(w.id.clone())>
                            <span class=format!("badge {}", badge)>{w.category.as_str()}</span>
                            <div class="workout-row-body">
                                <h3 class="workout-name">{w.name.clone()}</h3>
                                <div class="workout-meta">
                                    <span>{w.exercises.len()}" exercises"</span>
                                    <span>{w.duration.clone()}</span>
                                    <span>"Completed "{w.last_completed.clone().unwrap_or_default()}</span>
                                </div>
                            </div>
                            <Icon name="chevron-right" />
                        </div>
                    }).collect_view()}
                </div>
            </section>

            <div class="summary-grid">
                {summary.into_iter().map(|tile| view! {
                    <div class="card summary-tile">
                        <p class=format!("summary-value {}", tile.accent.unwrap_or_default())>{tile.value}</p>
                        <p class="muted">{tile.label}</p>
                    </div>
                }).collect_view()}
            </div>
        </div>
    }
}
