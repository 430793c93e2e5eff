use leptos::*;

use crate::components::{EmptyState, Icon};
use crate::config::use_config;
use crate::library::filter_exercises;

#[component]
pub fn Exercises() -> impl IntoView {
    let config = use_config();
    let (query, set_query) = create_signal(String::new());
    let (group, set_group) = create_signal(None::<String>);

    let groups = config.muscle_groups();
    let total = config.exercises.len();

    let visible = {
        let config = config.clone();
        move || {
            let query = query.get();
            let group = group.get();
            filter_exercises(&config.exercises, &query, group.as_deref())
                .into_iter()
                .cloned()
                .collect::<Vec<_>>()
        }
    };

    view! {
        <div class="page exercises">
            <div class="page-header">
                <div>
                    <h1 class="page-title">"EXERCISE "<span class="accent">"LIBRARY"</span></h1>
                    <p class="page-subtitle">{total}" movements to build your program from"</p>
                </div>
            </div>

            <div class="filter-bar">
                <label class="search">
                    <Icon name="search" />
                    <input
                        type="search"
                        class="input"
                        placeholder="Search exercises..."
                        prop:value=query
                        on:input=move |ev| set_query.set(event_target_value(&ev))
                    />
                </label>
                <select
                    class="input"
                    prop:value=move || group.get().unwrap_or_default()
                    on:change=move |ev| {
                        let value = event_target_value(&ev);
                        set_group.set((!value.is_empty()).then_some(value));
                    }
                >
                    <option value="">"All muscle groups"</option>
                    {groups.into_iter().map(|g| view! {
                        <option value=g.clone()>{g}</option>
                    }).collect_view()}
                </select>
            </div>

            {move || {
                let matches = visible();
                if matches.is_empty() {
                    view! {
                        <EmptyState
                            title="No exercises found"
                            description="Try a different search or muscle group."
                        >
                            <button class="btn btn-outline" on:click=move |_| {
                                set_query.set(String::new());
                                set_group.set(None);
                            }>"Clear filters"</button>
                        </EmptyState>
                    }.into_view()
                } else {
                    view! {
                        <div class="card-grid">
                            {matches.into_iter().map(|e| view! {
                                <div class="card exercise-card">
                                    <div class="stat-icon"><Icon name="dumbbell" /></div>
                                    <div>
                                        <h3 class="exercise-name">{e.name}</h3>
                                        <div class="workout-meta">
                                            <span class="badge badge-neutral">{e.muscle_group}</span>
                                            <span class="muted">{e.equipment}</span>
                                        </div>
                                    </div>
                                </div>
                            }).collect_view()}
                        </div>
                    }.into_view()
                }
            }}
        </div>
    }
}
