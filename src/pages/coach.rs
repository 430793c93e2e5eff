use leptos::*;

use crate::components::{EmptyState, Icon};
use crate::routes;

#[component]
pub fn Coach() -> impl IntoView {
    view! {
        <div class="page coach">
            <div class="page-header">
                <div>
                    <h1 class="page-title">"AI "<span class="accent">"COACH"</span></h1>
                    <p class="page-subtitle">"Personalised guidance for every session"</p>
                </div>
            </div>
            <EmptyState
                title="Coming soon"
                description="The AI coach isn't available yet. Keep logging workouts and it will have plenty to work with."
            >
                <a href=routes::WORKOUTS class="btn btn-primary">
                    <Icon name="dumbbell" />
                    "Go to Workouts"
                </a>
            </EmptyState>
        </div>
    }
}
