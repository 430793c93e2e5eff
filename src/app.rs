//! App root: context providers, router and page shell.

use leptos::*;
use leptos_meta::{provide_meta_context, Title};
use leptos_router::*;

use crate::components::{provide_toasts, AppLayout, ToastContainer};
use crate::config::{provide_config, SharedConfig};
use crate::layout::provide_layout;
use crate::pages::{
    Coach, Dashboard, Exercises, NewWorkout, NotFound, Progress, Settings, WorkoutDetail, Workouts,
};
use crate::routes::{self, AppRoute};

#[component]
pub fn App(config: SharedConfig) -> impl IntoView {
    provide_meta_context();
    provide_layout(config.mobile_breakpoint);
    provide_config(config);
    provide_toasts();

    view! {
        <Router>
            <RouteTitle />
            <AppLayout>
                <Routes>
                    <Route path=routes::DASHBOARD view=Dashboard />
                    <Route path=routes::COACH view=Coach />
                    <Route path=routes::WORKOUTS view=Workouts />
                    <Route path=routes::NEW_WORKOUT view=NewWorkout />
                    <Route path=routes::WORKOUT_DETAIL view=WorkoutDetail />
                    <Route path=routes::EXERCISES view=Exercises />
                    <Route path=routes::PROGRESS view=Progress />
                    <Route path=routes::SETTINGS view=Settings />
                    <Route path=routes::NOT_FOUND view=NotFound />
                </Routes>
            </AppLayout>
            <ToastContainer />
        </Router>
    }
}

/// Keeps the document title in step with the current route.
#[component]
fn RouteTitle() -> impl IntoView {
    let pathname = use_location().pathname;
    let route = create_memo(move |_| AppRoute::resolve(&pathname.get()));

    create_effect(move |_| {
        let route = route.get();
        tracing::debug!(path = %pathname.get_untracked(), ?route, "route changed");
    });

    view! { <Title text=move || format!("{} | TITAN X", route.get().title()) /> }
}
