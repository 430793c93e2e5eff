use leptos::*;

use crate::components::Icon;
use crate::config::use_config;
use crate::layout::use_is_mobile;
use crate::routes;
use crate::types::{ProgressMetric, RecentLift, StatTile, UpcomingWorkout};

const MOBILE_SECTIONS: [&str; 3] = ["Statistics", "Progress", "Upcoming"];

#[component]
pub fn Dashboard() -> impl IntoView {
    let config = use_config();
    let is_mobile = use_is_mobile();
    let (active_section, set_active_section) = create_signal(0usize);

    let athlete = config.athlete_name.to_uppercase();
    let stats = config.dashboard.stats.clone();
    let progress = config.dashboard.weekly_progress.clone();
    let lifts = config.dashboard.recent_lifts.clone();
    let upcoming = config.dashboard.upcoming.clone();

    move || {
        if is_mobile.get() {
            let stats = stats.clone();
            let progress = progress.clone();
            let lifts = lifts.clone();
            let upcoming = upcoming.clone();
            view! {
                <div class="dashboard dashboard-mobile">
                    <div class="page-header">
                        <div>
                            <h1 class="page-title">"HEY, "<span class="accent">{athlete.clone()}</span></h1>
                            <p class="page-subtitle">"Ready to train?"</p>
                        </div>
                        <a href=routes::NEW_WORKOUT class="fab" aria-label="New workout">
                            <Icon name="plus" />
                        </a>
                    </div>

                    <div class="dashboard-section">
                        {move || match active_section.get() {
                            0 => view! {
                                <div class="stat-strip">
                                    {stats.iter().cloned().map(|s| view! { <StatCard stat=s /> }).collect_view()}
                                </div>
                            }.into_view(),
                            1 => view! { <WeeklyProgress metrics=progress.clone() lifts=lifts.clone() /> }.into_view(),
                            _ => view! { <Upcoming workouts=upcoming.clone() /> }.into_view(),
                        }}
                    </div>

                    <div class="dot-nav">
                        {MOBILE_SECTIONS.iter().enumerate().map(|(idx, label)| view! {
                            <button
                                class="dot"
                                class:dot-active=move || active_section.get() == idx
                                aria-label=*label
                                on:click=move |_| set_active_section.set(idx)
                            ></button>
                        }).collect_view()}
                    </div>
                </div>
            }.into_view()
        } else {
            view! {
                <div class="dashboard">
                    <div class="page-header">
                        <div>
                            <h1 class="page-title">"WELCOME BACK, "<span class="accent">{athlete.clone()}</span></h1>
                            <p class="page-subtitle">"Ready to crush your goals today?"</p>
                        </div>
                        <div class="header-actions">
                            <a href=routes::NEW_WORKOUT class="fab" aria-label="New workout">
                                <Icon name="plus" />
                            </a>
                            <a href=routes::COACH class="btn btn-primary">
                                <Icon name="zap" />
                                "Ask AI Coach"
                            </a>
                        </div>
                    </div>

                    <div class="stat-grid">
                        {stats.iter().cloned().map(|s| view! { <StatCard stat=s /> }).collect_view()}
                    </div>

                    <div class="dashboard-grid">
                        <div class="span-2">
                            <WeeklyProgress metrics=progress.clone() lifts=lifts.clone() />
                        </div>
                        <Upcoming workouts=upcoming.clone() />
                    </div>
                </div>
            }.into_view()
        }
    }
}

#[component]
fn StatCard(stat: StatTile) -> impl IntoView {
    let accent = stat.accent.clone().unwrap_or_default();
    view! {
        <div class="card stat-card">
            <div>
                <p class="stat-label">{stat.label}</p>
                <div class="stat-value-row">
                    <span class="stat-value">{stat.value}</span>
                    {stat.unit.map(|u| view! { <span class="stat-unit">{u}</span> })}
                    {stat.target.map(|t| view! { <span class="stat-unit">"/ "{t}</span> })}
                </div>
            </div>
            <div class=format!("stat-icon {}", accent)>
                <Icon name=stat.icon />
            </div>
        </div>
    }
}

#[component]
fn WeeklyProgress(metrics: Vec<ProgressMetric>, lifts: Vec<RecentLift>) -> impl IntoView {
    view! {
        <div class="card">
            <h3 class="card-title"><Icon name="target" />"WEEKLY PROGRESS"</h3>
            <div class="progress-list">
                {metrics.into_iter().map(|m| view! {
                    <div class="progress-item">
                        <div class="progress-row">
                            <span class="muted">{m.label}</span>
                            <span>{m.display}</span>
                        </div>
                        <div class="progress-track">
                            <div class="progress-fill" style=format!("width: {}%", m.percent.min(100))></div>
                        </div>
                    </div>
                }).collect_view()}
            </div>

            <div class="recent-lifts">
                <h4>"Recent Lifts"</h4>
                {lifts.into_iter().map(|lift| {
                    let improved = lift.improvement.is_some();
                    view! {
                        <div class="lift-row">
                            <div>
                                <p class="lift-name">{lift.name}</p>
                                <p class="muted">{lift.sets}" @ "{lift.weight}</p>
                            </div>
                            <span class="lift-delta" class:lift-delta-up=improved>
                                {lift.improvement.unwrap_or_else(|| "—".to_string())}
                            </span>
                        </div>
                    }
                }).collect_view()}
            </div>
        </div>
    }
}

#[component]
fn Upcoming(workouts: Vec<UpcomingWorkout>) -> impl IntoView {
    view! {
        <div class="card">
            <h3 class="card-title"><Icon name="calendar" />"UPCOMING"</h3>
            <div class="upcoming-list">
                {workouts.into_iter().enumerate().map(|(idx, w)| view! {
                    <div class="upcoming-item" class:upcoming-next=idx == 0>
                        <div class="upcoming-row">
                            <span class="upcoming-day">{w.day}</span>
                            <span class="muted">{w.time}</span>
                        </div>
                        <p class="upcoming-name">{w.name}</p>
                    </div>
                }).collect_view()}
            </div>
            <a href=routes::WORKOUTS class="btn btn-outline btn-block">"View All Workouts"</a>
        </div>
    }
}
