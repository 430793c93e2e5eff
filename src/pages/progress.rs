use leptos::*;

use crate::components::Icon;
use crate::config::use_config;
use crate::stats::{format_volume, format_weight, record_delta, volume_bar_heights};
use crate::types::PersonalRecord;

#[component]
pub fn Progress() -> impl IntoView {
    let config = use_config();
    let records = config.progress.personal_records.clone();
    let volume = config.progress.weekly_volume.clone();
    let heights = volume_bar_heights(&volume);

    view! {
        <div class="page progress">
            <div class="page-header">
                <div>
                    <h1 class="page-title">"YOUR "<span class="accent">"PROGRESS"</span></h1>
                    <p class="page-subtitle">"Personal records and training volume"</p>
                </div>
            </div>

            <section>
                <h2 class="section-title"><Icon name="trending" />"PERSONAL RECORDS"</h2>
                <div class="stat-grid">
                    {records.into_iter().map(|r| view! { <RecordCard record=r /> }).collect_view()}
                </div>
            </section>

            <div class="card">
                <h3 class="card-title"><Icon name="chart" />"WEEKLY VOLUME"</h3>
                <div class="bar-chart">
                    {volume.into_iter().zip(heights).map(|(point, height)| view! {
                        <div class="bar-column" title=format_volume(point.volume)>
                            <div class="bar-track">
                                <div class="bar-fill" style=format!("height: {}%", height)></div>
                            </div>
                            <span class="muted">{point.label}</span>
                        </div>
                    }).collect_view()}
                </div>
            </div>
        </div>
    }
}

#[component]
fn RecordCard(record: PersonalRecord) -> impl IntoView {
    let delta = record_delta(&record);
    let improved = record.current > record.previous;

    view! {
        <div class="card stat-card">
            <div>
                <p class="stat-label">{record.lift.clone()}</p>
                <div class="stat-value-row">
                    <span class="stat-value">{format_weight(record.current)}</span>
                    <span class="stat-unit">{record.unit.clone()}</span>
                </div>
                <p class="muted">"Previous: "{format_weight(record.previous)}" "{record.unit}</p>
            </div>
            {delta.map(|d| view! {
                <span class="lift-delta" class:lift-delta-up=improved>{d}</span>
            })}
        </div>
    }
}
