//! Browser smoke tests. Run with `wasm-pack test --headless --firefox`.

#![cfg(target_arch = "wasm32")]

use titan::builder::WorkoutBuilder;
use titan::config::AppConfig;
use titan::layout::{window_width, LayoutDetector, LayoutMode};
use titan::routes::AppRoute;
use titan::types::{EntryField, WorkoutCategory};
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn embedded_seed_loads() {
    let config = AppConfig::embedded().expect("seed parses");
    assert!(config.workout("1").is_some());
    assert!(config.workout("999").is_none());
}

#[wasm_bindgen_test]
fn detector_matches_live_window() {
    let width = window_width();
    let detector = LayoutDetector::new(768, width);
    assert_eq!(detector.mode(), LayoutMode::classify(width, 768));
}

#[wasm_bindgen_test]
fn builder_saves_in_browser() {
    let mut builder = WorkoutBuilder::new();
    builder.set_name("Leg Day");
    builder.set_category(Some(WorkoutCategory::Legs));
    let first = builder.rows()[0].id;
    builder.update_row(first, EntryField::Name, "Squats");

    let saved = builder.save().expect("complete form saves");
    assert_eq!(saved.exercise_count(), 1);
}

#[wasm_bindgen_test]
fn new_route_wins_over_detail() {
    assert_eq!(AppRoute::resolve("/workouts/new"), AppRoute::NewWorkout);
}
