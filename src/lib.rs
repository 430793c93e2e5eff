mod app;
pub mod builder;
mod components;
pub mod config;
pub mod error;
pub mod layout;
pub mod library;
mod logging;
pub mod notify;
mod pages;
pub mod routes;
pub mod stats;
pub mod types;

use std::rc::Rc;

use leptos::*;
use tracing::level_filters::LevelFilter;
use wasm_bindgen::prelude::*;

use crate::app::App;
use crate::config::AppConfig;

#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();

    let config = match AppConfig::embedded() {
        Ok(config) => {
            logging::init(config.level_filter().unwrap_or(LevelFilter::INFO));
            config
        }
        Err(err) => {
            logging::init(LevelFilter::INFO);
            tracing::error!(error = %err, "seed config rejected, starting empty");
            AppConfig::default()
        }
    };

    tracing::info!(
        workouts = config.workouts.len(),
        exercises = config.exercises.len(),
        breakpoint = config.mobile_breakpoint,
        "starting TITAN X"
    );

    let config = Rc::new(config);
    mount_to_body(move || view! { <App config=config.clone() /> });
}
