//! Read-only seed configuration.
//!
//! Every table the pages render comes from here. The bundled
//! `config/seed.json` is parsed once at startup and shared through the
//! Leptos context as an `Rc<AppConfig>`.

use std::collections::{BTreeMap, HashSet};
use std::rc::Rc;

use leptos::*;
use serde::{Deserialize, Serialize};
use tracing::level_filters::LevelFilter;

use crate::error::ConfigError;
use crate::layout::DEFAULT_MOBILE_BREAKPOINT;
use crate::types::*;

const EMBEDDED_SEED: &str = include_str!("../config/seed.json");

const FALLBACK_BADGE_CLASS: &str = "badge-neutral";

fn default_breakpoint() -> u32 {
    DEFAULT_MOBILE_BREAKPOINT
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_athlete_name() -> String {
    "Titan".to_string()
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct AppConfig {
    #[serde(default = "default_breakpoint")]
    pub mobile_breakpoint: u32,
    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default = "default_athlete_name")]
    pub athlete_name: String,
    #[serde(default)]
    pub category_styles: BTreeMap<WorkoutCategory, String>,
    #[serde(default)]
    pub workouts: Vec<WorkoutRecord>,
    #[serde(default)]
    pub dashboard: DashboardData,
    #[serde(default)]
    pub workout_summary: Vec<SummaryTile>,
    #[serde(default)]
    pub exercises: Vec<ExerciseInfo>,
    #[serde(default)]
    pub progress: ProgressData,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            mobile_breakpoint: default_breakpoint(),
            log_level: default_log_level(),
            athlete_name: default_athlete_name(),
            category_styles: BTreeMap::new(),
            workouts: Vec::new(),
            dashboard: DashboardData::default(),
            workout_summary: Vec::new(),
            exercises: Vec::new(),
            progress: ProgressData::default(),
        }
    }
}

impl AppConfig {
    pub fn embedded() -> Result<Self, ConfigError> {
        Self::from_json(EMBEDDED_SEED)
    }

    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: AppConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.mobile_breakpoint == 0 {
            return Err(ConfigError::InvalidBreakpoint);
        }
        self.level_filter()?;

        let mut seen = HashSet::new();
        for record in &self.workouts {
            if record.id.trim().is_empty() {
                return Err(ConfigError::EmptyWorkoutId);
            }
            if !seen.insert(record.id.as_str()) {
                return Err(ConfigError::DuplicateWorkoutId(record.id.clone()));
            }
        }
        Ok(())
    }

    pub fn level_filter(&self) -> Result<LevelFilter, ConfigError> {
        self.log_level
            .parse::<LevelFilter>()
            .map_err(|_| ConfigError::InvalidLogLevel(self.log_level.clone()))
    }

    /// Look a workout up by its route id. Absence is a normal outcome.
    pub fn workout(&self, id: &str) -> Option<&WorkoutRecord> {
        self.workouts.iter().find(|w| w.id == id)
    }

    pub fn scheduled_workouts(&self) -> impl Iterator<Item = &WorkoutRecord> {
        self.workouts.iter().filter(|w| w.scheduled.is_some())
    }

    pub fn recent_workouts(&self) -> impl Iterator<Item = &WorkoutRecord> {
        self.workouts.iter().filter(|w| w.last_completed.is_some())
    }

    pub fn badge_class(&self, category: WorkoutCategory) -> &str {
        self.category_styles
            .get(&category)
            .map(String::as_str)
            .unwrap_or(FALLBACK_BADGE_CLASS)
    }

    /// Muscle groups in first-seen order, for the exercise filter.
    pub fn muscle_groups(&self) -> Vec<String> {
        let mut groups: Vec<String> = Vec::new();
        for exercise in &self.exercises {
            if !groups.contains(&exercise.muscle_group) {
                groups.push(exercise.muscle_group.clone());
            }
        }
        groups
    }
}

pub type SharedConfig = Rc<AppConfig>;

pub fn provide_config(config: SharedConfig) {
    provide_context(config);
}

pub fn use_config() -> SharedConfig {
    use_context::<SharedConfig>().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_seed_is_valid() {
        let config = AppConfig::embedded().expect("bundled seed must parse");
        assert_eq!(config.mobile_breakpoint, 768);
        assert_eq!(config.workouts.len(), 5);
        for category in WorkoutCategory::ALL {
            assert!(config.category_styles.contains_key(&category), "{category:?}");
        }
    }

    #[test]
    fn lookup_by_id() {
        let config = AppConfig::embedded().unwrap();
        let record = config.workout("3").expect("record 3");
        assert_eq!(record.id, "3");
        assert_eq!(record.category, WorkoutCategory::Legs);
        assert_eq!(record.exercises[0].name, "Squats");
        assert!(config.workout("999").is_none());
        assert!(config.workout("").is_none());
    }

    #[test]
    fn scheduled_and_recent_split() {
        let config = AppConfig::embedded().unwrap();
        let scheduled: Vec<_> = config.scheduled_workouts().map(|w| w.id.as_str()).collect();
        let recent: Vec<_> = config.recent_workouts().map(|w| w.id.as_str()).collect();
        assert_eq!(scheduled, vec!["1", "2", "3"]);
        assert_eq!(recent, vec!["4", "5"]);
    }

    #[test]
    fn minimal_document_uses_defaults() {
        let config = AppConfig::from_json("{}").unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.level_filter().unwrap(), LevelFilter::INFO);
        assert_eq!(config.badge_class(WorkoutCategory::Push), FALLBACK_BADGE_CLASS);
    }

    #[test]
    fn rejects_duplicate_ids() {
        let json = r#"{"workouts": [
            {"id": "1", "name": "A", "category": "push", "duration": "1 min", "exercises": []},
            {"id": "1", "name": "B", "category": "pull", "duration": "1 min", "exercises": []}
        ]}"#;
        match AppConfig::from_json(json) {
            Err(ConfigError::DuplicateWorkoutId(id)) => assert_eq!(id, "1"),
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn rejects_blank_id() {
        let json = r#"{"workouts": [
            {"id": " ", "name": "A", "category": "push", "duration": "1 min", "exercises": []}
        ]}"#;
        assert!(matches!(AppConfig::from_json(json), Err(ConfigError::EmptyWorkoutId)));
    }

    #[test]
    fn rejects_bad_settings() {
        assert!(matches!(
            AppConfig::from_json(r#"{"mobile_breakpoint": 0}"#),
            Err(ConfigError::InvalidBreakpoint)
        ));
        assert!(matches!(
            AppConfig::from_json(r#"{"log_level": "loud"}"#),
            Err(ConfigError::InvalidLogLevel(_))
        ));
        assert!(matches!(
            AppConfig::from_json(r#"{"workouts": [{"id": "1", "category": "cardio"}]}"#),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn muscle_groups_are_unique_and_ordered() {
        let json = r#"{"exercises": [
            {"name": "Bench Press", "muscle_group": "Chest", "equipment": "Barbell"},
            {"name": "Squats", "muscle_group": "Legs", "equipment": "Barbell"},
            {"name": "Chest Flyes", "muscle_group": "Chest", "equipment": "Cable"}
        ]}"#;
        let config = AppConfig::from_json(json).unwrap();
        assert_eq!(config.muscle_groups(), vec!["Chest".to_string(), "Legs".to_string()]);
    }
}
