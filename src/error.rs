use thiserror::Error;

/// Why the workout builder refused to save. `Display` is the toast title.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SaveError {
    #[error("Missing workout name")]
    MissingName,
    #[error("Missing workout type")]
    MissingType,
    #[error("No exercises added")]
    NoExercises,
}

impl SaveError {
    pub fn hint(&self) -> &'static str {
        match self {
            SaveError::MissingName => "Please enter a name for your workout",
            SaveError::MissingType => "Please select a workout type",
            SaveError::NoExercises => "Please add at least one exercise",
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse seed configuration: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("workout record has an empty identifier")]
    EmptyWorkoutId,
    #[error("duplicate workout identifier `{0}`")]
    DuplicateWorkoutId(String),
    #[error("mobile breakpoint must be greater than zero")]
    InvalidBreakpoint,
    #[error("unknown log level `{0}`")]
    InvalidLogLevel(String),
}
