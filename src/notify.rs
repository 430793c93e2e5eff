//! Transient user-facing messages.

use crate::builder::SavedWorkout;
use crate::error::SaveError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NotificationKind {
    Info,
    Success,
    Destructive,
}

impl NotificationKind {
    pub fn dismiss_after_ms(&self) -> u32 {
        match self {
            NotificationKind::Destructive => 5000,
            _ => 3000,
        }
    }

    pub fn class(&self) -> &'static str {
        match self {
            NotificationKind::Info => "toast-info",
            NotificationKind::Success => "toast-success",
            NotificationKind::Destructive => "toast-destructive",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            NotificationKind::Info => "ℹ",
            NotificationKind::Success => "✓",
            NotificationKind::Destructive => "✕",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub title: String,
    pub description: String,
}

impl Notification {
    pub fn info(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Info,
            title: title.into(),
            description: description.into(),
        }
    }

    pub fn workout_saved(saved: &SavedWorkout) -> Self {
        Self {
            kind: NotificationKind::Success,
            title: "Workout created!".to_string(),
            description: format!(
                "{} has been saved with {} exercises",
                saved.name,
                saved.exercise_count()
            ),
        }
    }
}

impl From<SaveError> for Notification {
    fn from(err: SaveError) -> Self {
        Self {
            kind: NotificationKind::Destructive,
            title: err.to_string(),
            description: err.hint().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::WorkoutBuilder;
    use crate::types::{EntryField, EntryId, WorkoutCategory};

    #[test]
    fn each_save_error_has_its_own_message() {
        let all = [SaveError::MissingName, SaveError::MissingType, SaveError::NoExercises];
        let notes: Vec<Notification> = all.into_iter().map(Notification::from).collect();

        assert_eq!(notes[0].title, "Missing workout name");
        assert_eq!(notes[1].title, "Missing workout type");
        assert_eq!(notes[2].title, "No exercises added");
        assert_eq!(notes[2].description, "Please add at least one exercise");
        assert!(notes.iter().all(|n| n.kind == NotificationKind::Destructive));
    }

    #[test]
    fn success_names_workout_and_valid_count() {
        let mut builder = WorkoutBuilder::new();
        builder.set_name("Leg Day");
        builder.set_category(Some(WorkoutCategory::Legs));
        builder.update_row(EntryId(1), EntryField::Name, "Squats");
        builder.add_row();

        let note = Notification::workout_saved(&builder.save().unwrap());
        assert_eq!(note.kind, NotificationKind::Success);
        assert_eq!(note.title, "Workout created!");
        assert_eq!(note.description, "Leg Day has been saved with 1 exercises");
    }

    #[test]
    fn errors_linger_longer() {
        assert!(
            NotificationKind::Destructive.dismiss_after_ms()
                > NotificationKind::Success.dismiss_after_ms()
        );
    }
}
