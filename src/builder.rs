//! Workout builder state.
//!
//! Holds the name, the category and an ordered list of exercise rows. The
//! list never shrinks below one row. Fields stay free text while editing;
//! nothing is checked until [`WorkoutBuilder::save`] runs.

use crate::error::SaveError;
use crate::types::{EntryField, EntryId, ExerciseEntry, WorkoutCategory};

/// What a successful save hands back. Only rows with a name are kept.
#[derive(Clone, Debug, PartialEq)]
pub struct SavedWorkout {
    pub name: String,
    pub category: WorkoutCategory,
    pub exercises: Vec<ExerciseEntry>,
}

impl SavedWorkout {
    pub fn exercise_count(&self) -> usize {
        self.exercises.len()
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct WorkoutBuilder {
    name: String,
    category: Option<WorkoutCategory>,
    rows: Vec<ExerciseEntry>,
    next_id: u64,
}

impl Default for WorkoutBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl WorkoutBuilder {
    pub fn new() -> Self {
        Self {
            name: String::new(),
            category: None,
            rows: vec![ExerciseEntry::blank(EntryId(1))],
            next_id: 2,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn category(&self) -> Option<WorkoutCategory> {
        self.category
    }

    pub fn set_category(&mut self, category: Option<WorkoutCategory>) {
        self.category = category;
    }

    pub fn rows(&self) -> &[ExerciseEntry] {
        &self.rows
    }

    pub fn row(&self, id: EntryId) -> Option<&ExerciseEntry> {
        self.rows.iter().find(|r| r.id == id)
    }

    /// Zero-based position of a row in display order.
    pub fn position(&self, id: EntryId) -> Option<usize> {
        self.rows.iter().position(|r| r.id == id)
    }

    pub fn can_remove(&self) -> bool {
        self.rows.len() > 1
    }

    pub fn add_row(&mut self) -> EntryId {
        let id = EntryId(self.next_id);
        self.next_id += 1;
        self.rows.push(ExerciseEntry::blank(id));
        tracing::debug!(row = id.0, total = self.rows.len(), "builder row added");
        id
    }

    /// Returns whether a row was removed. The last row is never removed.
    pub fn remove_row(&mut self, id: EntryId) -> bool {
        if !self.can_remove() {
            return false;
        }
        let before = self.rows.len();
        self.rows.retain(|r| r.id != id);
        let removed = self.rows.len() != before;
        if removed {
            tracing::debug!(row = id.0, total = self.rows.len(), "builder row removed");
        }
        removed
    }

    /// Returns whether a row matched.
    pub fn update_row(&mut self, id: EntryId, field: EntryField, value: impl Into<String>) -> bool {
        let Some(row) = self.rows.iter_mut().find(|r| r.id == id) else {
            return false;
        };
        let value = value.into();
        match field {
            EntryField::Name => row.name = value,
            EntryField::Sets => row.sets = value,
            EntryField::Reps => row.reps = value,
            EntryField::Weight => row.weight = value,
        }
        true
    }

    /// Validates the form. Checks run in order and the first failure wins;
    /// the builder itself is never modified.
    pub fn save(&self) -> Result<SavedWorkout, SaveError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(SaveError::MissingName);
        }

        let category = self.category.ok_or(SaveError::MissingType)?;

        let exercises: Vec<ExerciseEntry> = self
            .rows
            .iter()
            .filter(|r| r.is_complete())
            .cloned()
            .collect();
        if exercises.is_empty() {
            return Err(SaveError::NoExercises);
        }

        Ok(SavedWorkout {
            name: self.name.clone(),
            category,
            exercises,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(builder: &WorkoutBuilder) -> Vec<EntryId> {
        builder.rows().iter().map(|r| r.id).collect()
    }

    #[test]
    fn starts_with_one_default_row() {
        let builder = WorkoutBuilder::new();
        assert_eq!(builder.rows().len(), 1);
        assert_eq!(builder.rows()[0], ExerciseEntry::blank(EntryId(1)));
        assert_eq!(builder.category(), None);
        assert!(!builder.can_remove());
    }

    #[test]
    fn add_row_appends_with_fresh_ids() {
        let mut builder = WorkoutBuilder::new();
        let a = builder.add_row();
        let b = builder.add_row();
        assert_eq!(ids(&builder), vec![EntryId(1), a, b]);
        assert!(a < b);
        assert_eq!(builder.row(b), Some(&ExerciseEntry::blank(b)));
    }

    #[test]
    fn ids_are_not_reused_after_removal() {
        let mut builder = WorkoutBuilder::new();
        let a = builder.add_row();
        assert!(builder.remove_row(a));
        let b = builder.add_row();
        assert_ne!(a, b);
        assert!(b > a);
    }

    #[test]
    fn removing_the_sole_row_is_a_no_op() {
        let mut builder = WorkoutBuilder::new();
        builder.update_row(EntryId(1), EntryField::Name, "Squats");
        let before = builder.clone();

        assert!(!builder.remove_row(EntryId(1)));
        assert_eq!(builder, before);
        assert_eq!(ids(&builder), vec![EntryId(1)]);
    }

    #[test]
    fn remove_row_drops_the_matching_row_only() {
        let mut builder = WorkoutBuilder::new();
        let a = builder.add_row();
        let b = builder.add_row();
        assert!(builder.remove_row(a));
        assert_eq!(ids(&builder), vec![EntryId(1), b]);
        assert_eq!(builder.position(b), Some(1));
    }

    #[test]
    fn remove_unknown_row_changes_nothing() {
        let mut builder = WorkoutBuilder::new();
        builder.add_row();
        let before = builder.clone();
        assert!(!builder.remove_row(EntryId(99)));
        assert_eq!(builder, before);
    }

    #[test]
    fn row_count_never_drops_below_one() {
        #[derive(Clone, Copy)]
        enum Op {
            Add,
            RemoveFirst,
            RemoveLast,
        }
        const OPS: [Op; 3] = [Op::Add, Op::RemoveFirst, Op::RemoveLast];
        const DEPTH: u32 = 7;

        for seq in 0..3usize.pow(DEPTH) {
            let mut builder = WorkoutBuilder::new();
            let mut code = seq;
            for _ in 0..DEPTH {
                match OPS[code % 3] {
                    Op::Add => {
                        builder.add_row();
                    }
                    Op::RemoveFirst => {
                        let id = builder.rows()[0].id;
                        builder.remove_row(id);
                    }
                    Op::RemoveLast => {
                        let id = builder.rows()[builder.rows().len() - 1].id;
                        builder.remove_row(id);
                    }
                }
                code /= 3;
                assert!(!builder.rows().is_empty(), "sequence {seq} emptied the builder");
            }
        }
    }

    #[test]
    fn update_row_replaces_one_field_without_coercion() {
        let mut builder = WorkoutBuilder::new();
        let id = builder.add_row();
        assert!(builder.update_row(id, EntryField::Sets, "lots"));
        assert!(builder.update_row(id, EntryField::Weight, "BW"));

        let row = builder.row(id).cloned().unwrap();
        assert_eq!(row.sets, "lots");
        assert_eq!(row.weight, "BW");
        assert_eq!(row.reps, "10");
        assert_eq!(builder.row(EntryId(1)), Some(&ExerciseEntry::blank(EntryId(1))));
    }

    #[test]
    fn update_unknown_row_is_ignored() {
        let mut builder = WorkoutBuilder::new();
        let before = builder.clone();
        assert!(!builder.update_row(EntryId(42), EntryField::Name, "Deadlift"));
        assert_eq!(builder, before);
    }

    #[test]
    fn save_requires_a_name_regardless_of_other_state() {
        let mut builder = WorkoutBuilder::new();
        assert_eq!(builder.save(), Err(SaveError::MissingName));

        builder.set_category(Some(WorkoutCategory::Push));
        builder.update_row(EntryId(1), EntryField::Name, "Bench Press");
        builder.set_name("   \t");
        assert_eq!(builder.save(), Err(SaveError::MissingName));
    }

    #[test]
    fn save_requires_a_category() {
        let mut builder = WorkoutBuilder::new();
        builder.set_name("Push Day");
        builder.update_row(EntryId(1), EntryField::Name, "Bench Press");
        assert_eq!(builder.save(), Err(SaveError::MissingType));
    }

    #[test]
    fn save_requires_a_named_exercise() {
        let mut builder = WorkoutBuilder::new();
        builder.set_name("Pull Day");
        builder.set_category(Some(WorkoutCategory::Pull));
        let id = builder.add_row();
        builder.update_row(id, EntryField::Name, "  ");
        assert_eq!(builder.save(), Err(SaveError::NoExercises));
    }

    #[test]
    fn failed_save_keeps_form_state() {
        let mut builder = WorkoutBuilder::new();
        builder.set_category(Some(WorkoutCategory::Legs));
        builder.update_row(EntryId(1), EntryField::Name, "Squats");
        let before = builder.clone();
        assert!(builder.save().is_err());
        assert_eq!(builder, before);
    }

    #[test]
    fn save_counts_only_named_rows() {
        let mut builder = WorkoutBuilder::new();
        builder.set_name("Leg Day");
        builder.set_category(WorkoutCategory::parse("legs"));
        builder.update_row(EntryId(1), EntryField::Name, "Squats");
        builder.add_row();

        let saved = builder.save().unwrap();
        assert_eq!(saved.name, "Leg Day");
        assert_eq!(saved.category, WorkoutCategory::Legs);
        assert_eq!(saved.exercise_count(), 1);
        assert_eq!(saved.exercises[0].name, "Squats");
    }
}
