use crate::types::ExerciseInfo;

/// Narrow the exercise library by a case-insensitive name substring and an
/// optional muscle group. A blank query matches everything.
pub fn filter_exercises<'a>(
    exercises: &'a [ExerciseInfo],
    query: &str,
    muscle_group: Option<&str>,
) -> Vec<&'a ExerciseInfo> {
    let needle = query.trim().to_lowercase();
    exercises
        .iter()
        .filter(|e| muscle_group.map_or(true, |g| e.muscle_group == g))
        .filter(|e| needle.is_empty() || e.name.to_lowercase().contains(&needle))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn library() -> Vec<ExerciseInfo> {
        [
            ("Bench Press", "Chest", "Barbell"),
            ("Incline Dumbbell Press", "Chest", "Dumbbell"),
            ("Overhead Press", "Shoulders", "Barbell"),
            ("Squats", "Legs", "Barbell"),
        ]
        .into_iter()
        .map(|(name, group, equipment)| ExerciseInfo {
            name: name.into(),
            muscle_group: group.into(),
            equipment: equipment.into(),
        })
        .collect()
    }

    fn names(found: Vec<&ExerciseInfo>) -> Vec<&str> {
        found.into_iter().map(|e| e.name.as_str()).collect()
    }

    #[test]
    fn blank_query_returns_everything() {
        let lib = library();
        assert_eq!(filter_exercises(&lib, "  ", None).len(), lib.len());
    }

    #[test]
    fn query_is_case_insensitive_substring() {
        let lib = library();
        assert_eq!(
            names(filter_exercises(&lib, "PRESS", None)),
            vec!["Bench Press", "Incline Dumbbell Press", "Overhead Press"]
        );
    }

    #[test]
    fn group_and_query_combine() {
        let lib = library();
        assert_eq!(names(filter_exercises(&lib, "press", Some("Chest"))), vec![
            "Bench Press",
            "Incline Dumbbell Press"
        ]);
        assert!(filter_exercises(&lib, "squat", Some("Chest")).is_empty());
    }
}
