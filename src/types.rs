use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "lowercase")]
pub enum WorkoutCategory {
    Push,
    Pull,
    Legs,
    Upper,
    Lower,
    Full,
}

impl WorkoutCategory {
    pub const ALL: [WorkoutCategory; 6] = [
        WorkoutCategory::Push,
        WorkoutCategory::Pull,
        WorkoutCategory::Legs,
        WorkoutCategory::Upper,
        WorkoutCategory::Lower,
        WorkoutCategory::Full,
    ];

    /// Identifier used in form values and the seed file.
    pub fn as_str(&self) -> &'static str {
        match self {
            WorkoutCategory::Push => "push",
            WorkoutCategory::Pull => "pull",
            WorkoutCategory::Legs => "legs",
            WorkoutCategory::Upper => "upper",
            WorkoutCategory::Lower => "lower",
            WorkoutCategory::Full => "full",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            WorkoutCategory::Push => "Push",
            WorkoutCategory::Pull => "Pull",
            WorkoutCategory::Legs => "Legs",
            WorkoutCategory::Upper => "Upper Body",
            WorkoutCategory::Lower => "Lower Body",
            WorkoutCategory::Full => "Full Body",
        }
    }

    /// Parse a form value. Anything unknown (including "") means no selection.
    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.as_str() == value)
    }
}

/// Builder row identifier, handed out by the builder's own counter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EntryId(pub u64);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EntryField {
    Name,
    Sets,
    Reps,
    Weight,
}

/// One editable exercise row. Every field is free text while editing.
#[derive(Clone, Debug, PartialEq)]
pub struct ExerciseEntry {
    pub id: EntryId,
    pub name: String,
    pub sets: String,
    pub reps: String,
    pub weight: String,
}

impl ExerciseEntry {
    pub fn blank(id: EntryId) -> Self {
        Self {
            id,
            name: String::new(),
            sets: "3".to_string(),
            reps: "10".to_string(),
            weight: String::new(),
        }
    }

    pub fn field(&self, field: EntryField) -> &str {
        match field {
            EntryField::Name => &self.name,
            EntryField::Sets => &self.sets,
            EntryField::Reps => &self.reps,
            EntryField::Weight => &self.weight,
        }
    }

    pub fn is_complete(&self) -> bool {
        !self.name.trim().is_empty()
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ExerciseSpec {
    pub name: String,
    pub sets: u8,
    pub reps: String,
    pub load: String,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct WorkoutRecord {
    pub id: String,
    pub name: String,
    pub category: WorkoutCategory,
    pub duration: String,
    #[serde(default)]
    pub last_completed: Option<String>,
    #[serde(default)]
    pub scheduled: Option<String>,
    pub exercises: Vec<ExerciseSpec>,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct StatTile {
    pub label: String,
    pub value: String,
    #[serde(default)]
    pub unit: Option<String>,
    #[serde(default)]
    pub target: Option<String>,
    pub icon: String,
    #[serde(default)]
    pub accent: Option<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ProgressMetric {
    pub label: String,
    pub display: String,
    pub percent: u8,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct UpcomingWorkout {
    pub day: String,
    pub name: String,
    pub time: String,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct RecentLift {
    pub name: String,
    pub sets: String,
    pub weight: String,
    #[serde(default)]
    pub improvement: Option<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Default)]
pub struct DashboardData {
    #[serde(default)]
    pub stats: Vec<StatTile>,
    #[serde(default)]
    pub weekly_progress: Vec<ProgressMetric>,
    #[serde(default)]
    pub upcoming: Vec<UpcomingWorkout>,
    #[serde(default)]
    pub recent_lifts: Vec<RecentLift>,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct SummaryTile {
    pub label: String,
    pub value: String,
    #[serde(default)]
    pub accent: Option<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ExerciseInfo {
    pub name: String,
    pub muscle_group: String,
    pub equipment: String,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct PersonalRecord {
    pub lift: String,
    pub current: f64,
    pub previous: f64,
    pub unit: String,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct VolumePoint {
    pub label: String,
    pub volume: f64,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Default)]
pub struct ProgressData {
    #[serde(default)]
    pub personal_records: Vec<PersonalRecord>,
    #[serde(default)]
    pub weekly_volume: Vec<VolumePoint>,
}
