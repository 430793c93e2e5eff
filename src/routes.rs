//! Route table and navigation items.

pub const DASHBOARD: &str = "/";
pub const COACH: &str = "/coach";
pub const WORKOUTS: &str = "/workouts";
pub const NEW_WORKOUT: &str = "/workouts/new";
pub const WORKOUT_DETAIL: &str = "/workouts/:id";
pub const EXERCISES: &str = "/exercises";
pub const PROGRESS: &str = "/progress";
pub const SETTINGS: &str = "/settings";
pub const NOT_FOUND: &str = "/*any";

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AppRoute {
    Dashboard,
    Coach,
    Workouts,
    NewWorkout,
    WorkoutDetail(String),
    Exercises,
    Progress,
    Settings,
    NotFound,
}

impl AppRoute {
    /// Same matching rules as the router: static segments beat `:id`,
    /// and one trailing slash is ignored.
    pub fn resolve(path: &str) -> Self {
        let path = match path.strip_suffix('/') {
            Some(stripped) if !stripped.is_empty() => stripped,
            _ => path,
        };
        match path {
            DASHBOARD | "" => AppRoute::Dashboard,
            COACH => AppRoute::Coach,
            WORKOUTS => AppRoute::Workouts,
            NEW_WORKOUT => AppRoute::NewWorkout,
            EXERCISES => AppRoute::Exercises,
            PROGRESS => AppRoute::Progress,
            SETTINGS => AppRoute::Settings,
            other => match other.strip_prefix("/workouts/") {
                Some(id) if !id.is_empty() && !id.contains('/') => {
                    AppRoute::WorkoutDetail(id.to_string())
                }
                _ => AppRoute::NotFound,
            },
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            AppRoute::Dashboard => "Dashboard",
            AppRoute::Coach => "AI Coach",
            AppRoute::Workouts => "Workouts",
            AppRoute::NewWorkout => "New Workout",
            AppRoute::WorkoutDetail(_) => "Workout",
            AppRoute::Exercises => "Exercises",
            AppRoute::Progress => "Progress",
            AppRoute::Settings => "Settings",
            AppRoute::NotFound => "Not Found",
        }
    }
}

pub fn workout_path(id: &str) -> String {
    format!("{}/{}", WORKOUTS, id)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavItem {
    pub label: &'static str,
    pub path: &'static str,
    pub icon: &'static str,
}

impl NavItem {
    /// Exact pathname match; `/workouts/3` does not light up "Workouts".
    pub fn is_active(&self, pathname: &str) -> bool {
        self.path == pathname
    }
}

pub const PRIMARY_NAV: [NavItem; 5] = [
    NavItem { label: "Dashboard", path: DASHBOARD, icon: "dashboard" },
    NavItem { label: "AI Coach", path: COACH, icon: "message" },
    NavItem { label: "Workouts", path: WORKOUTS, icon: "dumbbell" },
    NavItem { label: "Exercises", path: EXERCISES, icon: "book" },
    NavItem { label: "Progress", path: PROGRESS, icon: "chart" },
];

pub const SETTINGS_NAV: NavItem = NavItem { label: "Settings", path: SETTINGS, icon: "settings" };
