pub mod coach;
pub mod dashboard;
pub mod exercises;
pub mod new_workout;
pub mod not_found;
pub mod progress;
pub mod settings;
pub mod workout_detail;
pub mod workouts;

pub use coach::Coach;
pub use dashboard::Dashboard;
pub use exercises::Exercises;
pub use new_workout::NewWorkout;
pub use not_found::NotFound;
pub use progress::Progress;
pub use settings::Settings;
pub use workout_detail::WorkoutDetail;
pub use workouts::Workouts;
