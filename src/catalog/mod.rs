//! Built-in workout plan catalog.

pub mod types;

pub use types::{Exercise, ExerciseKind, WorkoutPlan};

/// Catalog of available workout plans.
pub struct WorkoutCatalog {
    /// Seeded plans
    plans: Vec<WorkoutPlan>,
}

impl WorkoutCatalog {
    /// Create a catalog seeded with the built-in plans.
    pub fn new() -> Self {
        Self {
            plans: vec![eccentric_upper(), incinerator()],
        }
    }

    /// All plans, in catalog order.
    pub fn plans(&self) -> &[WorkoutPlan] {
        &self.plans
    }

    /// Look up a plan by name, case-insensitive.
    pub fn by_name(&self, name: &str) -> Option<&WorkoutPlan> {
        self.plans
            .iter()
            .find(|plan| plan.name.eq_ignore_ascii_case(name))
    }
}

impl Default for WorkoutCatalog {
    fn default() -> Self {
        Self::new()
    }
}

/// Eccentric Upper: upper-body strength with slow negatives.
fn eccentric_upper() -> WorkoutPlan {
    let names = [
        "Standard Push Up",
        "Standard Pull Up",
        "Military Press",
        "Military Push Ups",
        "Chin Ups",
        "Deep Swimmers Press",
        "Fly Push Ups",
        "V Pull Ups",
        "Upright Hammer Pull",
        "Staggered Push Ups",
        "Rocket Launcher Row",
        "Lateral/Anterior Raise",
        "Plyo Push Ups",
        "Vaulter Pull Ups",
        "Pterodactyl Flys",
        "Rocket Launcher Kick Back",
        "Flip Flop Combo",
        "Tricep Skyfers",
        "Kneeling Preacher Curl",
    ];

    let mut exercises: Vec<Exercise> = names
        .iter()
        .map(|name| Exercise::new(*name, ExerciseKind::TenRepsEccentric))
        .collect();
    exercises.push(Exercise::new("Burnout", ExerciseKind::ThirtySeconds));

    WorkoutPlan::new("Eccentric Upper", exercises)
}

/// Incinerator: upper-body strength to exhaustion.
fn incinerator() -> WorkoutPlan {
    let names = [
        "Renegade Row",
        "Pull Ups",
        "Floor Flys",
        "Push Ups",
        "Rocket Launcher Row",
        "Chin Ups",
        "A Press",
        "Military Push Ups",
        "Monkey Pump",
        "Pike Press",
        "Pterodactyl Flys",
        "Flipper",
        "Popeye Hammer Curls",
        "Kneeler Curls",
        "Hail to the Chief",
        "Skyfers",
        "Arm and Hammer",
        "Rocket Launcher Kickbacks",
    ];

    let mut exercises: Vec<Exercise> = names
        .iter()
        .map(|name| Exercise::new(*name, ExerciseKind::TenReps))
        .collect();
    exercises.push(Exercise::new("Burnout", ExerciseKind::ThirtySeconds));

    WorkoutPlan::new("Incinerator", exercises)
}
