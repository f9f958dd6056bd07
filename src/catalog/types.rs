//! Workout plan types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Prescription style for an exercise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExerciseKind {
    /// Work for thirty seconds
    ThirtySeconds,
    /// Ten repetitions
    TenReps,
    /// Ten repetitions with a slow eccentric phase
    TenRepsEccentric,
}

impl ExerciseKind {
    /// Get display name.
    pub fn display_name(&self) -> &'static str {
        match self {
            ExerciseKind::ThirtySeconds => "30 seconds",
            ExerciseKind::TenReps => "10 reps",
            ExerciseKind::TenRepsEccentric => "10 eccentric reps",
        }
    }
}

impl std::fmt::Display for ExerciseKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// A single exercise within a plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Exercise {
    /// Exercise name
    pub name: String,
    /// Prescription style
    pub kind: ExerciseKind,
}

impl Exercise {
    /// Create an exercise.
    pub fn new(name: impl Into<String>, kind: ExerciseKind) -> Self {
        Self {
            name: name.into(),
            kind,
        }
    }
}

/// An ordered workout plan.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkoutPlan {
    /// Unique identifier
    pub id: Uuid,
    /// Plan name
    pub name: String,
    /// Ordered exercises
    pub exercises: Vec<Exercise>,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
}

impl WorkoutPlan {
    /// Create a plan with the given name and exercises.
    pub fn new(name: impl Into<String>, exercises: Vec<Exercise>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            exercises,
            created_at: Utc::now(),
        }
    }

    /// Number of exercises in the plan.
    pub fn len(&self) -> usize {
        self.exercises.len()
    }

    /// Whether the plan has no exercises.
    pub fn is_empty(&self) -> bool {
        self.exercises.is_empty()
    }

    /// Exercise at the given position.
    pub fn get(&self, index: usize) -> Option<&Exercise> {
        self.exercises.get(index)
    }
}
