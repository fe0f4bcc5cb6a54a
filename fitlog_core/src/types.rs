//! Core value types for the fitness log.
//!
//! This module defines the records stored by the data components:
//! - Exercises (catalog entries)
//! - Workouts (log entries)
//! - Weight measurements
//!
//! Field names on the wire follow the persisted state document, so the
//! serde derives here are the JSON contract for each element.

use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// Exercise
// ============================================================================

/// A named exercise with instructions on how to perform it
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Exercise {
    name: String,
    instructions: String,
}

impl Exercise {
    pub fn new(name: impl Into<String>, instructions: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            instructions: instructions.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn instructions(&self) -> &str {
        &self.instructions
    }

    /// Rename this value.
    ///
    /// Only affects this copy. Entries inside an
    /// [`ExerciseCatalog`](crate::ExerciseCatalog) are never handed out
    /// mutably, so renaming cannot break the catalog's uniqueness rule.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn set_instructions(&mut self, instructions: impl Into<String>) {
        self.instructions = instructions.into();
    }

    /// Case-insensitive name comparison used for catalog identity
    pub fn same_name(&self, name: &str) -> bool {
        self.name
            .chars()
            .flat_map(char::to_lowercase)
            .eq(name.chars().flat_map(char::to_lowercase))
    }
}

impl fmt::Display for Exercise {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Name: {}\nInstructions: {}", self.name, self.instructions)
    }
}

// ============================================================================
// Workout
// ============================================================================

/// A single logged workout.
///
/// `intensity` is expected to be one of `Low`, `Medium` or `High` but is not
/// checked; callers own that precondition.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Workout {
    exercise_type: String,
    #[serde(rename = "duration")]
    duration_minutes: u32,
    intensity: String,
}

impl Workout {
    pub fn new(
        exercise_type: impl Into<String>,
        duration_minutes: u32,
        intensity: impl Into<String>,
    ) -> Self {
        Self {
            exercise_type: exercise_type.into(),
            duration_minutes,
            intensity: intensity.into(),
        }
    }

    pub fn exercise_type(&self) -> &str {
        &self.exercise_type
    }

    pub fn duration_minutes(&self) -> u32 {
        self.duration_minutes
    }

    pub fn intensity(&self) -> &str {
        &self.intensity
    }

    pub fn set_exercise_type(&mut self, exercise_type: impl Into<String>) {
        self.exercise_type = exercise_type.into();
    }

    pub fn set_duration_minutes(&mut self, duration_minutes: u32) {
        self.duration_minutes = duration_minutes;
    }

    pub fn set_intensity(&mut self, intensity: impl Into<String>) {
        self.intensity = intensity.into();
    }
}

impl fmt::Display for Workout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Exercise Type: {}, Duration: {} minutes, Intensity: {}",
            self.exercise_type, self.duration_minutes, self.intensity
        )
    }
}

// ============================================================================
// Weight Record
// ============================================================================

/// A dated body-weight measurement.
///
/// `date` is expected as `YYYY-MM-DD` and `weight` as a positive number;
/// neither is validated. Immutable once constructed.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct WeightRecord {
    date: String,
    weight: f64,
}

impl WeightRecord {
    pub fn new(date: impl Into<String>, weight: f64) -> Self {
        Self {
            date: date.into(),
            weight,
        }
    }

    pub fn date(&self) -> &str {
        &self.date
    }

    pub fn weight(&self) -> f64 {
        self.weight
    }
}

impl fmt::Display for WeightRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Date: {}, Weight: {}", self.date, self.weight)
    }
}
