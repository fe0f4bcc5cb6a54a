//! Exercise catalog with case-insensitive unique names.
//!
//! This module also provides the built-in exercises a fresh session starts with.

use crate::events::{self, EventSink};
use crate::types::Exercise;
use once_cell::sync::Lazy;

/// Built-in exercises seeded into a fresh session
static DEFAULT_EXERCISES: Lazy<Vec<Exercise>> = Lazy::new(|| {
    vec![
        Exercise::new("Push-ups", "Do a set of 10 push-ups."),
        Exercise::new("Running", "Run for 30 minutes at a moderate pace."),
    ]
});

/// Get a reference to the built-in exercises
pub fn default_exercises() -> &'static [Exercise] {
    &DEFAULT_EXERCISES
}

/// Insertion-ordered exercises; no two share a name ignoring case
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ExerciseCatalog {
    exercises: Vec<Exercise>,
}

impl ExerciseCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Catalog pre-filled with [`default_exercises`]
    pub fn with_defaults(sink: &mut impl EventSink) -> Self {
        let mut catalog = Self::new();
        for exercise in default_exercises() {
            catalog.add(exercise.clone(), sink);
        }
        catalog
    }

    /// Add an exercise unless one with the same name (ignoring case) exists.
    ///
    /// Returns `false` and leaves the catalog untouched for a duplicate.
    pub fn add(&mut self, exercise: Exercise, sink: &mut impl EventSink) -> bool {
        if self.contains(exercise.name()) {
            tracing::debug!("Exercise {:?} already in catalog", exercise.name());
            return false;
        }
        self.exercises.push(exercise);
        sink.emit(events::EXERCISE_ADDED);
        true
    }

    /// Case-insensitive lookup by name
    pub fn find(&self, name: &str) -> Option<&Exercise> {
        self.exercises.iter().find(|e| e.same_name(name))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.find(name).is_some()
    }

    /// Copy of all exercises in insertion order
    pub fn list(&self) -> Vec<Exercise> {
        self.exercises.clone()
    }

    pub fn len(&self) -> usize {
        self.exercises.len()
    }

    pub fn is_empty(&self) -> bool {
        self.exercises.is_empty()
    }

    /// Replace the whole catalog.
    ///
    /// The replacement is built before anything is discarded. A later entry
    /// whose name repeats an earlier one (ignoring case) is dropped with a
    /// warning so the uniqueness rule still holds. No events are emitted.
    pub fn load_from(&mut self, exercises: Vec<Exercise>) {
        let mut replacement = Self::new();
        for exercise in exercises {
            if replacement.contains(exercise.name()) {
                tracing::warn!(
                    "Dropping duplicate exercise {:?} while loading catalog",
                    exercise.name()
                );
                continue;
            }
            replacement.exercises.push(exercise);
        }
        *self = replacement;
    }

    pub(crate) fn as_slice(&self) -> &[Exercise] {
        &self.exercises
    }
}
