//! Workout log: an insertion-ordered list with no uniqueness rule.

use crate::events::{self, EventSink};
use crate::types::Workout;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct WorkoutLog {
    workouts: Vec<Workout>,
}

impl WorkoutLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a workout. Duplicates are allowed.
    pub fn add(&mut self, workout: Workout, sink: &mut impl EventSink) {
        self.workouts.push(workout);
        sink.emit(events::WORKOUT_ADDED);
    }

    /// Remove the first workout equal to `workout`.
    ///
    /// Returns whether anything was removed.
    pub fn remove(&mut self, workout: &Workout) -> bool {
        match self.workouts.iter().position(|w| w == workout) {
            Some(index) => {
                self.workouts.remove(index);
                true
            }
            None => false,
        }
    }

    /// Copy of all workouts in insertion order
    pub fn list(&self) -> Vec<Workout> {
        self.workouts.clone()
    }

    pub fn len(&self) -> usize {
        self.workouts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.workouts.is_empty()
    }

    /// Replace the whole log without emitting events
    pub fn load_from(&mut self, workouts: Vec<Workout>) {
        self.workouts = workouts;
    }

    pub(crate) fn as_slice(&self) -> &[Workout] {
        &self.workouts
    }
}
