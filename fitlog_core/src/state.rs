//! Session-owned fitness state.
//!
//! [`FitnessState`] bundles the four data components that one session
//! owns, and wires them to a [`StateStore`] for the common load/save paths.

use crate::events::EventSink;
use crate::{ExerciseCatalog, Goal, Result, StateStore, WeightHistory, WorkoutLog};
use std::path::Path;

/// Everything a session tracks
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FitnessState {
    pub catalog: ExerciseCatalog,
    pub workouts: WorkoutLog,
    pub goal: Goal,
    pub weights: WeightHistory,
}

impl FitnessState {
    /// Empty collections and an unset goal
    pub fn new() -> Self {
        Self::default()
    }

    /// Fresh session with the built-in exercises in the catalog
    pub fn with_default_exercises(sink: &mut impl EventSink) -> Self {
        Self {
            catalog: ExerciseCatalog::with_defaults(sink),
            ..Self::default()
        }
    }

    /// Load the full state from a file
    pub fn load(path: &Path) -> Result<Self> {
        let mut state = Self::new();
        state.reload(&StateStore::new(path))?;
        Ok(state)
    }

    /// Load the state, or start a fresh session if the file does not exist.
    ///
    /// Any other failure (unreadable, not JSON, wrong shape) is returned so
    /// the caller does not overwrite a file it could not understand.
    pub fn load_or_fresh(path: &Path, seed_defaults: bool, sink: &mut impl EventSink) -> Result<Self> {
        match Self::load(path) {
            Ok(state) => Ok(state),
            Err(e) if e.is_not_found() => {
                tracing::info!("No state file found at {:?}, starting fresh", path);
                if seed_defaults {
                    Ok(Self::with_default_exercises(sink))
                } else {
                    Ok(Self::new())
                }
            }
            Err(e) => Err(e),
        }
    }

    /// Replace every component from the store; unchanged on error
    pub fn reload(&mut self, store: &StateStore) -> Result<()> {
        store.load_into(
            &mut self.catalog,
            &mut self.workouts,
            &mut self.goal,
            &mut self.weights,
        )
    }

    /// Save the full state to a file
    pub fn save(&self, path: &Path) -> Result<()> {
        self.save_to(&StateStore::new(path))
    }

    pub fn save_to(&self, store: &StateStore) -> Result<()> {
        store.save(&self.catalog, &self.workouts, &self.goal, &self.weights)
    }
}
