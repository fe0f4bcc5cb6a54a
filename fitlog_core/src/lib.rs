#![forbid(unsafe_code)]

//! Core domain model and persistence for the fitlog fitness tracker.
//!
//! This crate provides:
//! - Value types (exercises, workouts, weight records)
//! - The exercise catalog, workout log, weight history and goal
//! - Mutation notifications through an event sink
//! - JSON persistence of the whole state document
//! - Configuration and logging setup

pub mod types;
pub mod error;
pub mod events;
pub mod catalog;
pub mod workouts;
pub mod weight;
pub mod goal;
pub mod store;
pub mod state;
pub mod config;
pub mod logging;

// Re-export commonly used types
pub use error::{Error, Result};
pub use types::*;
pub use events::{Event, EventLog, EventSink, TracingSink};
pub use catalog::{default_exercises, ExerciseCatalog};
pub use workouts::WorkoutLog;
pub use weight::WeightHistory;
pub use goal::Goal;
pub use store::StateStore;
pub use state::FitnessState;
pub use config::Config;
