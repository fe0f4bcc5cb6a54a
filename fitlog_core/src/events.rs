//! Notification side-channel for state mutations.
//!
//! Components announce successful mutations through an [`EventSink`] that the
//! caller passes in. Nothing in the core reads events back.

use chrono::{DateTime, Local};
use std::fmt;

pub const EXERCISE_ADDED: &str = "Exercise added.";
pub const WORKOUT_ADDED: &str = "Workout added.";
pub const WEIGHT_LOGGED: &str = "Weight logged.";
pub const GOAL_SET: &str = "Goal set successfully.";

/// Sink trait for mutation notifications
pub trait EventSink {
    fn emit(&mut self, description: &str);
}

/// Discards every notification
impl EventSink for () {
    fn emit(&mut self, _description: &str) {}
}

impl<S: EventSink + ?Sized> EventSink for &mut S {
    fn emit(&mut self, description: &str) {
        (**self).emit(description)
    }
}

/// A recorded notification
#[derive(Clone, Debug, PartialEq)]
pub struct Event {
    pub logged_at: DateTime<Local>,
    pub description: String,
}

impl Event {
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            logged_at: Local::now(),
            description: description.into(),
        }
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}\n{}",
            self.logged_at.format("%a %b %d %H:%M:%S %Y"),
            self.description
        )
    }
}

/// Append-only in-memory event log
#[derive(Clone, Debug, Default)]
pub struct EventLog {
    events: Vec<Event>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Event> {
        self.events.iter()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }

    /// Descriptions only, oldest first
    pub fn descriptions(&self) -> Vec<&str> {
        self.events.iter().map(|e| e.description.as_str()).collect()
    }
}

impl EventSink for EventLog {
    fn emit(&mut self, description: &str) {
        self.events.push(Event::new(description));
    }
}

impl<'a> IntoIterator for &'a EventLog {
    type Item = &'a Event;
    type IntoIter = std::slice::Iter<'a, Event>;

    fn into_iter(self) -> Self::IntoIter {
        self.events.iter()
    }
}

/// Forwards notifications to the tracing subscriber
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingSink;

impl EventSink for TracingSink {
    fn emit(&mut self, description: &str) {
        tracing::info!(event = description, "state changed");
    }
}
