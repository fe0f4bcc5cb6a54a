//! The single current fitness goal.

use crate::events::{self, EventSink};
use serde::{Deserialize, Serialize};

/// Current goal; both fields empty means "no goal set"
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Goal {
    goal_type: String,
    description: String,
}

impl Goal {
    pub fn new(goal_type: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            goal_type: goal_type.into(),
            description: description.into(),
        }
    }

    pub fn goal_type(&self) -> &str {
        &self.goal_type
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Replace the goal type. Emits nothing; only the description notifies.
    pub fn set_goal_type(&mut self, goal_type: impl Into<String>) {
        self.goal_type = goal_type.into();
    }

    pub fn set_description(&mut self, description: impl Into<String>, sink: &mut impl EventSink) {
        self.description = description.into();
        sink.emit(events::GOAL_SET);
    }

    pub fn is_set(&self) -> bool {
        !(self.goal_type.is_empty() && self.description.is_empty())
    }

    /// Overwrite both fields without emitting events
    pub fn load_from(&mut self, other: Goal) {
        *self = other;
    }
}
