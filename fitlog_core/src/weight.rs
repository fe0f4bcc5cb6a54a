//! Body-weight history in logging order.

use crate::events::{self, EventSink};
use crate::types::WeightRecord;

/// Weight records in the order they were logged.
///
/// Dates are not sorted, so an older date logged later stays after newer ones.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct WeightHistory {
    records: Vec<WeightRecord>,
}

impl WeightHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a measurement.
    ///
    /// The caller is responsible for a `YYYY-MM-DD` date and a positive weight.
    pub fn log(&mut self, date: impl Into<String>, weight: f64, sink: &mut impl EventSink) {
        self.records.push(WeightRecord::new(date, weight));
        sink.emit(events::WEIGHT_LOGGED);
    }

    /// Copy of all records in logging order
    pub fn list(&self) -> Vec<WeightRecord> {
        self.records.clone()
    }

    /// Most recently logged record
    pub fn latest(&self) -> Option<&WeightRecord> {
        self.records.last()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Replace the whole history without emitting events
    pub fn load_from(&mut self, records: Vec<WeightRecord>) {
        self.records = records;
    }

    pub(crate) fn as_slice(&self) -> &[WeightRecord] {
        &self.records
    }
}
