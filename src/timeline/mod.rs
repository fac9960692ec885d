// SPDX-License-Identifier: MPL-2.0
//! Timeline domain types.
//!
//! A [`Timeline`] is a titled, year-bounded collection of chronological
//! events; a [`TimelineSet`] is the validated, non-empty list the whole
//! application renders from. Both are immutable after construction.

pub mod dataset;
pub mod navigator;

pub use dataset::{load_embedded, load_from_path};
pub use navigator::{NavigationInfo, TimelineNavigator};

use crate::error::DatasetError;
use serde::Deserialize;

/// A single dated event inside a timeline.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct HistoricalEvent {
    pub year: i32,
    pub description: String,
}

/// A titled, year-bounded collection of events. Events are ordered
/// chronologically by convention; the order is not enforced.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Timeline {
    pub title: String,
    pub start_year: i32,
    pub end_year: i32,
    #[serde(default)]
    pub events: Vec<HistoricalEvent>,
}

/// Validated, non-empty ordered list of timelines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimelineSet {
    timelines: Vec<Timeline>,
}

impl TimelineSet {
    /// Validates and wraps a list of timelines.
    ///
    /// # Errors
    ///
    /// Returns [`DatasetError::Empty`] for an empty list and
    /// [`DatasetError::YearOrder`] when a timeline's start year is after its
    /// end year. Empty event lists are legal; they render as a slider with
    /// both edge affordances disabled.
    pub fn new(timelines: Vec<Timeline>) -> Result<Self, DatasetError> {
        if timelines.is_empty() {
            return Err(DatasetError::Empty);
        }
        for timeline in &timelines {
            if timeline.start_year > timeline.end_year {
                return Err(DatasetError::YearOrder {
                    title: timeline.title.clone(),
                });
            }
        }
        Ok(Self { timelines })
    }

    /// Number of timelines in the set. Always at least 1.
    #[must_use]
    pub fn len(&self) -> usize {
        self.timelines.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Returns the timeline at `index`, if it exists.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Timeline> {
        self.timelines.get(index)
    }

    /// Iterates over the timelines in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Timeline> {
        self.timelines.iter()
    }
}
