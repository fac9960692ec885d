// SPDX-License-Identifier: MPL-2.0
//! Active-index navigation over the timeline set.
//!
//! All index arithmetic lives here so the UI components never touch raw
//! modular math. The navigator is the single owner of the one piece of
//! mutable application state: the active timeline index.

/// Navigation state snapshot for UI rendering.
///
/// Contains everything the stepper controls need without giving them access
/// to the navigator itself. `has_next`/`has_previous` differ from
/// `at_first`/`at_last` under wraparound.
#[derive(Debug, Clone, Copy, Default)]
pub struct NavigationInfo {
    /// Whether a next step would change the active index.
    pub has_next: bool,
    /// Whether a previous step would change the active index.
    pub has_previous: bool,
    /// Whether the active index is the first in the list.
    pub at_first: bool,
    /// Whether the active index is the last in the list.
    pub at_last: bool,
    /// Active index (0-based).
    pub active: usize,
    /// Total number of timelines.
    pub count: usize,
}

/// Steps through the timeline list, wrapping or clamping at the boundaries
/// depending on the configured policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimelineNavigator {
    active: usize,
    count: usize,
    wrap: bool,
}

impl TimelineNavigator {
    /// Creates a navigator over `count` timelines starting at index 0.
    ///
    /// `count` must be at least 1; [`crate::timeline::TimelineSet`]
    /// guarantees that.
    #[must_use]
    pub fn new(count: usize, wrap: bool) -> Self {
        debug_assert!(count > 0, "navigator requires a non-empty timeline set");
        Self {
            active: 0,
            count,
            wrap,
        }
    }

    /// The active timeline index, always within `[0, count)`.
    #[must_use]
    pub fn active(&self) -> usize {
        self.active
    }

    #[must_use]
    pub fn count(&self) -> usize {
        self.count
    }

    #[must_use]
    pub fn wraps(&self) -> bool {
        self.wrap
    }

    /// Selects `index` directly. Out-of-range indices normalize into
    /// `[0, count)` by modular arithmetic, so requesting `count` lands on 0.
    /// Returns the index that became active.
    pub fn select(&mut self, index: usize) -> usize {
        self.active = index % self.count;
        self.active
    }

    /// Steps forward. Under wraparound the last index rolls over to 0;
    /// otherwise stepping past the end is a no-op. Returns `Some(new_index)`
    /// when the index changed.
    pub fn next(&mut self) -> Option<usize> {
        if self.wrap {
            self.active = (self.active + 1) % self.count;
            if self.count == 1 {
                return None;
            }
            Some(self.active)
        } else if self.active + 1 < self.count {
            self.active += 1;
            Some(self.active)
        } else {
            None
        }
    }

    /// Steps backward, the mirror of [`Self::next`].
    pub fn previous(&mut self) -> Option<usize> {
        if self.wrap {
            self.active = (self.active + self.count - 1) % self.count;
            if self.count == 1 {
                return None;
            }
            Some(self.active)
        } else if self.active > 0 {
            self.active -= 1;
            Some(self.active)
        } else {
            None
        }
    }

    /// Returns the index `next()` would land on without mutating, or `None`
    /// when stepping forward would not change the index. The orchestrator
    /// uses this to pick a transition target before committing the swap.
    #[must_use]
    pub fn peek_next(&self) -> Option<usize> {
        if self.count == 1 {
            None
        } else if self.wrap {
            Some((self.active + 1) % self.count)
        } else if self.active + 1 < self.count {
            Some(self.active + 1)
        } else {
            None
        }
    }

    /// The mirror of [`Self::peek_next`].
    #[must_use]
    pub fn peek_previous(&self) -> Option<usize> {
        if self.count == 1 {
            None
        } else if self.wrap {
            Some((self.active + self.count - 1) % self.count)
        } else if self.active > 0 {
            Some(self.active - 1)
        } else {
            None
        }
    }

    /// Snapshot of the current navigation state for rendering.
    #[must_use]
    pub fn info(&self) -> NavigationInfo {
        let at_first = self.active == 0;
        let at_last = self.active + 1 == self.count;
        let multiple = self.count > 1;
        NavigationInfo {
            has_next: multiple && (self.wrap || !at_last),
            has_previous: multiple && (self.wrap || !at_first),
            at_first,
            at_last,
            active: self.active,
            count: self.count,
        }
    }
}
