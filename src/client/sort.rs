//! SORT command options
//!
//! Builder for the optional clauses of SORT, appended in the canonical
//! argument order: BY, LIMIT, GET..., ASC|DESC, ALPHA, STORE.

use crate::protocol::{Buffer, Command};

/// Optional clauses for SORT
///
/// ```
/// use crimson::SortOptions;
///
/// let opts = SortOptions::new()
///     .by("weight_*")
///     .limit(0, 10)
///     .get("object_*")
///     .descending()
///     .alpha();
/// ```
#[derive(Debug, Clone, Default)]
pub struct SortOptions {
    by: Option<Buffer>,
    limit: Option<(i64, i64)>,
    get: Vec<Buffer>,
    descending: bool,
    alpha: bool,
    store: Option<Buffer>,
}

impl SortOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sort by external keys matching this pattern
    pub fn by(mut self, pattern: impl Into<Buffer>) -> Self {
        self.by = Some(pattern.into());
        self
    }

    /// Return a window of the sorted result
    pub fn limit(mut self, offset: i64, count: i64) -> Self {
        self.limit = Some((offset, count));
        self
    }

    /// Fetch external keys matching this pattern instead of the elements
    ///
    /// May be given several times; `#` retrieves the element itself.
    pub fn get(mut self, pattern: impl Into<Buffer>) -> Self {
        self.get.push(pattern.into());
        self
    }

    /// Sort ascending (the default)
    pub fn ascending(mut self) -> Self {
        self.descending = false;
        self
    }

    /// Sort descending
    pub fn descending(mut self) -> Self {
        self.descending = true;
        self
    }

    /// Sort lexicographically instead of numerically
    pub fn alpha(mut self) -> Self {
        self.alpha = true;
        self
    }

    /// Store the result at this key instead of returning it
    ///
    /// Flips the reply from a list to the stored element count.
    pub fn store(mut self, destination: impl Into<Buffer>) -> Self {
        self.store = Some(destination.into());
        self
    }

    /// True when a STORE destination is set
    pub(crate) fn stores(&self) -> bool {
        self.store.is_some()
    }

    /// Append the clauses to a SORT command in canonical order
    pub(crate) fn apply(&self, mut command: Command) -> Command {
        if let Some(pattern) = &self.by {
            command = command.arg("BY").arg(pattern.clone());
        }
        if let Some((offset, count)) = self.limit {
            command = command.arg("LIMIT").arg(offset).arg(count);
        }
        for pattern in &self.get {
            command = command.arg("GET").arg(pattern.clone());
        }
        if self.descending {
            command = command.arg("DESC");
        }
        if self.alpha {
            command = command.arg("ALPHA");
        }
        if let Some(destination) = &self.store {
            command = command.arg("STORE").arg(destination.clone());
        }
        command
    }
}

/// Aggregation function for ZUNIONSTORE / ZINTERSTORE
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Aggregate {
    Sum,
    Min,
    Max,
}

impl Aggregate {
    pub(crate) fn keyword(self) -> &'static str {
        match self {
            Aggregate::Sum => "SUM",
            Aggregate::Min => "MIN",
            Aggregate::Max => "MAX",
        }
    }
}
