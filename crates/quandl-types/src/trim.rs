//! Date trimming for dataset requests.

use chrono::NaiveDate;

use crate::DateRangeError;

/// Optional `trim_start`/`trim_end` bounds for a dataset request.
///
/// Dates are kept as the strings the caller supplied and are forwarded to
/// the API verbatim; only [`TrimRange::between`] validates them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TrimRange {
    /// First date to include (`trim_start`).
    pub start: Option<String>,
    /// Last date to include (`trim_end`).
    pub end: Option<String>,
}

impl TrimRange {
    /// Creates a range with both bounds set.
    #[must_use]
    pub fn new(start: impl Into<String>, end: impl Into<String>) -> Self {
        Self {
            start: Some(start.into()),
            end: Some(end.into()),
        }
    }

    /// Creates a range with no bounds.
    #[must_use]
    pub const fn unbounded() -> Self {
        Self {
            start: None,
            end: None,
        }
    }

    /// Creates a range open at the end.
    #[must_use]
    pub fn since(start: impl Into<String>) -> Self {
        Self {
            start: Some(start.into()),
            end: None,
        }
    }

    /// Creates a range open at the start.
    #[must_use]
    pub fn until(end: impl Into<String>) -> Self {
        Self {
            start: None,
            end: Some(end.into()),
        }
    }

    /// Creates a range from calendar dates, validating that start <= end.
    ///
    /// # Errors
    ///
    /// Returns an error if start > end.
    pub fn between(start: NaiveDate, end: NaiveDate) -> Result<Self, DateRangeError> {
        if start > end {
            return Err(DateRangeError::InvalidRange { start, end });
        }
        Ok(Self::new(
            start.format("%Y-%m-%d").to_string(),
            end.format("%Y-%m-%d").to_string(),
        ))
    }

    /// Returns true if neither bound is set.
    #[must_use]
    pub const fn is_unbounded(&self) -> bool {
        self.start.is_none() && self.end.is_none()
    }
}

impl std::fmt::Display for TrimRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} to {}",
            self.start.as_deref().unwrap_or("start"),
            self.end.as_deref().unwrap_or("end")
        )
    }
}
