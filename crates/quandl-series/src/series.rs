//! Extracted time series.

use serde::{Deserialize, Serialize};

/// A single (date, value) observation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Point<'a> {
    /// Observation date, as returned by the API.
    pub date: &'a str,
    /// Observed value.
    pub value: f64,
}

/// Parallel date and value vectors for one column of a dataset.
///
/// `dates` and `values` always have the same length and keep the row order
/// of the source response.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TimeSeries {
    /// Name of the column the values were read from.
    pub column: String,
    /// Observation dates.
    pub dates: Vec<String>,
    /// Observed values.
    pub values: Vec<f64>,
}

impl TimeSeries {
    /// Creates an empty series for the named column.
    #[must_use]
    pub fn new(column: impl Into<String>) -> Self {
        Self {
            column: column.into(),
            dates: Vec::new(),
            values: Vec::new(),
        }
    }

    /// Creates an empty series with room for `capacity` observations.
    #[must_use]
    pub fn with_capacity(column: impl Into<String>, capacity: usize) -> Self {
        Self {
            column: column.into(),
            dates: Vec::with_capacity(capacity),
            values: Vec::with_capacity(capacity),
        }
    }

    /// Appends one observation.
    pub fn push(&mut self, date: impl Into<String>, value: f64) {
        self.dates.push(date.into());
        self.values.push(value);
    }

    /// Returns the number of observations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.dates.len()
    }

    /// Returns true if there are no observations.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    /// Iterates over the observations in source order.
    pub fn points(&self) -> impl Iterator<Item = Point<'_>> {
        self.dates
            .iter()
            .zip(&self.values)
            .map(|(date, &value)| Point { date, value })
    }

    /// Returns a copy ordered oldest first.
    ///
    /// The API usually lists the most recent observation first. ISO dates
    /// sort lexically, so a series whose first date is later than its last
    /// one is reversed; any other series is returned as is.
    #[must_use]
    pub fn chronological(&self) -> Self {
        let mut series = self.clone();
        if let (Some(first), Some(last)) = (self.dates.first(), self.dates.last())
            && first > last
        {
            series.dates.reverse();
            series.values.reverse();
        }
        series
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn newest_first() -> TimeSeries {
        let mut series = TimeSeries::new("Value");
        series.push("2013-01-04", 6.2303);
        series.push("2013-01-03", 6.2301);
        series.push("2013-01-02", 6.2300);
        series
    }

    #[test]
    fn test_points() {
        let series = newest_first();
        let points: Vec<_> = series.points().collect();
        assert_eq!(points.len(), 3);
        assert_eq!(points[0].date, "2013-01-04");
        assert!((points[0].value - 6.2303).abs() < 1e-12);
    }

    #[test]
    fn test_chronological_reverses_newest_first() {
        let series = newest_first().chronological();
        assert_eq!(series.dates, ["2013-01-02", "2013-01-03", "2013-01-04"]);
        assert!((series.values[0] - 6.2300).abs() < 1e-12);
    }

    #[test]
    fn test_chronological_keeps_oldest_first() {
        let series = newest_first().chronological();
        assert_eq!(series.chronological(), series);
        assert!(TimeSeries::new("x").chronological().is_empty());
    }
}
