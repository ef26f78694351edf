//! Method-style access to extraction on responses.

use quandl_types::{ExtractError, TimeSeriesResponse};

use crate::{TimeSeries, extract};

/// Extraction operations as methods on [`TimeSeriesResponse`].
///
/// ```
/// use quandl_series::TimeSeriesExt;
/// use quandl_types::{Cell, TimeSeriesResponse};
///
/// let response = TimeSeriesResponse {
///     columns: vec!["Date".into(), "Value".into()],
///     data: vec![vec![Cell::from("2013-01-04"), Cell::from(6.2303)]],
///     ..Default::default()
/// };
/// let (values, column) = response.series_data()?;
/// assert_eq!(column, "Value");
/// assert_eq!(values, [6.2303]);
/// # Ok::<(), quandl_types::ExtractError>(())
/// ```
pub trait TimeSeriesExt {
    /// See [`extract::extract_column`].
    ///
    /// # Errors
    ///
    /// Returns an error if extraction fails.
    fn time_series(&self, column: &str) -> Result<TimeSeries, ExtractError>;

    /// See [`extract::likely_data_column`].
    fn likely_data_column(&self) -> Option<&str>;

    /// See [`extract::likely_series`].
    ///
    /// # Errors
    ///
    /// Returns an error if the response has no columns or extraction fails.
    fn likely_series(&self) -> Result<TimeSeries, ExtractError>;

    /// See [`extract::column_values`].
    ///
    /// # Errors
    ///
    /// Returns an error if extraction fails.
    fn column_values(&self, column: &str) -> Result<Vec<f64>, ExtractError>;

    /// See [`extract::series_dates`].
    ///
    /// # Errors
    ///
    /// Returns an error if the response has no columns or extraction fails.
    fn series_dates(&self) -> Result<Vec<String>, ExtractError>;

    /// See [`extract::series_data`].
    ///
    /// # Errors
    ///
    /// Returns an error if the response has no columns or extraction fails.
    fn series_data(&self) -> Result<(Vec<f64>, String), ExtractError>;
}

impl TimeSeriesExt for TimeSeriesResponse {
    fn time_series(&self, column: &str) -> Result<TimeSeries, ExtractError> {
        extract::extract_column(self, column)
    }

    fn likely_data_column(&self) -> Option<&str> {
        extract::likely_data_column(self)
    }

    fn likely_series(&self) -> Result<TimeSeries, ExtractError> {
        extract::likely_series(self)
    }

    fn column_values(&self, column: &str) -> Result<Vec<f64>, ExtractError> {
        extract::column_values(self, column)
    }

    fn series_dates(&self) -> Result<Vec<String>, ExtractError> {
        extract::series_dates(self)
    }

    fn series_data(&self) -> Result<(Vec<f64>, String), ExtractError> {
        extract::series_data(self)
    }
}
