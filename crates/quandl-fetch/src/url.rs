//! Quandl URL construction.

use quandl_types::TrimRange;

/// Root of the dataset retrieval endpoint.
pub const API_ROOT: &str = "http://www.quandl.com/api/v1/datasets/";

/// Dataset search endpoint.
pub const SEARCH_ROOT: &str = "http://www.quandl.com/api/v1/datasets.json";

/// Response format suffix appended to dataset identifiers.
pub const FORMAT: &str = ".json";

/// Builds the URL for a dataset restricted to a date range.
///
/// URL format: `{root}{IDENTIFIER}.json?trim_start=..&trim_end=..&auth_token=..`,
/// each parameter present only when set. The identifier is not encoded;
/// callers must not pass reserved URL characters.
///
/// # Example
///
/// ```
/// use quandl_fetch::url::{API_ROOT, dataset_url};
/// use quandl_types::TrimRange;
///
/// let trim = TrimRange::new("2013-01-01", "2013-01-05");
/// let url = dataset_url(API_ROOT, "WIKI/AAPL", &trim, Some("secret"));
/// assert_eq!(
///     url,
///     "http://www.quandl.com/api/v1/datasets/WIKI/AAPL.json?trim_start=2013-01-01&trim_end=2013-01-05&auth_token=secret"
/// );
/// ```
#[must_use]
pub fn dataset_url(
    root: &str,
    identifier: &str,
    trim: &TrimRange,
    auth_token: Option<&str>,
) -> String {
    let mut params = Vec::with_capacity(3);
    if let Some(start) = &trim.start {
        params.push(format!("trim_start={start}"));
    }
    if let Some(end) = &trim.end {
        params.push(format!("trim_end={end}"));
    }
    with_params(format!("{root}{identifier}{FORMAT}"), params, auth_token)
}

/// Builds the URL for the complete history of a dataset.
#[must_use]
pub fn history_url(root: &str, identifier: &str, auth_token: Option<&str>) -> String {
    dataset_url(root, identifier, &TrimRange::unbounded(), auth_token)
}

/// Builds the URL for a dataset search.
///
/// Spaces in the query become `+`; nothing else is encoded.
#[must_use]
pub fn search_url(root: &str, query: &str, auth_token: Option<&str>) -> String {
    let query = query.replace(' ', "+");
    with_params(root.to_string(), vec![format!("query={query}")], auth_token)
}

/// Appends the query string, including the auth token when one is set.
fn with_params(base: String, mut params: Vec<String>, auth_token: Option<&str>) -> String {
    match auth_token.filter(|token| !token.is_empty()) {
        Some(token) => params.push(format!("auth_token={token}")),
        None => tracing::warn!("No auth token set. API calls are limited."),
    }

    if params.is_empty() {
        base
    } else {
        format!("{base}?{}", params.join("&"))
    }
}
