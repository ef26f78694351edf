//! Column selection over raw tables.

use quandl_types::ReferenceList;

/// Builds a reference list from two columns of a table.
///
/// Identifiers come from `id_column` and descriptions from
/// `description_column`; the two are read independently, so passing the
/// same position fills both sequences with the same values. Row 0 is left
/// out when `skip_header` is set, whatever it contains. Rows too short to
/// hold either column are dropped so the two sequences stay aligned.
///
/// # Example
///
/// ```
/// use quandl_lists::extract_columns;
///
/// let rows = vec![
///     vec!["Ticker".to_string(), "Name".to_string()],
///     vec!["AAPL".to_string(), "Apple Inc.".to_string()],
/// ];
/// let list = extract_columns(&rows, 0, 1, true);
/// assert_eq!(list.identifiers(), ["AAPL"]);
/// ```
#[must_use]
pub fn extract_columns<R: AsRef<[String]>>(
    rows: &[R],
    id_column: usize,
    description_column: usize,
    skip_header: bool,
) -> ReferenceList {
    let skip = usize::from(skip_header);
    let mut list = ReferenceList::with_capacity(rows.len().saturating_sub(skip));

    for (index, row) in rows.iter().enumerate().skip(skip) {
        let row = row.as_ref();
        match (row.get(id_column), row.get(description_column)) {
            (Some(identifier), Some(description)) => {
                list.push(identifier.as_str(), description.as_str());
            }
            _ => tracing::warn!(
                row = index,
                width = row.len(),
                id_column,
                description_column,
                "row too short, skipped"
            ),
        }
    }

    list
}

/// Returns a copy of `list` with `prefix` prepended to every element.
#[must_use]
pub fn prepend_list<S: AsRef<str>>(prefix: &str, list: &[S]) -> Vec<String> {
    list.iter()
        .map(|item| format!("{prefix}{}", item.as_ref()))
        .collect()
}

/// Returns the position of `name` in the first row of `rows`.
#[must_use]
pub fn column_index<R: AsRef<[String]>>(rows: &[R], name: &str) -> Option<usize> {
    rows.first()?.as_ref().iter().position(|header| header == name)
}
