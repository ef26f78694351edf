//! Raw delimited tables and the reference lists built from them.

use serde::{Deserialize, Serialize};

/// A source row that could not be parsed and was left out of a table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkippedRow {
    /// Zero-based record position in the source file.
    pub index: usize,
    /// Why the row was rejected.
    pub reason: String,
}

impl SkippedRow {
    /// Creates a new skipped row record.
    #[must_use]
    pub fn new(index: usize, reason: impl Into<String>) -> Self {
        Self {
            index,
            reason: reason.into(),
        }
    }
}

/// Rectangular string grid read from a delimited file.
///
/// Row 0 holds the header names when the source has a header. Rows that
/// failed to parse are not in [`rows`](Self::rows) but listed in
/// [`skipped`](Self::skipped).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawTable {
    /// Successfully parsed rows, in source order.
    pub rows: Vec<Vec<String>>,
    /// Rows that were rejected while parsing.
    pub skipped: Vec<SkippedRow>,
}

impl RawTable {
    /// Creates a table from already parsed rows.
    #[must_use]
    pub const fn new(rows: Vec<Vec<String>>) -> Self {
        Self {
            rows,
            skipped: Vec::new(),
        }
    }

    /// Returns the first row, if any.
    #[must_use]
    pub fn header(&self) -> Option<&[String]> {
        self.rows.first().map(Vec::as_slice)
    }

    /// Returns the number of parsed rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns true if no rows were parsed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// A single (identifier, description) pair borrowed from a [`ReferenceList`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ListEntry<'a> {
    /// Dataset identifier, e.g. `WIKI/AAPL`.
    pub identifier: &'a str,
    /// Human-readable description.
    pub description: &'a str,
}

/// A two-column catalog of identifiers and their descriptions.
///
/// The two sequences are always the same length.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferenceList {
    identifiers: Vec<String>,
    descriptions: Vec<String>,
}

impl ReferenceList {
    /// Creates an empty list.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            identifiers: Vec::new(),
            descriptions: Vec::new(),
        }
    }

    /// Creates an empty list with room for `capacity` entries.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            identifiers: Vec::with_capacity(capacity),
            descriptions: Vec::with_capacity(capacity),
        }
    }

    /// Builds a list from (identifier, description) pairs.
    pub fn from_pairs<I, A, B>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (A, B)>,
        A: Into<String>,
        B: Into<String>,
    {
        let mut list = Self::new();
        for (identifier, description) in pairs {
            list.push(identifier, description);
        }
        list
    }

    /// Appends one entry.
    pub fn push(&mut self, identifier: impl Into<String>, description: impl Into<String>) {
        self.identifiers.push(identifier.into());
        self.descriptions.push(description.into());
    }

    /// Appends every entry of `other`, preserving order.
    pub fn extend(&mut self, other: Self) {
        self.identifiers.extend(other.identifiers);
        self.descriptions.extend(other.descriptions);
    }

    /// Returns the identifiers.
    #[must_use]
    pub fn identifiers(&self) -> &[String] {
        &self.identifiers
    }

    /// Returns the descriptions.
    #[must_use]
    pub fn descriptions(&self) -> &[String] {
        &self.descriptions
    }

    /// Returns the number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.identifiers.len()
    }

    /// Returns true if the list is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.identifiers.is_empty()
    }

    /// Returns the entry at `index`.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<ListEntry<'_>> {
        Some(ListEntry {
            identifier: self.identifiers.get(index)?,
            description: self.descriptions.get(index)?,
        })
    }

    /// Iterates over (identifier, description) pairs.
    pub fn entries(&self) -> impl Iterator<Item = ListEntry<'_>> {
        self.identifiers
            .iter()
            .zip(&self.descriptions)
            .map(|(identifier, description)| ListEntry {
                identifier,
                description,
            })
    }

    /// Splits the list into its identifier and description sequences.
    #[must_use]
    pub fn into_parts(self) -> (Vec<String>, Vec<String>) {
        (self.identifiers, self.descriptions)
    }
}
