//! Search — case-insensitive substring filtering with size/offset pagination.
//!
//! [`search`] is a pure function over a contact slice: it never mutates the
//! records and has no side effects, so a single shared dataset can serve any
//! number of concurrent requests.

use crate::types::{Contact, Field};
use serde::Serialize;

/// Page size applied when a request does not specify one.
pub const DEFAULT_PAGE_SIZE: usize = 20;

/// A validated search request.
#[derive(Debug, Clone)]
pub struct SearchRequest {
    /// Substring to look for. `None` or `""` means no filtering.
    pub query: Option<String>,
    /// Restrict matching to a single field. `None` scans all six.
    pub field: Option<Field>,
    pub size: usize,
    pub offset: usize,
}

impl SearchRequest {
    /// Everything, first page, default size.
    pub fn all() -> Self {
        Self {
            query: None,
            field: None,
            size: DEFAULT_PAGE_SIZE,
            offset: 0,
        }
    }

    /// Unscoped query, first page, default size.
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: Some(query.into()),
            ..Self::all()
        }
    }

    /// Query scoped to one field.
    pub fn scoped(query: impl Into<String>, field: Field) -> Self {
        Self {
            field: Some(field),
            ..Self::new(query)
        }
    }

    /// Override pagination.
    pub fn page(mut self, size: usize, offset: usize) -> Self {
        self.size = size;
        self.offset = offset;
        self
    }
}

/// One page of filtered results plus the total match count.
///
/// `total` counts every filtered record, not just the page slice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchPage {
    pub results: Vec<Contact>,
    pub total: usize,
}

/// Errors from [`search`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SearchError {
    /// The requested page starts past the last filtered result.
    #[error("page start {start} is past the last result ({total} total)")]
    PageOutOfRange { start: usize, total: usize },
}

/// Filter `contacts` by the request and slice out one page.
///
/// Matching is case-insensitive substring containment. With a `field`, only
/// that field is inspected; without one, the first matching field keeps the
/// record, so a record appears at most once no matter how many fields match.
///
/// Pagination: `start = size * offset`. A `start` strictly past the filtered
/// count is an error; `start == total` is a valid empty page.
pub fn search(contacts: &[Contact], req: &SearchRequest) -> Result<SearchPage, SearchError> {
    let filtered: Vec<&Contact> = match req.query.as_deref() {
        Some(query) if !query.is_empty() => {
            let needle = query.to_lowercase();
            contacts
                .iter()
                .filter(|contact| matches(contact, &needle, req.field))
                .collect()
        }
        _ => contacts.iter().collect(),
    };

    let total = filtered.len();
    let start = req.size.saturating_mul(req.offset);
    if start > total {
        return Err(SearchError::PageOutOfRange { start, total });
    }
    let stop = start.saturating_add(req.size).min(total);

    Ok(SearchPage {
        results: filtered[start..stop].iter().map(|c| (*c).clone()).collect(),
        total,
    })
}

fn matches(contact: &Contact, needle: &str, field: Option<Field>) -> bool {
    match field {
        Some(field) => field.get(contact).to_lowercase().contains(needle),
        None => Field::ALL
            .iter()
            .any(|field| field.get(contact).to_lowercase().contains(needle)),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
