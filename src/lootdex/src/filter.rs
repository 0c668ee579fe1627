//! Record filtering and pagination.
//!
//! Filtering is a pure pass over borrowed records: free text matches against
//! titles first and whole serialized records second, and an optional field
//! constraint narrows by dotted path. Pagination clamps out-of-range pages
//! instead of erroring, so a stale page number after a narrowing filter
//! still lands on the last page of the shorter result.

use crate::record::Record;
use crate::value::display_string;

/// A free-text plus field-constraint query.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterQuery {
    /// Case-insensitive term matched against titles and serialized records.
    pub text: Option<String>,
    /// Dotted path of the field constraint.
    pub field_path: Option<String>,
    /// Term the resolved field's display form must contain. The constraint
    /// is active only when both this and the path are given.
    pub field_value: Option<String>,
}

impl FilterQuery {
    /// True when no predicate is active.
    pub fn is_empty(&self) -> bool {
        !self.has_text() && !self.has_field_constraint()
    }

    fn has_text(&self) -> bool {
        self.text.as_deref().is_some_and(|term| !term.is_empty())
    }

    fn has_field_constraint(&self) -> bool {
        self.field_path.is_some() && self.field_value.is_some()
    }
}

/// Filter records against a query, preserving relative order.
pub fn filter<'a>(records: &'a [Record], query: &FilterQuery) -> Vec<&'a Record> {
    records
        .iter()
        .filter(|record| matches(record, query))
        .collect()
}

/// Whether one record passes both predicates of a query.
pub fn matches(record: &Record, query: &FilterQuery) -> bool {
    passes_text(record, query.text.as_deref().unwrap_or(""))
        && passes_field(record, query)
}

/// The text predicate: empty terms pass everything, then titles are tried
/// before the record's full JSON form.
fn passes_text(record: &Record, term: &str) -> bool {
    if term.is_empty() {
        return true;
    }
    let term = term.to_lowercase();
    if record.title().to_lowercase().contains(&term) {
        return true;
    }
    record.to_json_string().to_lowercase().contains(&term)
}

/// The field predicate: inactive unless both path and value are given; the
/// path must resolve, and the resolved display form must contain the term.
fn passes_field(record: &Record, query: &FilterQuery) -> bool {
    let (path, term) = match (query.field_path.as_deref(), query.field_value.as_deref()) {
        (Some(path), Some(term)) => (path, term),
        _ => return true,
    };
    match record.resolve(path) {
        Some(value) => display_string(value)
            .to_lowercase()
            .contains(&term.to_lowercase()),
        None => false,
    }
}

/// One page of a sequence plus its position metadata.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Page<'a, T> {
    /// The page's items, in sequence order.
    pub items: &'a [T],
    /// 1-based page number, after clamping.
    pub page: usize,
    /// Page size, after flooring to 1.
    pub page_size: usize,
    /// Length of the whole sequence.
    pub total_count: usize,
}

impl<T> Page<'_, T> {
    /// Number of pages. An empty sequence still has one (empty) page.
    pub fn total_pages(&self) -> usize {
        self.total_count.div_ceil(self.page_size).max(1)
    }
}

/// Slice one page out of a sequence.
///
/// `page` is 1-based and clamped into the valid range; `page_size` is
/// floored to 1. The empty sequence yields a single empty page.
pub fn paginate<T>(items: &[T], page: usize, page_size: usize) -> Page<'_, T> {
    let page_size = page_size.max(1);
    let total_count = items.len();
    let total_pages = total_count.div_ceil(page_size).max(1);
    let page = page.clamp(1, total_pages);
    let start = (page - 1) * page_size;
    let end = (start + page_size).min(total_count);
    Page {
        items: &items[start..end],
        page,
        page_size,
        total_count,
    }
}
