//! FILENAME: tabular/src/view.rs
//! PURPOSE: The shared list pipeline: filter tag -> search -> paginate.
//! CONTEXT: Every list page derives its visible slice through `view`.
//! The function is pure: it borrows the record snapshot, never clones
//! or mutates it, and identical inputs always produce identical output.

use serde::Serialize;

use crate::filter::FilterTag;
use records::FieldValue;

/// A record type that can appear in a list page.
pub trait TableRow {
    /// The fields the page's search box matches against, coerced to
    /// `FieldValue` so numbers match via their decimal text.
    fn search_fields(&self) -> Vec<FieldValue>;

    /// Whether this row passes the given filter tag. Tags that do not
    /// apply to the row type behave as `All`.
    fn matches_tag(&self, _tag: FilterTag) -> bool {
        true
    }
}

/// One page of a filtered list, plus its page-count metadata.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TableView<'a, R> {
    /// The records visible on the requested page, in source order.
    pub visible: Vec<&'a R>,
    /// The page actually shown after clamping.
    pub page: usize,
    /// Always at least 1, even for an empty list.
    pub total_pages: usize,
    /// Number of records that passed the tag and search steps.
    pub total_count: usize,
}

/// Case-insensitive substring containment over a row's search fields.
fn matches_query<R: TableRow>(row: &R, query_lower: &str) -> bool {
    row.search_fields()
        .iter()
        .any(|f| f.as_text().to_lowercase().contains(query_lower))
}

/// Run the full pipeline for one page request.
///
/// `query` is trimmed first; an empty or whitespace query skips the
/// search step. `page` is 1-based and clamped into `[1, total_pages]`,
/// so an overflowing page shows the last page rather than erroring.
pub fn view<'a, R: TableRow>(
    records: &'a [R],
    query: &str,
    filter: FilterTag,
    page: usize,
    per_page: usize,
) -> TableView<'a, R> {
    let query = query.trim();
    let query_lower = query.to_lowercase();

    let filtered: Vec<&R> = records
        .iter()
        .filter(|r| r.matches_tag(filter))
        .filter(|r| query.is_empty() || matches_query(*r, &query_lower))
        .collect();

    let per_page = per_page.max(1);
    let total_count = filtered.len();
    let total_pages = (total_count.div_ceil(per_page)).max(1);
    let page = page.clamp(1, total_pages);

    let start = (page - 1) * per_page;
    let end = (start + per_page).min(total_count);
    let visible = filtered[start..end].to_vec();

    TableView {
        visible,
        page,
        total_pages,
        total_count,
    }
}

/// The filtered set with pagination skipped: what a CSV export covers.
pub fn filtered<'a, R: TableRow>(
    records: &'a [R],
    query: &str,
    filter: FilterTag,
) -> Vec<&'a R> {
    let query = query.trim();
    let query_lower = query.to_lowercase();

    records
        .iter()
        .filter(|r| r.matches_tag(filter))
        .filter(|r| query.is_empty() || matches_query(*r, &query_lower))
        .collect()
}
