//! User-list query pipeline: filter, summarize, paginate
//!
//! `evaluate` is a pure function of its three inputs. Out-of-range pages and
//! empty filters are normalized, never rejected.

use crate::types::{FilterSpec, PaginationSpec, Stats, UserRecord};
use serde::Serialize;
use std::collections::BTreeSet;
use tracing::debug;

/// Everything the list view renders for one set of inputs
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QueryResult {
    /// Computed over the unfiltered list
    pub stats: Stats,
    /// Records passing the filter, in source order
    pub filtered: Vec<UserRecord>,
    pub total_filtered: usize,
    /// At least 1, even for an empty list
    pub total_pages: usize,
    /// The requested page clamped to `total_pages`
    pub effective_page: usize,
    /// The page slice of `filtered`
    pub visible: Vec<UserRecord>,
    /// 1-based index of the first visible row, 0 when nothing matched
    pub range_start: usize,
    /// 1-based index of the last visible row, 0 when nothing matched
    pub range_end: usize,
}

/// Filter, count and slice the user list in one pass.
///
/// `stats` always describe the whole `records` list, whatever the filter.
/// The requested page is clamped to `1..=total_pages`, where `total_pages` is
/// at least 1, so an empty result is page 1 with a `0..0` range.
pub fn evaluate(
    records: &[UserRecord],
    filter: &FilterSpec,
    pagination: PaginationSpec,
) -> QueryResult {
    let stats = Stats::from_records(records);

    let filtered: Vec<UserRecord> = records
        .iter()
        .filter(|record| filter.matches(record))
        .cloned()
        .collect();

    let page_size = pagination.page_size().get();
    let total_filtered = filtered.len();
    let total_pages = total_filtered.div_ceil(page_size).max(1);
    let effective_page = pagination.page().min(total_pages);

    let start = (effective_page - 1) * page_size;
    let end = total_filtered.min(effective_page * page_size);
    let visible = filtered[start..end].to_vec();

    let range_start = if total_filtered == 0 { 0 } else { start + 1 };

    debug!(
        total = records.len(),
        total_filtered,
        requested_page = pagination.page(),
        effective_page,
        "Evaluated user list"
    );

    QueryResult {
        stats,
        filtered,
        total_filtered,
        total_pages,
        effective_page,
        visible,
        range_start,
        range_end: end,
    }
}

/// Distinct non-empty organization names, sorted
pub fn organizations(records: &[UserRecord]) -> Vec<String> {
    records
        .iter()
        .map(|r| r.organization.as_str())
        .filter(|org| !org.is_empty())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}
