mod catalog;
mod page;
mod preview;
mod support;

pub use page::Resources;

use shared_types::CategoryFilter;

/// Category the page opens with: the `?category=` query when it names a
/// known category, otherwise the configured default.
pub fn initial_category(query: Option<&str>, fallback: CategoryFilter) -> CategoryFilter {
    match query {
        None | Some("") => fallback,
        Some(raw) => raw.parse().unwrap_or_else(|e| {
            tracing::warn!(error = %e, "ignoring category query");
            fallback
        }),
    }
}

/// Category to switch to when the route's query moves from `applied` to
/// `query`. Returns `None` while the query is unchanged, so a category the
/// user picked on the page survives re-renders.
pub fn reseed_category(
    applied: &mut Option<String>,
    query: Option<String>,
    fallback: CategoryFilter,
) -> Option<CategoryFilter> {
    if *applied == query {
        return None;
    }
    let next = initial_category(query.as_deref(), fallback);
    *applied = query;
    Some(next)
}
