//! Building the next path from the current one.
//!
//! A navigation target is the shortest path fragment that identifies the
//! collection (and filters) to show next, such as `ew-nigeria` or
//! `ew-nigeria/:level:1`. The composer prefixes it with the trail of the
//! current location so breadcrumbs survive the navigation.

use super::grammar::{parse, READ_COLLECTION, ROOT_COLLECTION, SEPARATOR};

/// Segments that never make sense as the first breadcrumb.
fn is_anchorless(segment: &str) -> bool {
    segment.is_empty() || segment == READ_COLLECTION || segment == ROOT_COLLECTION
}

/// Compose the path for navigating from `current_path` to `target_fragment`.
///
/// The current collection becomes a breadcrumb unless the target names the
/// same collection (for example when only adding a filter). The target is
/// appended verbatim, minus leading separators, so any filter suffix it
/// carries is kept. The result has no leading separator.
///
/// # Examples
///
/// ```
/// use shelfpath::path::compose_target_path;
///
/// // Drilling into a child collection.
/// assert_eq!(
///     compose_target_path("/enabling-writers", "ew-nigeria"),
///     "enabling-writers/ew-nigeria"
/// );
///
/// // Filtering the current collection does not repeat it.
/// assert_eq!(
///     compose_target_path("/enabling-writers/ew-nigeria", "ew-nigeria/:level:1"),
///     "enabling-writers/ew-nigeria/:level:1"
/// );
///
/// // The root collection is never a breadcrumb.
/// assert_eq!(compose_target_path("", "create"), "create");
/// ```
#[must_use]
pub fn compose_target_path(current_path: &str, target_fragment: &str) -> String {
    let current = parse(current_path);
    let target = parse(target_fragment);

    let mut trail = current.breadcrumbs;
    if !current.collection_name.is_empty() && target.collection_name != current.collection_name {
        trail.push(current.collection_name);
    }
    trail.push(target_fragment.trim_start_matches(SEPARATOR).to_string());

    if trail.first().is_some_and(|first| is_anchorless(first)) {
        trail.remove(0);
    }
    trail.join(&SEPARATOR.to_string())
}

/// The path to return to after leaving a book page.
///
/// Drops the book id and every `book` segment from the trail, keeping the
/// collections the book was reached through.
///
/// # Examples
///
/// ```
/// use shelfpath::path::book_return_path;
///
/// assert_eq!(book_return_path("/enabling-writers/ew-nigeria/book/abc123"), "/enabling-writers/ew-nigeria");
/// assert_eq!(book_return_path("/book/abc123"), "/");
/// ```
#[must_use]
pub fn book_return_path(path: &str) -> String {
    let parsed = parse(path);
    let trail: Vec<&str> = parsed
        .breadcrumbs
        .iter()
        .map(String::as_str)
        .filter(|segment| *segment != "book")
        .collect();
    format!("{SEPARATOR}{}", trail.join(&SEPARATOR.to_string()))
}
