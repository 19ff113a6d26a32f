//! Author filter

use crate::types::MergeRequest;

/// Keep only merge requests opened by one of `allowed_ids`.
///
/// An empty `allowed_ids` means "no author restriction" and returns `items`
/// unchanged. A non-empty list with no matching authors yields an empty
/// result. Relative order is preserved either way.
pub fn filter_by_authors(items: Vec<MergeRequest>, allowed_ids: &[i64]) -> Vec<MergeRequest> {
    if allowed_ids.is_empty() {
        return items;
    }

    items
        .into_iter()
        .filter(|mr| allowed_ids.contains(&mr.author.id))
        .collect()
}
