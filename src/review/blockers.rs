//! Blocker derivation

use crate::types::MergeRequest;

/// Derive the ordered list of reasons `mr` cannot be merged right now.
///
/// Conditions are checked in a fixed order so output is deterministic:
/// unresolved threads, conflicts, merge-eligibility, missing approvals.
/// An MR matching none of them is ready to merge.
pub fn derive_blockers(mr: &MergeRequest, approvals_left: i64) -> Vec<String> {
    let mut blockers: Vec<String> = vec![];

    if !mr.blocking_discussions_resolved {
        blockers.push("unresolved threads".into());
    }

    if mr.has_conflicts {
        blockers.push("has conflicts".into());
    }

    if mr.merge_status.is_blocking() {
        blockers.push("cannot be merged".into());
    }

    if approvals_left > 0 {
        blockers.push(format!("requires approval ({approvals_left})"));
    }

    blockers
}
