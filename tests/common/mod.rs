//! Shared fixtures for mr-radar tests

#![allow(dead_code)]

pub mod mock_api;

pub use mock_api::MockReviewApi;

use mr_radar::Config;
use mr_radar::types::{ApprovalStatus, Author, MergeRequest, MergeStatus, MrState};
use std::collections::HashMap;

/// Build an author with a derived name and handle.
pub fn make_author(id: i64) -> Author {
    Author {
        id,
        name: format!("User {id}"),
        username: format!("user{id}"),
    }
}

/// Build a clean, mergeable MR (no conflicts, discussions resolved).
pub fn make_mr(iid: i64, author_id: i64) -> MergeRequest {
    MergeRequest {
        iid,
        title: format!("Change {iid}"),
        source_branch: format!("feature-{iid}"),
        target_branch: "main".to_string(),
        web_url: format!("https://gitlab.example.com/group/project/-/merge_requests/{iid}"),
        author: make_author(author_id),
        state: MrState::Opened,
        draft: false,
        has_conflicts: false,
        blocking_discussions_resolved: true,
        merge_status: MergeStatus::CanBeMerged,
        labels: vec![],
    }
}

/// Build an approval status snapshot.
pub fn make_status(approvals_required: i64, approvals_left: i64) -> ApprovalStatus {
    ApprovalStatus {
        approvals_required,
        approvals_left,
    }
}

/// Build a config pointing at nothing in particular, with no author filter.
pub fn make_config() -> Config {
    Config {
        api_token: "test-token".to_string(),
        project_id: 42,
        base_url: "https://gitlab.example.com/api/v4".to_string(),
        target_branch: "main".to_string(),
        authors: HashMap::new(),
        concurrency: None,
    }
}

/// Build a config restricted to the given author ids.
pub fn make_config_with_authors(ids: &[i64]) -> Config {
    let mut config = make_config();
    config.authors = ids
        .iter()
        .map(|id| (format!("user{id}"), *id))
        .collect();
    config
}
