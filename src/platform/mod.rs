//! Review-platform API access
//!
//! Defines the read-only API seam used by the review-queue orchestration and
//! the GitLab implementation of it.

mod gitlab;

pub use gitlab::GitLabClient;

use crate::error::Result;
use crate::types::{ApprovalStatus, MergeRequest};
use async_trait::async_trait;

/// Read operations against a code-review API.
///
/// This trait abstracts the upstream review API so the orchestration logic
/// can be exercised against a mock in tests.
#[async_trait]
pub trait ReviewApi: Send + Sync {
    /// List every open merge request in the project targeting `target_branch`.
    ///
    /// Returns the parsed sequence verbatim; author filtering happens later.
    async fn list_open_merge_requests(&self, target_branch: &str) -> Result<Vec<MergeRequest>>;

    /// Fetch the approval gate for one merge request by its `iid`.
    async fn approval_status(&self, iid: i64) -> Result<ApprovalStatus>;
}
