//! Core types for mr-radar

use serde::{Deserialize, Serialize};
use std::fmt;

/// The account that opened a merge request
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Author {
    /// Numeric account id (the identity used by the author filter)
    pub id: i64,
    /// Display name
    pub name: String,
    /// Login handle
    pub username: String,
}

/// Merge-eligibility status as reported by GitLab
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum MergeStatus {
    /// Eligibility has not been computed yet
    Unchecked,
    /// Eligibility is being computed
    Checking,
    /// No conflicts; the MR can be merged
    CanBeMerged,
    /// The MR cannot be merged
    CannotBeMerged,
    /// The MR could not be merged and a recheck is pending
    CannotBeMergedRecheck,
}

impl MergeStatus {
    /// Whether this status definitively blocks merging.
    pub const fn is_blocking(self) -> bool {
        matches!(self, Self::CannotBeMerged | Self::CannotBeMergedRecheck)
    }
}

/// Lifecycle state of a merge request
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum MrState {
    /// Open and awaiting review/merge
    Opened,
    /// Closed without merging
    Closed,
    /// Merged
    Merged,
}

impl fmt::Display for MrState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Opened => write!(f, "opened"),
            Self::Closed => write!(f, "closed"),
            Self::Merged => write!(f, "merged"),
        }
    }
}

/// One open merge request as fetched from the API.
///
/// Immutable after fetch; approval data lives on [`ReviewedMergeRequest`],
/// built by the enrichment step.
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MergeRequest {
    /// Project-scoped sequence number
    pub iid: i64,
    /// MR title
    pub title: String,
    /// Branch the change was made on
    pub source_branch: String,
    /// Branch the change is proposed to merge into
    pub target_branch: String,
    /// Web URL for the MR
    pub web_url: String,
    /// Who opened the MR
    pub author: Author,
    /// Lifecycle state
    pub state: MrState,
    /// Whether the MR is marked as a draft
    #[serde(default)]
    pub draft: bool,
    /// Whether the MR conflicts with its target branch
    pub has_conflicts: bool,
    /// Whether every blocking discussion thread has been resolved
    pub blocking_discussions_resolved: bool,
    /// Merge-eligibility status
    pub merge_status: MergeStatus,
    /// Labels attached to the MR
    #[serde(default)]
    pub labels: Vec<String>,
}

/// Per-MR approval gate snapshot.
///
/// Ephemeral; consumed by the merge step that builds [`ReviewedMergeRequest`].
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct ApprovalStatus {
    /// Approvals the project requires for this MR
    pub approvals_required: i64,
    /// Approvals still missing
    pub approvals_left: i64,
}

/// A merge request enriched with its approval gate and derived blockers
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewedMergeRequest {
    /// The merge request as fetched
    pub mr: MergeRequest,
    /// Approvals the project requires for this MR
    pub approvals_required: i64,
    /// Approvals still missing
    pub approvals_left: i64,
    /// Human-readable reasons this MR cannot be merged right now
    pub blockers: Vec<String>,
}

impl ReviewedMergeRequest {
    /// Whether nothing blocks merging this MR.
    pub fn is_ready(&self) -> bool {
        self.blockers.is_empty()
    }
}

impl fmt::Display for ReviewedMergeRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut fields = vec![
            ("Title:", self.mr.title.clone()),
            ("Author:", self.mr.author.name.clone()),
            ("Branch:", self.mr.source_branch.clone()),
            ("URL:", self.mr.web_url.clone()),
        ];

        if self.mr.draft {
            fields.push(("Draft:", "yes".to_string()));
        }

        if !self.mr.labels.is_empty() {
            fields.push(("Labels:", self.mr.labels.join(", ")));
        }

        if !self.blockers.is_empty() {
            fields.push(("Blockers:", self.blockers.join(", ")));
        }

        let width = fields.iter().map(|field| field.0.len()).max().unwrap_or(0) + 1;

        for (key, value) in &fields {
            writeln!(f, "{key:width$}{value}")?;
        }

        Ok(())
    }
}
