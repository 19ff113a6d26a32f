//! Review-queue orchestration

use crate::config::Config;
use crate::error::{Error, Result};
use crate::platform::ReviewApi;
use crate::review::{derive_blockers, filter_by_authors};
use crate::types::{ApprovalStatus, MergeRequest, ReviewedMergeRequest};
use futures::stream::{self, StreamExt, TryStreamExt};
use std::collections::HashMap;
use tracing::debug;

/// Fetch, filter, and enrich the project's open merge requests.
///
/// One pass: list open MRs against the configured target branch, drop MRs
/// from unconfigured authors, then fetch every approval gate concurrently.
/// All-or-nothing: the first failed request aborts the run and no partial
/// queue is returned. The result preserves the order the API listed.
pub async fn fetch_review_queue(
    api: &dyn ReviewApi,
    config: &Config,
) -> Result<Vec<ReviewedMergeRequest>> {
    let mrs = api.list_open_merge_requests(&config.target_branch).await?;
    debug!(count = mrs.len(), "fetched open merge requests");

    let mrs = filter_by_authors(mrs, &config.author_ids());
    debug!(count = mrs.len(), "merge requests after author filter");

    enrich_with_approvals(api, mrs, config.concurrency).await
}

/// Fetch every MR's approval gate concurrently and merge the results back in.
///
/// Enrichment requests all start together (capped at `concurrency` in flight
/// when set) and are joined as a single barrier; completion order is
/// irrelevant because the merge step is keyed by `iid`.
async fn enrich_with_approvals(
    api: &dyn ReviewApi,
    mrs: Vec<MergeRequest>,
    concurrency: Option<usize>,
) -> Result<Vec<ReviewedMergeRequest>> {
    let iids: Vec<i64> = mrs.iter().map(|mr| mr.iid).collect();
    let limit = concurrency.unwrap_or(iids.len()).max(1);

    let statuses: Vec<(i64, ApprovalStatus)> = stream::iter(iids)
        .map(|iid| async move { api.approval_status(iid).await.map(|status| (iid, status)) })
        .buffer_unordered(limit)
        .try_collect()
        .await?;

    merge_approvals(mrs, statuses)
}

/// Pure merge step: pair each MR with its approval status by `iid` and derive
/// its blockers. Preserves the order of `mrs`.
fn merge_approvals(
    mrs: Vec<MergeRequest>,
    statuses: Vec<(i64, ApprovalStatus)>,
) -> Result<Vec<ReviewedMergeRequest>> {
    let mut by_iid: HashMap<i64, ApprovalStatus> = statuses.into_iter().collect();

    mrs.into_iter()
        .map(|mr| {
            let status = by_iid.remove(&mr.iid).ok_or_else(|| {
                Error::Internal(format!("no approval status for merge request !{}", mr.iid))
            })?;

            let blockers = derive_blockers(&mr, status.approvals_left);
            Ok(ReviewedMergeRequest {
                mr,
                approvals_required: status.approvals_required,
                approvals_left: status.approvals_left,
                blockers,
            })
        })
        .collect()
}
