//! Mock review API for testing
//!
//! Manually implements `ReviewApi` with configurable responses, call
//! tracking, and error injection.

#![allow(dead_code)]

use async_trait::async_trait;
use mr_radar::error::{Error, Result};
use mr_radar::platform::ReviewApi;
use mr_radar::types::{ApprovalStatus, MergeRequest};
use std::collections::HashMap;
use std::sync::Mutex;

/// Simple mock review API for testing
///
/// Features:
/// - Configurable listing and per-iid approval responses
/// - Call tracking for verification
/// - Error injection (as HTTP statuses) for failure path testing
#[derive(Default)]
pub struct MockReviewApi {
    merge_requests: Mutex<Vec<MergeRequest>>,
    approval_responses: Mutex<HashMap<i64, ApprovalStatus>>,
    // Call tracking
    list_calls: Mutex<Vec<String>>,
    approval_calls: Mutex<Vec<i64>>,
    // Error injection
    error_on_list: Mutex<Option<u16>>,
    error_on_approval: Mutex<HashMap<i64, u16>>,
}

impl MockReviewApi {
    /// Create a mock with no MRs and no configured approvals.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the MRs returned by `list_open_merge_requests`.
    pub fn set_merge_requests(&self, mrs: Vec<MergeRequest>) {
        *self.merge_requests.lock().unwrap() = mrs;
    }

    /// Set the approval status returned for one iid.
    pub fn set_approval(&self, iid: i64, status: ApprovalStatus) {
        self.approval_responses.lock().unwrap().insert(iid, status);
    }

    /// Make `list_open_merge_requests` fail with the given HTTP status.
    pub fn fail_list(&self, status: u16) {
        *self.error_on_list.lock().unwrap() = Some(status);
    }

    /// Make `approval_status` for one iid fail with the given HTTP status.
    pub fn fail_approval_for(&self, iid: i64, status: u16) {
        self.error_on_approval.lock().unwrap().insert(iid, status);
    }

    /// Branches `list_open_merge_requests` was called with.
    pub fn list_calls(&self) -> Vec<String> {
        self.list_calls.lock().unwrap().clone()
    }

    /// Iids `approval_status` was called with, in call order.
    pub fn approval_calls(&self) -> Vec<i64> {
        self.approval_calls.lock().unwrap().clone()
    }

    /// Assert `approval_status` was called exactly once per expected iid,
    /// in any order.
    pub fn assert_approvals_called_for(&self, expected: &[i64]) {
        let mut calls = self.approval_calls();
        calls.sort_unstable();
        let mut expected: Vec<i64> = expected.to_vec();
        expected.sort_unstable();
        assert_eq!(calls, expected, "approval calls mismatch");
    }
}

#[async_trait]
impl ReviewApi for MockReviewApi {
    async fn list_open_merge_requests(&self, target_branch: &str) -> Result<Vec<MergeRequest>> {
        self.list_calls
            .lock()
            .unwrap()
            .push(target_branch.to_string());

        if let Some(status) = *self.error_on_list.lock().unwrap() {
            return Err(Error::Http { status });
        }

        Ok(self.merge_requests.lock().unwrap().clone())
    }

    async fn approval_status(&self, iid: i64) -> Result<ApprovalStatus> {
        self.approval_calls.lock().unwrap().push(iid);

        if let Some(status) = self.error_on_approval.lock().unwrap().get(&iid) {
            return Err(Error::Http { status: *status });
        }

        Ok(self
            .approval_responses
            .lock()
            .unwrap()
            .get(&iid)
            .copied()
            .unwrap_or(ApprovalStatus {
                approvals_required: 0,
                approvals_left: 0,
            }))
    }
}
