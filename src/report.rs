//! Report grouping and formatting

use crate::types::ReviewedMergeRequest;

/// Section header for MRs with no blockers.
const READY_HEADER: &str = "Ready to Merge";

/// Section header for MRs with at least one blocker.
const BLOCKED_HEADER: &str = "Blocked";

/// The grouped run report
#[derive(Debug, Clone)]
pub struct Report {
    /// Branch the reported MRs target
    pub target_branch: String,
    /// MRs with no blockers, in fetch order
    pub ready: Vec<ReviewedMergeRequest>,
    /// MRs with at least one blocker, in fetch order
    pub blocked: Vec<ReviewedMergeRequest>,
}

impl Report {
    /// Partition the review queue into ready and blocked buckets.
    ///
    /// Every item lands in exactly one bucket; relative order within each
    /// bucket matches the input.
    pub fn build(target_branch: &str, items: Vec<ReviewedMergeRequest>) -> Self {
        let (ready, blocked) = items
            .into_iter()
            .partition(ReviewedMergeRequest::is_ready);

        Self {
            target_branch: target_branch.to_string(),
            ready,
            blocked,
        }
    }

    /// Render the report as Markdown-like text.
    ///
    /// Empty buckets produce no section, so a fully ready queue has no
    /// "Blocked" header at all (and vice versa).
    pub fn render(&self) -> String {
        let mut output = format!("*Open MRs against {}:*\n\n", self.target_branch);

        if !self.ready.is_empty() {
            output.push_str(&format_section(READY_HEADER, &self.ready));
        }

        if !self.blocked.is_empty() {
            output.push_str(&format_section(BLOCKED_HEADER, &self.blocked));
        }

        output
    }
}

/// Format one report section: a header line and a bullet per MR, with nested
/// bullets for labels and blockers when present.
pub fn format_section(header: &str, items: &[ReviewedMergeRequest]) -> String {
    let mut output = format!("* *{header}*\n");

    for item in items {
        output.push_str(&format!(
            "    * [{}]({}) ({})\n",
            item.mr.title, item.mr.web_url, item.mr.author.username
        ));

        if !item.mr.labels.is_empty() {
            output.push_str(&format!("        * Labels: {}\n", item.mr.labels.join(", ")));
        }

        if !item.blockers.is_empty() {
            output.push_str(&format!("        * {}\n", item.blockers.join(", ")));
        }
    }

    output
}
