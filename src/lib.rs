//! mr-radar: readiness radar for a GitLab project's open merge requests
//!
//! Polls the project's open merge requests against a target branch, enriches
//! each with its approval gate, derives human-readable blockers, and renders
//! a grouped ready/blocked report.

pub mod config;
pub mod error;
pub mod platform;
pub mod report;
pub mod review;
pub mod types;

pub use config::Config;
pub use error::{Error, Result};
pub use platform::{GitLabClient, ReviewApi};
pub use report::Report;
pub use review::fetch_review_queue;
