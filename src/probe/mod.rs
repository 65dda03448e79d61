//! Typed run plan and the sequential timing loop.
mod plan;
mod runner;


pub use plan::{JSON_CONTENT_TYPE, ProbePlan};
pub use runner::{ProbeOutcome, run_probe};
