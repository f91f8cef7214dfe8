//! The budgeting pipeline: resolve the month's budget, evaluate category
//! spending against it, and derive long-run recommendations.
//!
//! All three stages are pure functions over the collections they are given;
//! persistence and re-invocation timing belong to the caller.

pub mod advisor;
pub mod evaluator;
pub mod resolver;

pub use advisor::{recommend, LOWER_CAP_RATIO, RAISE_CAP_RATIO};
pub use evaluator::{evaluate, evaluate_overall, CategoryStatus, Severity, WARNING_RATIO};
pub use resolver::resolve;
