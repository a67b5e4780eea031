use serde::{Deserialize, Serialize};

/// Single failing value in a check report.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CheckFailure {
    pub path: String,
    pub kind: String,
    pub message: String,
}

/// Report produced by checking every input value against one constraint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CheckReport {
    pub label: Option<String>,
    /// Seed of the random traversal modes, when the run was seeded.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    pub matched: bool,
    pub checked_count: usize,
    pub failure_count: usize,
    pub failures: Vec<CheckFailure>,
}

impl CheckReport {
    pub fn new(label: Option<String>, checked_count: usize, failures: Vec<CheckFailure>) -> Self {
        Self {
            label,
            seed: None,
            matched: failures.is_empty(),
            checked_count,
            failure_count: failures.len(),
            failures,
        }
    }
}

/// Rendered constraint for the `describe` command.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DescribeReport {
    #[serde(rename = "type")]
    pub value_type: String,
    pub description: Option<String>,
    pub note: Option<String>,
    pub bad_name: Option<String>,
}
