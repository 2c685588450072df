// src/roster/models.rs
use serde::Serialize;

use crate::utils::error::AppError;

/// A single member recovered from the roster text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MemberRecord {
    pub name: String,
    pub age: u32,
}

/// Ascending age breakpoints partitioning members into groups.
///
/// Breakpoints `[32, 47, 67]` produce four groups:
/// `(-inf, 32]`, `(32, 47]`, `(47, 67]` and the overflow group `(67, +inf)`.
/// The set is fixed for a run and never derived from the data.
#[derive(Debug, Clone)]
pub struct AgeBrackets {
    breakpoints: Vec<u32>,
}

impl AgeBrackets {
    pub fn new(breakpoints: Vec<u32>) -> Result<Self, AppError> {
        if breakpoints.is_empty() {
            return Err(AppError::Config(
                "at least one age breakpoint is required".to_string(),
            ));
        }
        if !breakpoints.windows(2).all(|pair| pair[0] < pair[1]) {
            return Err(AppError::Config(format!(
                "age breakpoints must be strictly ascending, got {:?}",
                breakpoints
            )));
        }
        Ok(Self { breakpoints })
    }

    /// Number of groups, overflow group included.
    pub fn group_count(&self) -> usize {
        self.breakpoints.len() + 1
    }

    /// Index of the group a given age falls into: the first breakpoint the
    /// age does not exceed, or the overflow index past all breakpoints.
    /// Linear scan; the breakpoint list is tiny.
    pub fn index_for_age(&self, age: u32) -> usize {
        self.breakpoints
            .iter()
            .position(|&limit| age <= limit)
            .unwrap_or(self.breakpoints.len())
    }

    /// Human-readable label per group, overflow last.
    pub fn labels(&self) -> Vec<String> {
        let mut labels: Vec<String> = self
            .breakpoints
            .iter()
            .map(|limit| format!("Members <= {}", limit))
            .collect();
        if let Some(last) = self.breakpoints.last() {
            labels.push(format!("Members > {}", last));
        }
        labels
    }
}

/// Members grouped by age bracket, overflow bucket last. Built once by the
/// extractor, then handed to the sampler.
#[derive(Debug)]
pub struct BracketedRoster {
    buckets: Vec<Vec<MemberRecord>>,
}

impl BracketedRoster {
    pub fn new(brackets: &AgeBrackets) -> Self {
        Self {
            buckets: vec![Vec::new(); brackets.group_count()],
        }
    }

    pub fn push(&mut self, bracket_index: usize, record: MemberRecord) {
        self.buckets[bracket_index].push(record);
    }

    /// Grand total across all brackets.
    pub fn total(&self) -> usize {
        self.buckets.iter().map(Vec::len).sum()
    }

    pub fn into_buckets(self) -> Vec<Vec<MemberRecord>> {
        self.buckets
    }
}
