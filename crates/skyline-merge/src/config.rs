use serde::{Deserialize, Serialize};

/// How the reduction tree is evaluated.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnionStrategy {
    /// Resolve both halves on the calling thread.
    #[default]
    Sequential,
    /// Resolve large halves concurrently on the rayon pool.
    Parallel,
}

/// Configuration for the [`UnionEngine`](crate::UnionEngine).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UnionConfig {
    /// Evaluation strategy for the reduction tree.
    pub strategy: UnionStrategy,
    /// Smallest sub-list that is split across threads under
    /// [`UnionStrategy::Parallel`]. Smaller sub-lists are resolved
    /// sequentially.
    pub parallel_threshold: usize,
}

impl Default for UnionConfig {
    fn default() -> Self {
        Self {
            strategy: UnionStrategy::Sequential,
            parallel_threshold: 64,
        }
    }
}

impl UnionConfig {
    /// A parallel configuration with the default threshold.
    pub fn parallel() -> Self {
        Self {
            strategy: UnionStrategy::Parallel,
            ..Default::default()
        }
    }
}
