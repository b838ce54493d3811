use thiserror::Error;

/// Errors reported by the checked tree operations. The plain operations
/// ([`Tree::remove`][crate::Tree::remove], [`Tree::lookup`][crate::Tree::lookup],
/// [`Tree::find_lca`][crate::Tree::find_lca]) never fail; they treat a missing key as a no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TreeError {
    /// No node in the tree holds the requested key.
    #[error("key not found in tree")]
    NotFound,

    /// A rank query asked for a position the tree doesn't have. Ranks are 1-indexed.
    #[error("rank {k} is out of range for a tree of {len} keys")]
    RankOutOfRange {
        /// The requested rank.
        k: usize,
        /// How many keys the tree held.
        len: usize,
    },
}
