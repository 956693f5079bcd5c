use thiserror::Error;

/// Errors raised while assembling trees from flat records.
///
/// The query operations on [`Tree`](crate::tree::Tree) are pure and
/// infallible; only construction through the builder can go wrong.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TreeError {
    #[error("duplicate node id: {0}")]
    DuplicateNode(String),

    #[error("unknown node id: {0}")]
    UnknownNode(String),

    #[error("node {child} already has parent {parent}")]
    MultipleParents { child: String, parent: String },

    #[error("cycle detected in hierarchy at: {0}")]
    CycleDetected(String),
}

pub type TreeResult<T> = Result<T, TreeError>;
