use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GraphError {
    #[error("behavior graph has no nodes")]
    Empty,

    #[error("root node {0:?} was never registered")]
    MissingRoot(String),

    #[error("node key {0:?} registered twice")]
    DuplicateNode(String),

    #[error("move {key:?} is invalid: {reason}")]
    InvalidMove { key: String, reason: String },

    #[error("traversal step cap must be at least 1")]
    ZeroStepCap,

    #[error("graph has too many nodes ({0})")]
    TooManyNodes(usize),
}

pub type GraphResult<T> = Result<T, GraphError>;
