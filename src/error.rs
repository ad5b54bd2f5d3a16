//! Error types shared by every solver in the crate.

use super::{node::NodeId, player::Player};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum Error {
    #[error("shape error: {message}")]
    Shape { message: String },

    #[error("payoff at row {row}, column {column} is not finite")]
    NonFinite { row: usize, column: usize },

    #[error("strategy {index} of {player:?} is out of range (must be < {bound})")]
    Index {
        player: Player,
        index: usize,
        bound: usize,
    },

    #[error("invalid tree at node {node:?} (history {history:?}): {message}")]
    TreeStructure {
        node: NodeId,
        history: Vec<usize>,
        message: String,
    },

    #[error("unknown game '{name}'")]
    UnknownGame { name: String },
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub(crate) fn shape(message: impl Into<String>) -> Self {
        Error::Shape {
            message: message.into(),
        }
    }
}
