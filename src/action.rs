use serde::{Deserialize, Serialize};
use std::fmt;

/// Index into a player's action set, or a child position in a game tree.
#[derive(Clone, Copy, Deserialize, Serialize, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct ActionId(usize);

impl ActionId {
    pub fn new(id: usize) -> Self {
        ActionId(id)
    }

    pub fn index(&self) -> usize {
        self.0
    }
}

impl From<usize> for ActionId {
    fn from(id: usize) -> Self {
        ActionId(id)
    }
}

impl fmt::Display for ActionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
