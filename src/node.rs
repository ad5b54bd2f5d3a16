use super::player::Player;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Clone, Copy, Deserialize, Serialize, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct NodeId(usize);

impl NodeId {
    pub fn new(id: usize) -> Self {
        NodeId(id)
    }

    pub fn index(&self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Outcome vector: one payoff per player, indexed by [`Player::index`].
pub type Payoff = Vec<f64>;

#[derive(Clone, Serialize, Deserialize, PartialEq, Debug)]
pub enum Node {
    Terminal {
        payoff: Payoff,
    },
    Decision {
        player: Player,
        children: Vec<NodeId>,
    },
}

impl Node {
    pub fn is_terminal(&self) -> bool {
        match self {
            Node::Terminal { .. } => true,
            Node::Decision { .. } => false,
        }
    }

    pub fn player(&self) -> Option<Player> {
        match self {
            Node::Terminal { .. } => None,
            Node::Decision { player, .. } => Some(*player),
        }
    }

    pub fn children(&self) -> &[NodeId] {
        match self {
            Node::Terminal { .. } => &[],
            Node::Decision { children, .. } => children,
        }
    }
}
