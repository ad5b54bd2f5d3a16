use super::matrix::Axis;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Deserialize, Serialize, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub enum Player {
    P1,
    P2,
}

impl Player {
    pub const ALL: [Player; 2] = [Player::P1, Player::P2];

    pub fn from_index(index: usize) -> Option<Player> {
        match index {
            0 => Some(Player::P1),
            1 => Some(Player::P2),
            _ => None,
        }
    }

    /// Position of this player's entry in an outcome vector.
    pub fn index(&self) -> usize {
        match self {
            Player::P1 => 0,
            Player::P2 => 1,
        }
    }

    pub fn opponent(&self) -> Player {
        match self {
            Player::P1 => Player::P2,
            Player::P2 => Player::P1,
        }
    }

    pub fn sign(&self) -> f64 {
        match self {
            Player::P1 => 1.0,
            Player::P2 => -1.0,
        }
    }

    /// The axis of the payoff matrix indexed by this player's own actions.
    pub fn axis(&self) -> Axis {
        match self {
            Player::P1 => Axis::Row,
            Player::P2 => Axis::Column,
        }
    }
}
