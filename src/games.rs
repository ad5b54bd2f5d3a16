//! Small named games used by the binaries and the tests.

use super::{
    error::{Error, Result},
    matrix::{PayoffMatrix, PayoffTensor},
    player::Player,
    tree::GameTree,
};

pub const ZERO_SUM: [&str; 2] = ["three_by_three", "four_by_four"];
pub const GENERAL_SUM: [&str; 1] = ["prisoners_dilemma"];
pub const OUTCOMES: [&str; 1] = ["outcomes"];
pub const TREES: [&str; 1] = ["entry"];

fn unknown(name: &str) -> Error {
    Error::UnknownGame {
        name: String::from(name),
    }
}

pub fn matrix_from_name(name: &str) -> Result<PayoffMatrix> {
    match name {
        "three_by_three" => PayoffMatrix::new(vec![
            vec![12.0, -1.0, 0.0],
            vec![5.0, 2.0, 3.0],
            vec![-16.0, 0.0, -1.0],
        ]),
        "four_by_four" => PayoffMatrix::new(vec![
            vec![4.0, 3.0, 2.0, 5.0],
            vec![-10.0, 2.0, 0.0, -1.0],
            vec![7.0, 5.0, 1.0, 3.0],
            vec![0.0, 8.0, -4.0, 5.0],
        ]),
        _ => Err(unknown(name)),
    }
}

pub fn tensor_from_name(name: &str) -> Result<PayoffTensor> {
    match name {
        // Payoffs are rewards: (confess, confess) is the mutual defection cell.
        "prisoners_dilemma" => PayoffTensor::new(vec![
            vec![vec![5.0, 0.0], vec![10.0, 3.0]],
            vec![vec![5.0, 10.0], vec![0.0, 3.0]],
        ]),
        _ => Err(unknown(name)),
    }
}

pub fn outcomes_from_name(name: &str) -> Result<Vec<Vec<f64>>> {
    match name {
        "outcomes" => Ok(vec![
            vec![5.0, 5.0],
            vec![1.0, 10.0],
            vec![10.0, 1.0],
            vec![3.0, 3.0],
        ]),
        _ => Err(unknown(name)),
    }
}

pub fn tree_from_name(name: &str) -> Result<GameTree> {
    match name {
        "entry" => entry(),
        _ => Err(unknown(name)),
    }
}

/// P1 moves first, P2 observes and answers; four terminal outcomes.
fn entry() -> Result<GameTree> {
    let mut tree = GameTree::new();
    let root = tree.add_decision(Player::P1);
    let left = tree.add_decision(Player::P2);
    let right = tree.add_decision(Player::P2);
    tree.append(root, left)?;
    tree.append(root, right)?;
    for payoff in vec![vec![3.0, 1.0], vec![1.0, 0.0]] {
        let leaf = tree.add_terminal(payoff);
        tree.append(left, leaf)?;
    }
    for payoff in vec![vec![0.0, 0.0], vec![2.0, 2.0]] {
        let leaf = tree.add_terminal(payoff);
        tree.append(right, leaf)?;
    }
    Ok(tree)
}
