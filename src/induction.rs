//! Subgame-perfect equilibrium by backward induction.
//!
//! Every decision node is resolved after all of its children: the acting
//! player takes the child whose outcome vector is best in its own
//! coordinate, and that vector is passed up unchanged. Ties go to the lowest
//! child index. Only that one equilibrium is produced; nodes where the
//! acting player was indifferent are listed in [`Equilibrium::ties`].
//!
//! # Example
//! ```
//! use nash_rs::*;
//! let tree = games::tree_from_name("entry").unwrap();
//! let eq = induction::backward_induction(&tree).unwrap();
//! assert_eq!(eq.outcome, vec![3.0, 1.0]);
//! ```

use super::{
    action::ActionId,
    error::{Error, Result},
    node::{Node, NodeId, Payoff},
    reduction::{argext, Extremum},
    strategy::Strategy,
    trace::{Trace, Traced},
    tree::GameTree,
};
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Clone, Serialize, PartialEq, Debug)]
pub struct Equilibrium {
    /// Node the subgame was solved from.
    pub root: NodeId,
    /// Outcome vector reached when every player follows `choices`.
    pub outcome: Payoff,
    /// The child chosen at every decision node of the subgame.
    pub choices: Strategy,
    /// Resolved outcome vector of every node in the subgame.
    pub resolved: BTreeMap<NodeId, Payoff>,
    /// Actions along the equilibrium path from `root`.
    pub path: Vec<ActionId>,
    /// Decision nodes where more than one child was optimal.
    pub ties: Vec<NodeId>,
}

/// Solve the whole tree from its root.
pub fn backward_induction(tree: &GameTree) -> Result<Traced<Equilibrium>> {
    match tree.root() {
        Some(root) => solve_subgame(tree, root),
        None => Err(Error::TreeStructure {
            node: NodeId::new(0),
            history: Vec::new(),
            message: String::from("tree has no root"),
        }),
    }
}

/// Solve the subgame rooted at `root`.
pub fn solve_subgame(tree: &GameTree, root: NodeId) -> Result<Traced<Equilibrium>> {
    trace!("start: solve_subgame from {}", root);
    tree.check_known(root)?;

    let mut trace = Trace::new();
    let mut resolved: BTreeMap<NodeId, Payoff> = BTreeMap::new();
    let mut choices = Strategy::new();
    let mut ties: Vec<NodeId> = Vec::new();

    for node_id in tree.bfs_ord(root).iter().rev() {
        let node = match tree.node(*node_id) {
            Some(node) => node,
            None => return Err(tree.structure_error(*node_id, "dangling child reference")),
        };
        match node {
            Node::Terminal { payoff } => {
                if payoff.len() != tree.num_players() {
                    return Err(tree.structure_error(
                        *node_id,
                        format!(
                            "terminal payoff has {} entries, expected {}",
                            payoff.len(),
                            tree.num_players()
                        ),
                    ));
                }
                if payoff.iter().any(|v| !v.is_finite()) {
                    return Err(tree.structure_error(*node_id, "terminal payoff is not finite"));
                }
                resolved.insert(*node_id, payoff.clone());
            }
            Node::Decision { player, children } => {
                if children.is_empty() {
                    return Err(tree.structure_error(
                        *node_id,
                        format!("{:?} acts here but there are no actions", player),
                    ));
                }
                let me = player.index();
                let (best, value) =
                    argext(children.len(), Extremum::Max, |i| resolved[&children[i]][me]);
                if children
                    .iter()
                    .filter(|child| resolved[*child][me] == value)
                    .count()
                    > 1
                {
                    ties.push(*node_id);
                }
                let outcome = resolved[&children[best]].clone();
                let reached_by = match tree.action_to(*node_id) {
                    Some(action) => format!(" after action {}", action),
                    None => String::new(),
                };
                trace.push(format!(
                    "{:?} chose action {} at {}{}, for outcome {:?}",
                    player, best, node_id, reached_by, outcome
                ));
                choices.insert(*node_id, ActionId::new(best));
                resolved.insert(*node_id, outcome);
            }
        }
    }
    debug!("resolved: {:?}", resolved);
    debug!("choices: {:?}", choices);

    let path = equilibrium_path(tree, root, &choices);
    let outcome = resolved[&root].clone();
    trace.push(format!("subgame perfect equilibrium outcome: {:?}", outcome));
    ties.sort();
    trace!("finish: solve_subgame from {}", root);

    Ok(Traced::new(
        Equilibrium {
            root,
            outcome,
            choices,
            resolved,
            path,
            ties,
        },
        trace,
    ))
}

fn equilibrium_path(tree: &GameTree, root: NodeId, choices: &Strategy) -> Vec<ActionId> {
    let mut path = Vec::new();
    let mut current = root;
    while let Some(action) = choices.get(&current) {
        path.push(*action);
        match tree
            .node(current)
            .and_then(|node| node.children().get(action.index()))
        {
            Some(child) => current = *child,
            None => break,
        }
    }
    path
}
