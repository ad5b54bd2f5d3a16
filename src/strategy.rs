use super::{
    action::ActionId,
    error::Result,
    node::{Node, NodeId, Payoff},
    player::Player,
    tree::GameTree,
};
use std::collections::BTreeMap;

/// A pure behavioural strategy: the action taken at each decision node.
pub type Strategy = BTreeMap<NodeId, ActionId>;

pub type Profile = BTreeMap<Player, Strategy>;

/// Split a table of choices by the player acting at each node.
pub fn profile(tree: &GameTree, choices: &Strategy) -> Profile {
    let mut prof: Profile = Player::ALL.iter().map(|p| (*p, Strategy::new())).collect();
    for (node_id, action_id) in choices.iter() {
        if let Some(player) = tree.node(*node_id).and_then(Node::player) {
            prof.entry(player).or_default().insert(*node_id, *action_id);
        }
    }
    prof
}

/// Play `choices` from `from` and return the outcome vector reached.
pub fn outcome(tree: &GameTree, from: NodeId, choices: &Strategy) -> Result<Payoff> {
    tree.check_known(from)?;
    let mut current = from;
    loop {
        match tree.node(current) {
            Some(Node::Terminal { payoff }) => return Ok(payoff.clone()),
            Some(Node::Decision { children, .. }) => {
                let action = choices.get(&current).ok_or_else(|| {
                    tree.structure_error(current, "no action chosen at decision node")
                })?;
                current = *children.get(action.index()).ok_or_else(|| {
                    tree.structure_error(
                        current,
                        format!("action {} out of {} actions", action, children.len()),
                    )
                })?;
            }
            None => return Err(tree.structure_error(current, "dangling child reference")),
        }
    }
}
