//! Extensive-form games with perfect information, stored as an arena.
//!
//! Nodes live in a flat table addressed by [`NodeId`]. Every node has at
//! most one parent, and [`GameTree::append`] refuses edges that would share
//! a node or close a cycle, so the table always describes a forest.
//!
//! # Example
//! ```
//! use nash_rs::{player::Player, tree::GameTree};
//! let mut tree = GameTree::new();
//! let root = tree.add_decision(Player::P1);
//! let left = tree.add_terminal(vec![1.0, 0.0]);
//! let right = tree.add_terminal(vec![0.0, 1.0]);
//! tree.append(root, left).unwrap();
//! tree.append(root, right).unwrap();
//! assert_eq!(tree.root(), Some(root));
//! ```

use super::{
    action::ActionId,
    error::{Error, Result},
    node::{Node, NodeId, Payoff},
    player::Player,
};
use serde::Serialize;
use std::collections::VecDeque;

#[derive(Clone, Default, Serialize, Debug)]
pub struct GameTree {
    nodes: Vec<Node>,
    #[serde(skip)]
    parents: Vec<Option<NodeId>>,
    root: Option<NodeId>,
}

impl GameTree {
    pub fn new() -> Self {
        Default::default()
    }

    /// Number of entries in an outcome vector.
    pub fn num_players(&self) -> usize {
        Player::ALL.len()
    }

    pub fn add_terminal(&mut self, payoff: Payoff) -> NodeId {
        self.push(Node::Terminal { payoff })
    }

    pub fn add_decision(&mut self, player: Player) -> NodeId {
        self.push(Node::Decision {
            player,
            children: Vec::new(),
        })
    }

    fn push(&mut self, node: Node) -> NodeId {
        let id = NodeId::new(self.nodes.len());
        self.nodes.push(node);
        self.parents.push(None);
        id
    }

    /// Make `child` the next action of `parent` and return its action index.
    pub fn append(&mut self, parent: NodeId, child: NodeId) -> Result<ActionId> {
        self.check_known(parent)?;
        self.check_known(child)?;
        if let Some(owner) = self.parents[child.index()] {
            return Err(self.structure_error(
                child,
                format!("already a child of {}", owner),
            ));
        }
        let mut ancestor = Some(parent);
        while let Some(id) = ancestor {
            if id == child {
                return Err(self.structure_error(
                    parent,
                    format!("appending {} would create a cycle", child),
                ));
            }
            ancestor = self.parents[id.index()];
        }

        let action = match &mut self.nodes[parent.index()] {
            Node::Terminal { .. } => None,
            Node::Decision { children, .. } => {
                children.push(child);
                Some(ActionId::new(children.len() - 1))
            }
        };
        match action {
            Some(action) => {
                self.parents[child.index()] = Some(parent);
                Ok(action)
            }
            None => Err(self.structure_error(parent, "terminal node cannot have children")),
        }
    }

    pub fn set_root(&mut self, root: NodeId) -> Result<()> {
        self.check_known(root)?;
        self.root = Some(root);
        Ok(())
    }

    /// The explicitly set root, or else the first node without a parent.
    pub fn root(&self) -> Option<NodeId> {
        self.root.or_else(|| {
            self.parents
                .iter()
                .position(Option::is_none)
                .map(NodeId::new)
        })
    }

    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.index())
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.parents.get(id.index()).copied().flatten()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// The parent's action that leads to `id`.
    pub fn action_to(&self, id: NodeId) -> Option<ActionId> {
        let parent = self.parent(id)?;
        self.nodes[parent.index()]
            .children()
            .iter()
            .position(|child| *child == id)
            .map(ActionId::new)
    }

    /// Actions taken from the top of the tree down to `id`.
    pub fn history(&self, id: NodeId) -> Vec<ActionId> {
        let mut actions = Vec::new();
        let mut current = id;
        while let Some(parent) = self.parent(current) {
            if let Some(action) = self.action_to(current) {
                actions.push(action);
            }
            current = parent;
        }
        actions.reverse();
        actions
    }

    /// Nodes of the subtree under `from`, parents before children.
    pub fn bfs_ord(&self, from: NodeId) -> Vec<NodeId> {
        let mut ord: Vec<NodeId> = Vec::new();
        let mut que: VecDeque<NodeId> = VecDeque::new();
        if self.node(from).is_none() {
            return ord;
        }
        que.push_back(from);
        while let Some(node_id) = que.pop_front() {
            ord.push(node_id);
            for child_id in self.nodes[node_id.index()].children() {
                que.push_back(*child_id);
            }
        }
        ord
    }

    pub(crate) fn check_known(&self, id: NodeId) -> Result<()> {
        if self.node(id).is_none() {
            return Err(Error::TreeStructure {
                node: id,
                history: Vec::new(),
                message: format!("unknown node (tree has {} nodes)", self.nodes.len()),
            });
        }
        Ok(())
    }

    pub(crate) fn structure_error(&self, id: NodeId, message: impl Into<String>) -> Error {
        Error::TreeStructure {
            node: id,
            history: self.history(id).iter().map(ActionId::index).collect(),
            message: message.into(),
        }
    }
}
