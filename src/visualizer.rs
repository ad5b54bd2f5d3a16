use super::{
    induction::Equilibrium,
    matrix::{PayoffMatrix, PayoffTensor},
    node::{Node, NodeId},
    player::Player,
    reduction::Solution,
    solver::Security,
    tree::GameTree,
};
use std::io::{self, Write};

pub fn print_matrix(matrix: &PayoffMatrix) {
    for i in 0..matrix.rows() {
        print!("  [");
        for (j, value) in matrix.row(i).iter().enumerate() {
            if j + 1 == matrix.cols() {
                print!("{:>6}", value);
            } else {
                print!("{:>6}, ", value);
            }
        }
        println!("]");
    }
}

pub fn print_tensor(tensor: &PayoffTensor) {
    for i in 0..tensor.rows() {
        print!("  [");
        for j in 0..tensor.cols() {
            let cell = format!(
                "({}, {})",
                tensor.of(Player::P1).get(i, j),
                tensor.of(Player::P2).get(i, j)
            );
            if j + 1 == tensor.cols() {
                print!("{:>10}", cell);
            } else {
                print!("{:>10}, ", cell);
            }
        }
        println!("]");
    }
}

pub fn print_solution(label: &str, solution: &Solution) {
    println!(
        "{}: strategy {}, response {}, value {}",
        label, solution.strategy, solution.response, solution.value
    );
}

pub fn print_security(security: &Security) {
    for player in Player::ALL.iter() {
        print_solution(&format!("{:?} maximin", player), security.maximin_of(*player));
        print_solution(&format!("{:?} minimax", player), security.minimax_of(*player));
    }
}

pub fn print_pareto(vectors: &[Vec<f64>], optimal: &[bool]) {
    for (v, is_optimal) in vectors.iter().zip(optimal.iter()) {
        println!(
            "  {:?}: {}",
            v,
            if *is_optimal { "optimal" } else { "dominated" }
        );
    }
}

pub fn print_tree(tree: &GameTree) {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    if let Err(e) = write_tree(tree, &mut out) {
        warn!("failed to print tree: {}", e);
    }
}

/// One line per node in depth-first order, children indented under parents.
pub fn write_tree<W: Write>(tree: &GameTree, out: &mut W) -> io::Result<()> {
    let root = match tree.root() {
        Some(root) => root,
        None => return Ok(()),
    };
    let mut stack: Vec<(NodeId, usize)> = vec![(root, 0)];
    while let Some((node_id, depth)) = stack.pop() {
        write!(out, "{}", "  ".repeat(depth + 1))?;
        match tree.node(node_id) {
            Some(Node::Terminal { payoff }) => writeln!(out, "{} {:?}", node_id, payoff)?,
            Some(Node::Decision { player, children }) => {
                writeln!(out, "{} {:?} moves", node_id, player)?;
                for child_id in children.iter().rev() {
                    stack.push((*child_id, depth + 1));
                }
            }
            None => writeln!(out, "{} ?", node_id)?,
        }
    }
    Ok(())
}

pub fn print_equilibrium(tree: &GameTree, eq: &Equilibrium) {
    println!("outcome: {:?}", eq.outcome);
    println!("path: {:?}", eq.path.iter().map(|a| a.index()).collect::<Vec<_>>());
    for (node_id, action_id) in eq.choices.iter() {
        let player = tree.node(*node_id).and_then(Node::player);
        let history: Vec<usize> = tree.history(*node_id).iter().map(|a| a.index()).collect();
        println!(
            "  {} {:?} at {:?}: action {}",
            node_id, player, history, action_id
        );
    }
    if !eq.ties.is_empty() {
        println!("indifferent at: {:?}", eq.ties);
    }
}
