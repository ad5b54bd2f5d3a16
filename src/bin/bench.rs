extern crate nash_rs;
#[macro_use]
extern crate log;

use indicatif::ProgressIterator;
use nash_rs::*;
use std::time::Instant;

macro_rules! time {
    ($x:expr) => {{
        let start = Instant::now();
        $x;
        let end = start.elapsed();
        end.as_nanos() as f64 / 1_000_000_000 as f64
    }};
}

/// A complete binary tree of the given depth with alternating movers.
fn binary_tree(depth: usize) -> Result<tree::GameTree> {
    fn grow(t: &mut tree::GameTree, depth: usize, seed: &mut u64) -> Result<node::NodeId> {
        if depth == 0 {
            *seed = seed.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
            let a = (*seed >> 33) % 100;
            let b = (*seed >> 17) % 100;
            return Ok(t.add_terminal(vec![a as f64, b as f64]));
        }
        let mover = if depth % 2 == 0 {
            player::Player::P2
        } else {
            player::Player::P1
        };
        let id = t.add_decision(mover);
        for _ in 0..2 {
            let child = grow(t, depth - 1, seed)?;
            t.append(id, child)?;
        }
        Ok(id)
    }
    let mut t = tree::GameTree::new();
    let mut seed = 42;
    let root = grow(&mut t, depth, &mut seed)?;
    t.set_root(root)?;
    Ok(t)
}

fn main() -> Result<()> {
    env_logger::init();

    let depth = std::env::args()
        .nth(1)
        .and_then(|s| s.parse::<usize>().ok())
        .unwrap_or(16);
    let run = std::env::args()
        .nth(2)
        .and_then(|s| s.parse::<usize>().ok())
        .unwrap_or(10);

    let t = binary_tree(depth)?;
    info!("tree with {} nodes", t.len());

    let mut nanos: Vec<f64> = Vec::new();
    for _ in (0..run).progress() {
        nanos.push(time!({ induction::backward_induction(&t)? }));
    }

    let avg = nanos.iter().sum::<f64>() / nanos.len() as f64;
    let std = (nanos
        .iter()
        .map(|d| d - avg)
        .map(|d| d * d)
        .sum::<f64>()
        / nanos.len() as f64)
        .sqrt();

    dbg!(avg);
    dbg!(std);
    Ok(())
}
