//! Solution concepts for finite two-player games.
//!
//! Security values (maximin / minimax) and pure Nash-equilibrium checks for
//! matrix games, Pareto optimality of outcome vectors, and subgame-perfect
//! equilibria of perfect-information game trees by backward induction.
//! # Example
//! ```
//! use nash_rs::*;
//! let pd = games::tensor_from_name("prisoners_dilemma").unwrap();
//! let p1 = solver::general_maximin(&pd, player::Player::P1);
//! assert_eq!(p1.strategy.index(), 1);
//! assert!(solver::verify_general_equilibrium(&pd, 1, 1).unwrap());
//! ```
#[macro_use]
extern crate log;

pub mod action;
pub mod error;
pub mod matrix;
pub mod node;
pub mod player;
pub mod strategy;
pub mod trace;
pub mod tree;

pub mod games;
pub mod induction;
pub mod pareto;
pub mod reduction;
pub mod solver;
pub mod visualizer;

pub use error::{Error, Result};
