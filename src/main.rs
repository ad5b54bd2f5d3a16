use argh::FromArgs;
use nash_rs::{games, induction, pareto, solver, visualizer};
use serde::Serialize;
use std::error::Error as StdError;
use std::process::exit;

#[macro_use]
extern crate log;

#[derive(FromArgs)]
/// Solve small two-player games.
struct Args {
    /// print results as json
    #[argh(switch)]
    json: bool,

    #[argh(subcommand)]
    command: Command,
}

#[derive(FromArgs)]
#[argh(subcommand)]
enum Command {
    Matrix(MatrixCmd),
    General(GeneralCmd),
    Check(CheckCmd),
    Pareto(ParetoCmd),
    Tree(TreeCmd),
}

#[derive(FromArgs)]
/// Maximin and minimax of a zero-sum matrix game.
#[argh(subcommand, name = "matrix")]
struct MatrixCmd {
    /// name of the game (three_by_three, four_by_four)
    #[argh(positional)]
    name: String,
}

#[derive(FromArgs)]
/// Maximin and minimax of a general-sum game.
#[argh(subcommand, name = "general")]
struct GeneralCmd {
    /// name of the game (prisoners_dilemma)
    #[argh(positional)]
    name: String,
}

#[derive(FromArgs)]
/// Check whether a strategy pair is a pure Nash equilibrium.
#[argh(subcommand, name = "check")]
struct CheckCmd {
    /// name of the zero-sum game
    #[argh(positional)]
    name: String,
    /// row player's action
    #[argh(positional)]
    s1: usize,
    /// column player's action
    #[argh(positional)]
    s2: usize,
}

#[derive(FromArgs)]
/// Classify outcome vectors as Pareto optimal or dominated.
#[argh(subcommand, name = "pareto")]
struct ParetoCmd {
    /// name of the outcome set (outcomes)
    #[argh(positional)]
    name: String,
}

#[derive(FromArgs)]
/// Subgame-perfect equilibrium of a game tree by backward induction.
#[argh(subcommand, name = "tree")]
struct TreeCmd {
    /// name of the tree (entry)
    #[argh(positional)]
    name: String,
}

fn print_json<T: Serialize>(value: &T) -> Result<(), Box<dyn StdError>> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn run(args: Args) -> Result<(), Box<dyn StdError>> {
    match args.command {
        Command::Matrix(cmd) => {
            let m = games::matrix_from_name(&cmd.name)?;
            let security = solver::analyze(&m);
            if args.json {
                return print_json(&security);
            }
            visualizer::print_matrix(&m);
            visualizer::print_security(&security);
            print!("{}", security.trace);
            println!("pure equilibria: {:?}", solver::pure_equilibria(&m));
        }
        Command::General(cmd) => {
            let t = games::tensor_from_name(&cmd.name)?;
            let security = solver::analyze_general(&t);
            if args.json {
                return print_json(&security);
            }
            visualizer::print_tensor(&t);
            visualizer::print_security(&security);
            print!("{}", security.trace);
        }
        Command::Check(cmd) => {
            let m = games::matrix_from_name(&cmd.name)?;
            let is_ne = solver::verify_nash_equilibrium(&m, cmd.s1, cmd.s2)?;
            if args.json {
                return print_json(&is_ne);
            }
            println!("{}", is_ne);
        }
        Command::Pareto(cmd) => {
            let vectors = games::outcomes_from_name(&cmd.name)?;
            let report = pareto::report(&vectors)?;
            if args.json {
                return print_json(&report);
            }
            visualizer::print_pareto(&vectors, &report);
            print!("{}", report.trace);
        }
        Command::Tree(cmd) => {
            let tree = games::tree_from_name(&cmd.name)?;
            let eq = induction::backward_induction(&tree)?;
            if args.json {
                return print_json(&eq);
            }
            visualizer::print_tree(&tree);
            visualizer::print_equilibrium(&tree, &eq);
            print!("{}", eq.trace);
        }
    }
    Ok(())
}

fn main() {
    env_logger::init();

    trace!("start: main");
    let args: Args = argh::from_env();
    if let Err(e) = run(args) {
        eprintln!("error: {}", e);
        exit(1);
    }
    trace!("finish: main");
}
