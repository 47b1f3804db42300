use anyhow::{bail, Context, Result};
use clap::Parser;
use log::info;
use tile_solver::{samples::sample_boards, solve_with, Board, ExpansionPolicy, SolveError, Strategy};

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Ordering to search with: 1|uniform, 2|misplaced, 3|manhattan.
    /// Repeat to run several; all three run when omitted.
    #[clap(short, long = "strategy")]
    strategies: Vec<Strategy>,

    /// Expand boards the way the original tool did (a board may be expanded twice)
    #[clap(long)]
    reference: bool,

    /// Reject boards with the wrong permutation parity instead of searching them
    #[clap(long)]
    check_parity: bool,

    /// Log search progress
    #[clap(short, long)]
    verbose: bool,

    /// Boards in row-major order, e.g. "1 2 3 4 5 6 0 7 8".
    /// The built-in samples are solved when none are given.
    puzzles: Vec<String>,
}

#[auto_enums::auto_enum(Iterator)]
fn puzzles(args: &[String]) -> impl Iterator<Item = Result<Board>> + '_ {
    if args.is_empty() {
        sample_boards().map(|sample| {
            sample
                .map(|(board, _)| board)
                .context("built-in sample is malformed")
        })
    } else {
        args.iter()
            .map(|s| s.parse::<Board>().with_context(|| format!("invalid puzzle {s:?}")))
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    let level = if args.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    let strategies = if args.strategies.is_empty() {
        Strategy::ALL.to_vec()
    } else {
        args.strategies.clone()
    };
    let policy = if args.reference {
        ExpansionPolicy::Reference
    } else {
        ExpansionPolicy::ExpandOnce
    };
    info!("strategies {:?}, policy {:?}", strategies, policy);

    let mut unsolved = 0;
    for board in puzzles(&args.puzzles) {
        let board = board?;

        println!("----");
        println!("{}", board);
        println!("----");

        if args.check_parity && !board.is_solvable() {
            bail!("board has odd parity and can never reach the goal:\n{}", board);
        }

        for &strategy in &strategies {
            match solve_with(&board, strategy, policy) {
                Ok(solution) => {
                    let stats = &solution.stats;
                    println!(
                        "{:<10} depth {:>3}  expanded {:>8}  generated {:>8}  in {:?}",
                        strategy, solution.depth, stats.expanded, stats.generated, stats.elapsed
                    );
                }
                Err(SolveError::NoSolutionFound { expanded }) => {
                    println!("{:<10} no solution (expanded {})", strategy, expanded);
                    unsolved += 1;
                }
                Err(e) => return Err(e.into()),
            }
        }
        println!();
    }

    if unsolved > 0 {
        bail!("{} searches exhausted without reaching the goal", unsolved);
    }

    Ok(())
}
