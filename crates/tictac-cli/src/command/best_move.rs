use anyhow::bail;
use tictac_oracle::{MinimaxOracle, Oracle as _};

use crate::util::parse_board;

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct BestMoveArg {
    /// Cell values in row-major order (0 empty, 1 X, -1 O), comma separated
    #[arg(long, value_delimiter = ',', allow_hyphen_values = true, required = true)]
    board: Vec<i8>,
}

pub(crate) fn run(arg: &BestMoveArg) -> anyhow::Result<()> {
    let board = parse_board(&arg.board)?;
    println!("{board}");
    println!();

    if let Some(winner) = board.winner() {
        bail!("game is already over: {winner} has won");
    }
    if board.is_full() {
        bail!("game is already over: draw");
    }

    let oracle = MinimaxOracle::new();
    let Some(mv) = oracle.best_move(&board) else {
        bail!("no legal move");
    };
    println!("{} to move", board.to_move());
    println!("Best move: {mv} (index {})", mv.index());
    println!("Outcome with perfect play: {}", oracle.outcome(&board));
    for (candidate, score) in oracle.move_scores(&board) {
        println!("  {candidate}: {score:+}");
    }
    Ok(())
}
