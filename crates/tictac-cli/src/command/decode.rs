use anyhow::{Context as _, bail};
use tictac_corpus::decoder::{Scores, decode};
use tictac_engine::NUM_CELLS;

use crate::util::parse_board_encoding;

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct DecodeArg {
    /// Cell values in row-major order (0 empty, 1 X, -1 O), comma separated
    #[arg(long, value_delimiter = ',', allow_hyphen_values = true, required = true)]
    board: Vec<i8>,
    /// Model score for each cell in the same order, comma separated
    #[arg(long, value_delimiter = ',', allow_hyphen_values = true, required = true)]
    scores: Vec<f32>,
}

pub(crate) fn run(arg: &DecodeArg) -> anyhow::Result<()> {
    let encoding = parse_board_encoding(&arg.board)?;
    let Ok(scores) = <[f32; NUM_CELLS]>::try_from(arg.scores.as_slice()) else {
        bail!("expected {NUM_CELLS} scores, got {}", arg.scores.len());
    };

    let mv = decode(&Scores::new(scores), &encoding).context("Failed to decode scores")?;
    println!("{encoding}");
    println!();
    println!("Move: {mv} (index {})", mv.index());
    Ok(())
}
