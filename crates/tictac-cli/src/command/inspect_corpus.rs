use std::path::PathBuf;

use anyhow::{Context as _, bail};
use tictac_corpus::corpus::{CorpusReader, split_train_validation};
use tictac_engine::{Board, Move, NUM_CELLS, Player};

use crate::util::print_histogram;

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct InspectCorpusArg {
    /// Corpus file to inspect
    path: PathBuf,
    /// Fraction of examples held out for validation
    #[arg(long, default_value = "0.2")]
    validation_ratio: f64,
}

pub(crate) fn run(arg: &InspectCorpusArg) -> anyhow::Result<()> {
    let InspectCorpusArg {
        path,
        validation_ratio,
    } = arg;
    if !(0.0..=1.0).contains(validation_ratio) {
        bail!("validation ratio must be within [0, 1], got {validation_ratio}");
    }

    let reader = CorpusReader::open(path)
        .with_context(|| format!("Failed to open corpus: {}", path.display()))?;
    let examples = reader
        .collect::<Result<Vec<_>, _>>()
        .with_context(|| format!("Failed to read corpus: {}", path.display()))?;

    let mut label_histogram = [0; NUM_CELLS];
    let mut plies_histogram = [0; NUM_CELLS + 1];
    let mut movers = [0; 2];
    let mut unreachable = 0;
    for example in &examples {
        label_histogram[example.label().best_move().index()] += 1;
        let empty = example.board().empty_cells().count();
        plies_histogram[NUM_CELLS - empty] += 1;
        match Board::from_encoding(example.board()) {
            Ok(board) => movers[usize::from(board.to_move().is_o())] += 1,
            Err(e) => {
                log::warn!(
                    "position {:?} cannot arise in play: {e}",
                    example.board().values()
                );
                unreachable += 1;
            }
        }
    }

    let (train, validation) = split_train_validation(&examples, 1.0 - validation_ratio);
    println!("Corpus: {}", path.display());
    println!("Examples: {}", examples.len());
    for (player, count) in Player::ALL.iter().zip(movers) {
        println!("  {player} to move: {count}");
    }
    if unreachable > 0 {
        println!("  unreachable: {unreachable}");
    }
    println!(
        "Split: {} training / {} validation",
        train.len(),
        validation.len()
    );
    println!();
    println!("Ply count histogram:");
    print_histogram(
        plies_histogram
            .iter()
            .enumerate()
            .filter(|(_, count)| **count > 0)
            .map(|(plies, count)| (plies, *count)),
    );
    println!();
    println!("Label histogram:");
    print_histogram(Move::all().map(|mv| (mv, label_histogram[mv.index()])));

    Ok(())
}
