//! Corpus generation: sample, label, write.
//!
//! [`generate_corpus`] runs the training-time pipeline `size` times:
//!
//! 1. [`Sampler`] draws a non-terminal position where the target player moves
//! 2. [`Labeler`] asks the oracle for the optimal move and encodes it one-hot
//! 3. [`CorpusWriter`] appends the `(encoding, label)` record immediately
//!
//! Records are written as they are produced, so an interrupted run leaves a
//! valid corpus holding every example generated so far.

use rand::Rng;
use tictac_engine::{NUM_CELLS, Player};
use tictac_oracle::Oracle;

use crate::{
    corpus::{CorpusError, CorpusWriter},
    example::TrainingExample,
    label::{LabelError, Labeler},
    sampler::{SampleError, Sampler},
};

const PROGRESS_INTERVAL: usize = 1000;

#[derive(Debug, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum GenerateError {
    #[display("failed to sample a position: {_0}")]
    Sample(SampleError),
    #[display("failed to label a position: {_0}")]
    Label(LabelError),
    #[display("failed to write an example: {_0}")]
    Corpus(CorpusError),
}

/// Summary of a [`generate_corpus`] run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerationSummary {
    /// Examples written.
    pub examples: usize,
    /// Number of examples per ply count.
    pub plies_histogram: [usize; NUM_CELLS],
    /// Number of examples per labeled move index.
    pub label_histogram: [usize; NUM_CELLS],
}

/// Generates `size` labeled examples for `player` and writes them to `writer`.
///
/// The writer is left open; the caller decides when to [`CorpusWriter::finish`] it.
pub fn generate_corpus<O, R>(
    writer: &mut CorpusWriter,
    sampler: &Sampler,
    labeler: &Labeler<O>,
    player: Player,
    size: usize,
    rng: &mut R,
) -> Result<GenerationSummary, GenerateError>
where
    O: Oracle,
    R: Rng,
{
    log::info!(
        "generating {size} examples for {player} into {}",
        writer.path().display()
    );

    let mut summary = GenerationSummary::default();
    for i in 0..size {
        let sample = sampler.sample(player, rng)?;
        let label = labeler.label(&sample.board)?;
        writer.write_example(&TrainingExample::new(sample.board.encode(), label))?;

        summary.examples += 1;
        summary.plies_histogram[sample.plies] += 1;
        summary.label_histogram[label.best_move().index()] += 1;

        if (i + 1).is_multiple_of(PROGRESS_INTERVAL) {
            log::info!("{} of {size} examples written", i + 1);
        }
    }
    Ok(summary)
}
