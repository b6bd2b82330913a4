use std::{num::NonZeroUsize, path::PathBuf};

use anyhow::Context as _;
use rand::SeedableRng as _;
use rand_pcg::Pcg32;
use tictac_corpus::{
    corpus::{CorpusWriter, WriteMode},
    generate::generate_corpus,
    label::Labeler,
    sampler::{Sampler, SamplerConfig, ply_counts},
};
use tictac_engine::{Move, Player};
use tictac_oracle::MinimaxOracle;

use crate::util::print_histogram;

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct GenerateCorpusArg {
    /// Number of examples to generate
    #[arg(long)]
    size: usize,
    /// Player whose decisions are sampled (x or o)
    #[arg(long, default_value = "x")]
    player: Player,
    /// How to treat an existing corpus: append (a), overwrite (w) or reject (x)
    #[arg(long, default_value = "overwrite")]
    mode: WriteMode,
    /// Output file path [default: X_training_data.txt or O_training_data.txt]
    #[arg(long)]
    output: Option<PathBuf>,
    /// Seed for reproducible sampling
    #[arg(long)]
    seed: Option<u64>,
    /// Maximum random playouts per sample before giving up
    #[arg(long, default_value_t = SamplerConfig::DEFAULT_MAX_ATTEMPTS)]
    max_attempts: NonZeroUsize,
}

fn default_output(player: Player) -> PathBuf {
    PathBuf::from(format!("{player}_training_data.txt"))
}

pub(crate) fn run(arg: &GenerateCorpusArg) -> anyhow::Result<()> {
    let GenerateCorpusArg {
        size,
        player,
        mode,
        output,
        seed,
        max_attempts,
    } = arg;
    let output = output.clone().unwrap_or_else(|| default_output(*player));

    let mut rng = match seed {
        Some(seed) => Pcg32::seed_from_u64(*seed),
        None => Pcg32::from_rng(&mut rand::rng()),
    };
    let sampler = Sampler::new(SamplerConfig {
        max_attempts: *max_attempts,
    });

    log::info!("Solving game tree...");
    let oracle = MinimaxOracle::new();
    log::info!("Solved {} positions", oracle.num_positions());
    let labeler = Labeler::new(&oracle);

    let mut writer = CorpusWriter::open(&output, *mode)
        .with_context(|| format!("Failed to open output file: {}", output.display()))?;
    let summary = generate_corpus(&mut writer, &sampler, &labeler, *player, *size, &mut rng)
        .with_context(|| format!("Failed to generate corpus into {}", output.display()))?;
    writer
        .finish()
        .with_context(|| format!("Failed to flush output to {}", output.display()))?;

    eprintln!(
        "Wrote {} examples to {} ({mode})",
        summary.examples,
        output.display()
    );
    eprintln!();
    eprintln!("Ply count histogram:");
    print_histogram(
        summary
            .plies_histogram
            .iter()
            .enumerate()
            .filter(|(plies, _)| ply_counts(*player).contains(plies))
            .map(|(plies, count)| (plies, *count)),
    );
    eprintln!();
    eprintln!("Label histogram:");
    print_histogram(Move::all().map(|mv| (mv, summary.label_histogram[mv.index()])));

    Ok(())
}
