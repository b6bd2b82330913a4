use clap::{Parser, Subcommand};

use self::{
    best_move::BestMoveArg, decode::DecodeArg, generate_corpus::GenerateCorpusArg,
    inspect_corpus::InspectCorpusArg,
};

mod best_move;
mod decode;
mod generate_corpus;
mod inspect_corpus;

#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub struct CommandArgs {
    /// What mode to run the program in
    #[command(subcommand)]
    mode: Mode,
}

#[derive(Debug, Clone, Subcommand)]
enum Mode {
    /// Generate labeled positions for training data
    GenerateCorpus(#[clap(flatten)] GenerateCorpusArg),
    /// Validate a corpus and print its label distribution
    InspectCorpus(#[clap(flatten)] InspectCorpusArg),
    /// Decode raw model scores into a legal move
    Decode(#[clap(flatten)] DecodeArg),
    /// Ask the oracle for the optimal move of a position
    BestMove(#[clap(flatten)] BestMoveArg),
}

pub fn run() -> anyhow::Result<()> {
    let args = CommandArgs::parse();
    match args.mode {
        Mode::GenerateCorpus(arg) => generate_corpus::run(&arg)?,
        Mode::InspectCorpus(arg) => inspect_corpus::run(&arg)?,
        Mode::Decode(arg) => decode::run(&arg)?,
        Mode::BestMove(arg) => best_move::run(&arg)?,
    }
    Ok(())
}
