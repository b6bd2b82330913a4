use std::fmt;

use anyhow::{Context as _, bail};
use tictac_engine::{Board, BoardEncoding, NUM_CELLS};

/// Logs to stderr at `info` unless `RUST_LOG` says otherwise.
pub fn init_logger() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .target(env_logger::Target::Stderr)
        .init();
}

/// Converts a `--board` argument (nine comma-separated cell values) into an encoding.
pub fn parse_board_encoding(values: &[i8]) -> anyhow::Result<BoardEncoding> {
    let Ok(values) = <[i8; NUM_CELLS]>::try_from(values) else {
        bail!("expected {NUM_CELLS} cell values, got {}", values.len());
    };
    BoardEncoding::from_values(values).context("invalid board encoding")
}

/// Like [`parse_board_encoding`], but also requires the position to be reachable in play.
pub fn parse_board(values: &[i8]) -> anyhow::Result<Board> {
    let encoding = parse_board_encoding(values)?;
    Board::from_encoding(&encoding).context("board cannot arise in play")
}

pub fn print_histogram<I, S>(data: I)
where
    I: Iterator<Item = (S, usize)>,
    S: fmt::Display,
{
    let data = data.collect::<Vec<_>>();
    let max_count = data.iter().map(|(_, c)| *c).max().unwrap_or(1).max(1);
    let max_bar_width = 50;
    for (label, count) in &data {
        let bar_width = (count * max_bar_width) / max_count;
        println!("{:>15} | {:<7} {}", label, count, "#".repeat(bar_width));
    }
}
