//! Random sampling of mid-game positions.
//!
//! A sample is produced by picking a depth (ply count) and playing that many
//! uniformly random legal moves from the empty board. Attempts that end the
//! game along the way are thrown away and replayed from scratch, so every
//! returned position still has a decision to make.
//!
//! # Depths
//!
//! A player only decides on their own turns, so the depth set depends on
//! which side the corpus is built for:
//!
//! - X (moves first): `{0, 2, 4, 6, 8}`
//! - O: `{1, 3, 5, 7}`
//!
//! The depth is drawn once per sample and kept across restarts, which keeps
//! the depth distribution uniform regardless of how often deep attempts end
//! early.

use std::num::NonZeroUsize;

use rand::{Rng, seq::IndexedRandom as _};
use tictac_engine::{Board, Player};

const X_PLY_COUNTS: [usize; 5] = [0, 2, 4, 6, 8];
const O_PLY_COUNTS: [usize; 4] = [1, 3, 5, 7];

/// Depths at which `player` is the side to move.
#[must_use]
pub fn ply_counts(player: Player) -> &'static [usize] {
    match player {
        Player::X => &X_PLY_COUNTS,
        Player::O => &O_PLY_COUNTS,
    }
}

#[derive(Debug, derive_more::Display, derive_more::Error)]
pub enum SampleError {
    #[display("no non-terminal position found at depth {plies} after {attempts} attempts")]
    AttemptsExhausted { plies: usize, attempts: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SamplerConfig {
    /// Upper bound on restarts for a single sample.
    ///
    /// A uniform random source needs a handful of attempts at most; the
    /// bound only guards against degenerate sources.
    pub max_attempts: NonZeroUsize,
}

impl SamplerConfig {
    pub const DEFAULT_MAX_ATTEMPTS: NonZeroUsize = NonZeroUsize::new(100_000).unwrap();
}

impl Default for SamplerConfig {
    fn default() -> Self {
        Self {
            max_attempts: Self::DEFAULT_MAX_ATTEMPTS,
        }
    }
}

/// A position returned by [`Sampler::sample`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SampledPosition {
    pub board: Board,
    pub plies: usize,
}

#[derive(Debug, Clone, Default)]
pub struct Sampler {
    config: SamplerConfig,
}

impl Sampler {
    #[must_use]
    pub fn new(config: SamplerConfig) -> Self {
        Self { config }
    }

    /// Samples a non-terminal position where `player` is to move.
    pub fn sample<R>(&self, player: Player, rng: &mut R) -> Result<SampledPosition, SampleError>
    where
        R: Rng,
    {
        let counts = ply_counts(player);
        let plies = counts[rng.random_range(0..counts.len())];
        self.sample_at(plies, rng)
    }

    /// Samples a non-terminal position with exactly `plies` moves played.
    pub fn sample_at<R>(&self, plies: usize, rng: &mut R) -> Result<SampledPosition, SampleError>
    where
        R: Rng,
    {
        let max_attempts = self.config.max_attempts.get();
        for attempt in 1..=max_attempts {
            if let Some(board) = random_playout(plies, rng) {
                if attempt > 1 {
                    log::trace!("sampled depth {plies} after {attempt} attempts");
                }
                return Ok(SampledPosition { board, plies });
            }
        }
        Err(SampleError::AttemptsExhausted {
            plies,
            attempts: max_attempts,
        })
    }
}

/// Plays `plies` random moves from the empty board.
///
/// Returns `None` if the game is over at any point, including after the last move.
fn random_playout<R>(plies: usize, rng: &mut R) -> Option<Board>
where
    R: Rng,
{
    let mut board = Board::new();
    for _ in 0..plies {
        let mv = *board.legal_moves().choose(rng)?;
        board.apply(mv).ok()?;
        if board.is_terminal() {
            return None;
        }
    }
    Some(board)
}

#[cfg(test)]
mod tests {
    use rand::{RngCore, SeedableRng as _};
    use rand_pcg::Pcg32;

    use super::*;

    /// A random source that always yields zero.
    struct ZeroRng;

    impl RngCore for ZeroRng {
        fn next_u32(&mut self) -> u32 {
            0
        }

        fn next_u64(&mut self) -> u64 {
            0
        }

        fn fill_bytes(&mut self, dst: &mut [u8]) {
            dst.fill(0);
        }
    }

    #[test]
    fn test_ply_count_sets() {
        assert!(ply_counts(Player::X).iter().all(|p| p % 2 == 0));
        assert!(ply_counts(Player::O).iter().all(|p| p % 2 == 1));
        assert_eq!(ply_counts(Player::X).len(), 5);
        assert_eq!(ply_counts(Player::O).len(), 4);
    }

    #[test]
    fn test_samples_are_non_terminal_with_exact_depth() {
        let mut rng = Pcg32::seed_from_u64(42);
        let sampler = Sampler::default();
        for player in Player::ALL {
            for _ in 0..500 {
                let sample = sampler.sample(player, &mut rng).unwrap();
                assert!(!sample.board.is_terminal());
                assert_eq!(sample.board.plies(), sample.plies);
                assert_eq!(sample.board.to_move(), player);
                assert!(ply_counts(player).contains(&sample.plies));
            }
        }
    }

    #[test]
    fn test_every_depth_is_reachable() {
        let mut rng = Pcg32::seed_from_u64(7);
        let sampler = Sampler::default();
        for plies in 0..=8 {
            let sample = sampler.sample_at(plies, &mut rng).unwrap();
            assert_eq!(sample.board.plies(), plies);
            assert!(!sample.board.is_terminal());
        }
    }

    #[test]
    fn test_all_depths_are_drawn() {
        let mut rng = Pcg32::seed_from_u64(3);
        let sampler = Sampler::default();
        let mut seen = [false; 9];
        for _ in 0..200 {
            seen[sampler.sample(Player::X, &mut rng).unwrap().plies] = true;
            seen[sampler.sample(Player::O, &mut rng).unwrap().plies] = true;
        }
        assert!(seen.iter().all(|s| *s));
    }

    #[test]
    fn test_same_seed_same_samples() {
        let sampler = Sampler::default();
        let mut rng1 = Pcg32::seed_from_u64(1234);
        let mut rng2 = Pcg32::seed_from_u64(1234);
        for _ in 0..50 {
            assert_eq!(
                sampler.sample(Player::O, &mut rng1).unwrap(),
                sampler.sample(Player::O, &mut rng2).unwrap()
            );
        }
    }

    #[test]
    fn test_degenerate_rng_is_bounded() {
        // Always taking the first empty cell, X completes the anti-diagonal
        // (2, 4, 6) on ply 7, so depth 8 can never be reached.
        let sampler = Sampler::new(SamplerConfig {
            max_attempts: NonZeroUsize::new(10).unwrap(),
        });
        let err = sampler.sample_at(8, &mut ZeroRng).unwrap_err();
        assert!(matches!(
            err,
            SampleError::AttemptsExhausted {
                plies: 8,
                attempts: 10
            }
        ));
    }

    #[test]
    fn test_single_attempt_suffices_for_empty_board() {
        let sampler = Sampler::new(SamplerConfig {
            max_attempts: NonZeroUsize::MIN,
        });
        let sample = sampler.sample_at(0, &mut ZeroRng).unwrap();
        assert_eq!(sample.board, Board::new());
        assert_eq!(sample.plies, 0);
    }
}
