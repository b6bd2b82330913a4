//! Training corpus generation and inference-time move decoding.
//!
//! This crate implements two pipelines that share only the cell indexing
//! of [`tictac_engine::Move`]:
//!
//! ```text
//! training:   Sampler ──> Labeler ──> CorpusWriter ──> corpus file
//! inference:  Predictor ──> decode ──> Move
//! ```
//!
//! - [`sampler`] - Random non-terminal positions at a chosen depth
//! - [`label`] - One-hot labels from an [`Oracle`](tictac_oracle::Oracle)
//! - [`example`] - The `(board encoding, label)` training pair
//! - [`corpus`] - Line-oriented corpus writer and reader
//! - [`generate`] - The sample-label-write loop
//! - [`decoder`] - Legal move selection from raw model scores
//!
//! # Corpus Format
//!
//! One JSON array per line, no header:
//!
//! ```text
//! [[0,0,0,0,1,0,0,0,0],[1,0,0,0,0,0,0,0,0]]
//! ```
//!
//! The first array is the board encoding (`0` empty, `1` X, `-1` O), the
//! second the one-hot label of the optimal move.

pub mod corpus;
pub mod decoder;
pub mod example;
pub mod generate;
pub mod label;
pub mod sampler;
