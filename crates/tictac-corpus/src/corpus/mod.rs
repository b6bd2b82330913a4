//! Line-oriented corpus files.
//!
//! A corpus holds one [`TrainingExample`](crate::example::TrainingExample)
//! per line, each line a self-contained JSON array. There is no header and
//! no framing, so a corpus can be extended by appending lines and read back
//! as a stream without loading the whole file.
//!
//! - [`CorpusWriter`] - Opens a corpus with a [`WriteMode`] and appends records
//! - [`CorpusReader`] - Streams records back, validating every line
//! - [`split_train_validation`] - Splits a loaded corpus for a trainer

use std::{io, path::PathBuf};

pub use self::{reader::*, writer::*};

mod reader;
mod writer;

#[derive(Debug, derive_more::Display, derive_more::Error)]
pub enum CorpusError {
    #[display("corpus already exists: {}", path.display())]
    AlreadyExists { path: PathBuf },
    #[display("failed to open corpus {}", path.display())]
    Open { path: PathBuf, source: io::Error },
    #[display("failed to write corpus {}", path.display())]
    Write { path: PathBuf, source: io::Error },
    #[display("failed to read corpus {}", path.display())]
    Read { path: PathBuf, source: io::Error },
    #[display("malformed record at {}:{line}", path.display())]
    Parse {
        path: PathBuf,
        line: usize,
        source: serde_json::Error,
    },
}
