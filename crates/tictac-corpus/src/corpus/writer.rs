use std::{
    fmt,
    fs::{File, OpenOptions},
    io::{self, BufWriter, Write as _},
    path::{Path, PathBuf},
    str::FromStr,
};

use crate::example::TrainingExample;

use super::CorpusError;

#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("invalid write mode {mode:?}: expected append, overwrite or reject")]
pub struct InvalidWriteModeError {
    mode: String,
}

/// How [`CorpusWriter::open`] treats an existing corpus file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WriteMode {
    /// Keep existing records and add new ones at the end.
    Append,
    /// Discard existing records.
    Overwrite,
    /// Refuse to touch an existing file.
    Reject,
}

impl WriteMode {
    pub const ALL: [Self; 3] = [Self::Append, Self::Overwrite, Self::Reject];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Append => "append",
            Self::Overwrite => "overwrite",
            Self::Reject => "reject",
        }
    }

    fn open_options(self) -> OpenOptions {
        let mut options = OpenOptions::new();
        match self {
            Self::Append => options.append(true).create(true),
            Self::Overwrite => options.write(true).create(true).truncate(true),
            Self::Reject => options.write(true).create_new(true),
        };
        options
    }
}

impl fmt::Display for WriteMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Accepts the long names and the single-letter `a`, `w`, `x` forms.
impl FromStr for WriteMode {
    type Err = InvalidWriteModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "append" | "a" => Ok(Self::Append),
            "overwrite" | "w" => Ok(Self::Overwrite),
            "reject" | "x" => Ok(Self::Reject),
            _ => Err(InvalidWriteModeError { mode: s.to_owned() }),
        }
    }
}

/// Buffered writer for a corpus file.
///
/// The file is opened once in [`Self::open`] and released when the writer is
/// dropped. Call [`Self::finish`] to flush and observe write errors; a plain
/// drop flushes on a best-effort basis and discards any error.
///
/// # Example
///
/// ```no_run
/// use tictac_corpus::{
///     corpus::{CorpusWriter, WriteMode},
///     example::TrainingExample,
///     label::Label,
/// };
/// use tictac_engine::{BoardEncoding, Move};
///
/// let mut writer = CorpusWriter::open("X_training_data.txt", WriteMode::Append)?;
/// let label = Label::one_hot(Move::new(1, 1)?);
/// writer.write_example(&TrainingExample::new(BoardEncoding::EMPTY, label))?;
/// writer.finish()?;
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug)]
pub struct CorpusWriter {
    writer: BufWriter<File>,
    path: PathBuf,
    written: usize,
}

impl CorpusWriter {
    pub fn open<P>(path: P, mode: WriteMode) -> Result<Self, CorpusError>
    where
        P: Into<PathBuf>,
    {
        let path = path.into();
        let file = match mode.open_options().open(&path) {
            Ok(file) => file,
            Err(e) if e.kind() == io::ErrorKind::AlreadyExists => {
                return Err(CorpusError::AlreadyExists { path });
            }
            Err(source) => return Err(CorpusError::Open { path, source }),
        };
        log::debug!("opened corpus {} ({mode})", path.display());
        Ok(Self {
            writer: BufWriter::new(file),
            path,
            written: 0,
        })
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Number of records written through this writer.
    #[must_use]
    pub fn written(&self) -> usize {
        self.written
    }

    pub fn write_example(&mut self, example: &TrainingExample) -> Result<(), CorpusError> {
        serde_json::to_writer(&mut self.writer, example)
            .map_err(io::Error::from)
            .and_then(|()| self.writer.write_all(b"\n"))
            .map_err(|source| CorpusError::Write {
                path: self.path.clone(),
                source,
            })?;
        self.written += 1;
        Ok(())
    }

    pub fn write_all<'a, I>(&mut self, examples: I) -> Result<(), CorpusError>
    where
        I: IntoIterator<Item = &'a TrainingExample>,
    {
        for example in examples {
            self.write_example(example)?;
        }
        Ok(())
    }

    /// Flushes buffered records and closes the file.
    ///
    /// Returns the number of records written.
    pub fn finish(mut self) -> Result<usize, CorpusError> {
        self.writer
            .flush()
            .map_err(|source| CorpusError::Write {
                path: self.path.clone(),
                source,
            })?;
        log::debug!(
            "closed corpus {} after {} records",
            self.path.display(),
            self.written
        );
        Ok(self.written)
    }
}

/// Writes `examples` to the corpus at `path` and closes it.
pub fn write_corpus<'a, P, I>(path: P, mode: WriteMode, examples: I) -> Result<usize, CorpusError>
where
    P: Into<PathBuf>,
    I: IntoIterator<Item = &'a TrainingExample>,
{
    let mut writer = CorpusWriter::open(path, mode)?;
    writer.write_all(examples)?;
    writer.finish()
}
