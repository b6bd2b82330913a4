use std::{
    fs::File,
    io::{BufRead, BufReader, Lines},
    path::{Path, PathBuf},
};

use crate::example::TrainingExample;

use super::CorpusError;

/// Fraction of a corpus used for training by [`split_train_validation`] by default.
pub const DEFAULT_TRAIN_RATIO: f64 = 0.8;

/// Streams [`TrainingExample`]s from a corpus, one per line.
///
/// Every line must be a complete record; blank lines and malformed records
/// are reported with their 1-based line number.
#[derive(Debug)]
pub struct CorpusReader<R> {
    lines: Lines<R>,
    path: PathBuf,
    line: usize,
}

impl CorpusReader<BufReader<File>> {
    pub fn open<P>(path: P) -> Result<Self, CorpusError>
    where
        P: Into<PathBuf>,
    {
        let path = path.into();
        let file = File::open(&path).map_err(|source| CorpusError::Open {
            path: path.clone(),
            source,
        })?;
        Ok(Self::new(BufReader::new(file), path))
    }
}

impl<R> CorpusReader<R>
where
    R: BufRead,
{
    /// Wraps an already opened reader; `path` is only used in error messages.
    pub fn new<P>(reader: R, path: P) -> Self
    where
        P: Into<PathBuf>,
    {
        Self {
            lines: reader.lines(),
            path: path.into(),
            line: 0,
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl<R> Iterator for CorpusReader<R>
where
    R: BufRead,
{
    type Item = Result<TrainingExample, CorpusError>;

    fn next(&mut self) -> Option<Self::Item> {
        let line = self.lines.next()?;
        self.line += 1;
        let result = match line {
            Ok(line) => {
                serde_json::from_str(&line).map_err(|source| CorpusError::Parse {
                    path: self.path.clone(),
                    line: self.line,
                    source,
                })
            }
            Err(source) => Err(CorpusError::Read {
                path: self.path.clone(),
                source,
            }),
        };
        Some(result)
    }
}

/// Reads a whole corpus into memory.
pub fn read_corpus<P>(path: P) -> Result<Vec<TrainingExample>, CorpusError>
where
    P: Into<PathBuf>,
{
    CorpusReader::open(path)?.collect()
}

/// Splits `examples` into training and validation parts.
///
/// The first `floor(train_ratio * len)` examples form the training part.
/// `train_ratio` is clamped to `[0.0, 1.0]`.
#[must_use]
pub fn split_train_validation<T>(examples: &[T], train_ratio: f64) -> (&[T], &[T]) {
    #[expect(
        clippy::cast_precision_loss,
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss
    )]
    let boundary = (examples.len() as f64 * train_ratio.clamp(0.0, 1.0)).floor() as usize;
    examples.split_at(boundary.min(examples.len()))
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use tictac_engine::{BoardEncoding, Move};

    use super::*;
    use crate::{
        corpus::{WriteMode, write_corpus},
        label::Label,
    };

    fn read_str(text: &str) -> Vec<Result<TrainingExample, CorpusError>> {
        CorpusReader::new(Cursor::new(text.to_owned()), "memory").collect()
    }

    #[test]
    fn test_write_then_read_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("corpus.txt");
        let examples = [
            TrainingExample::new(
                BoardEncoding::from_values([1, -1, 0, 0, 1, 0, 0, 0, -1]).unwrap(),
                Label::one_hot(Move::new(2, 0).unwrap()),
            ),
            TrainingExample::new(
                BoardEncoding::EMPTY,
                Label::one_hot(Move::new(0, 2).unwrap()),
            ),
        ];

        write_corpus(&path, WriteMode::Reject, &examples).unwrap();
        let read = read_corpus(&path).unwrap();
        assert_eq!(read, examples);
    }

    #[test]
    fn test_reports_line_of_malformed_record() {
        let text = "[[0,0,0,0,0,0,0,0,0],[1,0,0,0,0,0,0,0,0]]\n\
                    [[0,0,0,0,0,0,0,0,0],[1,1,0,0,0,0,0,0,0]]\n";
        let results = read_str(text);
        assert_eq!(results.len(), 2);
        assert!(results[0].is_ok());
        let err = results[1].as_ref().unwrap_err();
        assert!(matches!(err, CorpusError::Parse { line: 2, .. }));
        assert!(err.to_string().contains("memory:2"));
    }

    #[test]
    fn test_rejects_blank_lines_and_comments() {
        for text in ["\n", "# header\n", "[[0,0,0,0,0,0,0,0,0]]\n"] {
            let results = read_str(text);
            assert!(results[0].is_err(), "{text:?}");
        }
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_corpus(dir.path().join("missing.txt")).unwrap_err();
        assert!(matches!(err, CorpusError::Open { .. }));
    }

    #[test]
    fn test_split_train_validation() {
        let items: Vec<_> = (0..10).collect();
        let (train, validation) = split_train_validation(&items, DEFAULT_TRAIN_RATIO);
        assert_eq!(train, &[0, 1, 2, 3, 4, 5, 6, 7]);
        assert_eq!(validation, &[8, 9]);

        let (train, validation) = split_train_validation(&items[..3], DEFAULT_TRAIN_RATIO);
        assert_eq!((train.len(), validation.len()), (2, 1));

        let (train, validation) = split_train_validation(&items, 1.5);
        assert_eq!((train.len(), validation.len()), (10, 0));

        let empty: [i32; 0] = [];
        let (train, validation) = split_train_validation(&empty, DEFAULT_TRAIN_RATIO);
        assert!(train.is_empty() && validation.is_empty());
    }
}
