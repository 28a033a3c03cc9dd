pub mod export;
mod parser;
mod sanitize;

use crate::workflows::comments::{
    CommentAssembler, CommentRequest, GeneratedComment, RandomSource,
};
use chrono::NaiveDateTime;
use serde::Serialize;
use std::io::Read;
use std::path::Path;
use tracing::{info, warn};

use parser::BatchRecord;
pub use parser::ADDENDUM_MAX_CHARS;
pub use sanitize::{sanitize_text, strip_unsafe, student_name, InvalidName};

#[derive(Debug, thiserror::Error)]
pub enum BatchImportError {
    #[error("failed to read batch file: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid batch CSV data: {0}")]
    Csv(#[from] csv::Error),
    #[error("batch CSV is missing the `{0}` column")]
    MissingColumn(&'static str),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BatchLimits {
    pub max_rows: usize,
    pub name_max_len: usize,
}

impl Default for BatchLimits {
    fn default() -> Self {
        Self {
            max_rows: 100,
            name_max_len: 100,
        }
    }
}

/// A comment ready for the session store or an export.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommentEntry {
    pub student_name: String,
    pub subject: String,
    pub year: u8,
    pub comment: String,
    pub char_count: usize,
    /// When the comment was generated; exported as the `Generated` column.
    pub generated_at: NaiveDateTime,
}

impl CommentEntry {
    pub fn new(
        request: &CommentRequest,
        comment: GeneratedComment,
        generated_at: NaiveDateTime,
    ) -> Self {
        Self {
            student_name: request.student_name.clone(),
            subject: request.subject.subject().to_string(),
            year: request.subject.year(),
            comment: comment.text,
            char_count: comment.char_count,
            generated_at,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BatchEntry {
    pub row: usize,
    #[serde(flatten)]
    pub entry: CommentEntry,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BatchFailure {
    pub row: usize,
    pub message: String,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct BatchOutcome {
    pub entries: Vec<BatchEntry>,
    pub failures: Vec<BatchFailure>,
    /// Rows left unprocessed because the batch hit its row limit.
    pub skipped: usize,
}

impl BatchOutcome {
    pub fn comment_entries(&self) -> Vec<CommentEntry> {
        self.entries.iter().map(|entry| entry.entry.clone()).collect()
    }
}

/// Rows read from a batch CSV, validated but not yet generated.
#[derive(Debug)]
pub struct CommentBatch {
    records: Vec<BatchRecord>,
    skipped: usize,
}

impl CommentBatch {
    pub fn from_path<P: AsRef<Path>>(
        path: P,
        limits: BatchLimits,
    ) -> Result<Self, BatchImportError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file, limits)
    }

    pub fn from_reader<R: Read>(reader: R, limits: BatchLimits) -> Result<Self, BatchImportError> {
        let parsed = parser::parse_rows(reader, &limits)?;
        Ok(Self {
            records: parsed.records,
            skipped: parsed.skipped,
        })
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn skipped(&self) -> usize {
        self.skipped
    }

    /// Generates one comment per row in input order, each stamped with `generated_at`. Invalid
    /// rows and rows whose track is not in the bank are recorded as failures; the rest of the
    /// batch still runs.
    pub fn generate<R>(
        &self,
        assembler: &CommentAssembler,
        random: &mut R,
        generated_at: NaiveDateTime,
    ) -> BatchOutcome
    where
        R: RandomSource + ?Sized,
    {
        let mut outcome = BatchOutcome {
            skipped: self.skipped,
            ..BatchOutcome::default()
        };

        for record in &self.records {
            let generated = record.parsed.as_ref().map_err(Clone::clone).and_then(|request| {
                assembler
                    .generate(request, random)
                    .map(|comment| CommentEntry::new(request, comment, generated_at))
                    .map_err(|err| err.to_string())
            });

            match generated {
                Ok(entry) => outcome.entries.push(BatchEntry {
                    row: record.row,
                    entry,
                }),
                Err(message) => {
                    warn!(row = record.row, %message, "batch row failed");
                    outcome.failures.push(BatchFailure {
                        row: record.row,
                        message,
                    });
                }
            }
        }

        info!(
            generated = outcome.entries.len(),
            failed = outcome.failures.len(),
            skipped = outcome.skipped,
            "batch complete"
        );
        outcome
    }
}
