use super::CommentEntry;
use std::io::Write;

pub const EXPORT_HEADERS: [&str; 5] = ["Student Name", "Subject", "Year", "Comment", "Generated"];
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M";

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("failed to write comment export: {0}")]
    Csv(#[from] csv::Error),
    #[error("failed to flush comment export: {0}")]
    Io(#[from] std::io::Error),
}

/// Writes one CSV row per entry; the `Generated` column is each entry's own timestamp.
pub fn write_csv<W: Write>(writer: W, entries: &[CommentEntry]) -> Result<(), ExportError> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    csv_writer.write_record(EXPORT_HEADERS)?;
    for entry in entries {
        let year = entry.year.to_string();
        let generated = entry.generated_at.format(TIMESTAMP_FORMAT).to_string();
        csv_writer.write_record([
            entry.student_name.as_str(),
            entry.subject.as_str(),
            year.as_str(),
            entry.comment.as_str(),
            generated.as_str(),
        ])?;
    }
    csv_writer.flush()?;
    Ok(())
}

/// [`write_csv`] into an in-memory string.
pub fn to_csv_string(entries: &[CommentEntry]) -> Result<String, ExportError> {
    let mut buffer = Vec::new();
    write_csv(&mut buffer, entries)?;
    Ok(String::from_utf8_lossy(&buffer).into_owned())
}
