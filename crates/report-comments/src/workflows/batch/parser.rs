use super::sanitize::{strip_unsafe, student_name};
use super::{BatchImportError, BatchLimits};
use crate::workflows::comments::{Band, CommentRequest, SubjectKey};
use serde::{Deserialize, Deserializer};
use std::io::Read;

const NAME_COLUMN: &str = "Student Name";
const DEFAULT_SUBJECT: &str = "English";
const DEFAULT_YEAR: u8 = 7;
/// Longest addendum kept from a batch row.
pub const ADDENDUM_MAX_CHARS: usize = 1000;

/// One data row, numbered from 1 after the header, and either the request it describes or the
/// reason it could not be read.
#[derive(Debug)]
pub(crate) struct BatchRecord {
    pub(crate) row: usize,
    pub(crate) parsed: Result<CommentRequest, String>,
}

#[derive(Debug)]
pub(crate) struct ParsedRows {
    pub(crate) records: Vec<BatchRecord>,
    pub(crate) skipped: usize,
}

pub(crate) fn parse_rows<R: Read>(
    reader: R,
    limits: &BatchLimits,
) -> Result<ParsedRows, BatchImportError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(reader);
    let headers = csv_reader.headers()?.clone();
    if !headers.iter().any(|header| header == NAME_COLUMN) {
        return Err(BatchImportError::MissingColumn(NAME_COLUMN));
    }

    let mut records = Vec::new();
    let mut skipped = 0;

    for (index, record) in csv_reader.records().enumerate() {
        if records.len() >= limits.max_rows {
            skipped += 1;
            continue;
        }

        let parsed = record
            .and_then(|record| record.deserialize::<BatchRow>(Some(&headers)))
            .map_err(|err| format!("unreadable row: {err}"))
            .and_then(|row| row.into_request(limits));
        records.push(BatchRecord {
            row: index + 1,
            parsed,
        });
    }

    Ok(ParsedRows { records, skipped })
}

#[derive(Debug, Deserialize)]
struct BatchRow {
    #[serde(rename = "Student Name", default, deserialize_with = "empty_string_as_none")]
    student_name: Option<String>,
    #[serde(rename = "Gender", default, deserialize_with = "empty_string_as_none")]
    gender: Option<String>,
    #[serde(rename = "Subject", default, deserialize_with = "empty_string_as_none")]
    subject: Option<String>,
    #[serde(rename = "Year", default, deserialize_with = "empty_string_as_none")]
    year: Option<String>,
    #[serde(rename = "Attitude", default, deserialize_with = "empty_string_as_none")]
    attitude: Option<String>,
    #[serde(
        rename = "Achievement",
        default,
        deserialize_with = "empty_string_as_none"
    )]
    achievement: Option<String>,
    #[serde(rename = "Target", default, deserialize_with = "empty_string_as_none")]
    target: Option<String>,
    #[serde(rename = "Comment", default, deserialize_with = "empty_string_as_none")]
    comment: Option<String>,
}

impl BatchRow {
    fn into_request(self, limits: &BatchLimits) -> Result<CommentRequest, String> {
        let student_name = self
            .student_name
            .as_deref()
            .and_then(|name| student_name(name, limits.name_max_len).ok())
            .ok_or_else(|| "missing student name".to_string())?;

        let year = match self.year.as_deref() {
            Some(raw) => parse_year(raw)?,
            None => DEFAULT_YEAR,
        };

        Ok(CommentRequest {
            subject: SubjectKey::new(self.subject.as_deref().unwrap_or(DEFAULT_SUBJECT), year),
            student_name,
            gender: self.gender.unwrap_or_default(),
            attitude: parse_score("Attitude", self.attitude.as_deref())?,
            achievement: parse_score("Achievement", self.achievement.as_deref())?,
            target: parse_score("Target", self.target.as_deref())?,
            addendum: self
                .comment
                .as_deref()
                .map(|comment| strip_unsafe(comment, ADDENDUM_MAX_CHARS))
                .filter(|comment| !comment.is_empty()),
        })
    }
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}

/// Accepts "7" as well as spreadsheet exports such as "7.0".
fn parse_year(raw: &str) -> Result<u8, String> {
    let trimmed = raw.trim();
    trimmed
        .parse::<u8>()
        .ok()
        .or_else(|| {
            trimmed
                .parse::<f64>()
                .ok()
                .filter(|value| value.fract() == 0.0 && (0.0..=255.0).contains(value))
                .map(|value| value as u8)
        })
        .ok_or_else(|| format!("invalid Year value {trimmed:?}"))
}

fn parse_score(column: &str, raw: Option<&str>) -> Result<f64, String> {
    match raw {
        None => Ok(f64::from(Band::DEFAULT.value())),
        Some(raw) => raw
            .trim()
            .parse::<f64>()
            .map_err(|_| format!("invalid {column} value {:?}", raw.trim())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn parse(csv: &str) -> ParsedRows {
        parse_rows(Cursor::new(csv), &BatchLimits::default()).expect("csv parses")
    }

    #[test]
    fn rows_become_requests_with_sanitized_names() {
        let rows = parse(
            "Student Name,Gender,Subject,Year,Attitude,Achievement,Target,Comment\n\
             aseel <script>,Female,English,5,75,80,85,Led the book club!\n",
        );
        let request = rows.records[0].parsed.as_ref().expect("valid row");
        assert_eq!(request.student_name, "Aseel Script");
        assert_eq!(request.subject, SubjectKey::new("English", 5));
        assert_eq!(request.gender, "Female");
        assert_eq!(
            (request.attitude, request.achievement, request.target),
            (75.0, 80.0, 85.0)
        );
        assert_eq!(request.addendum.as_deref(), Some("Led the book club"));
    }

    #[test]
    fn missing_values_fall_back_to_defaults() {
        let rows = parse("Student Name,Gender\nOmar,\n");
        let request = rows.records[0].parsed.as_ref().expect("valid row");
        assert_eq!(request.subject, SubjectKey::new("English", 7));
        assert_eq!(request.gender, "");
        assert_eq!(request.attitude, 75.0);
        assert_eq!(request.target, 75.0);
        assert!(request.addendum.is_none());
    }

    #[test]
    fn invalid_values_are_reported_per_row() {
        let rows = parse(
            "Student Name,Subject,Year,Attitude\n\
             Omar,Maths,seven,80\n\
             ,Maths,7,80\n\
             Lina,Maths,7,high\n\
             Sara,Maths,8.0,80\n",
        );
        let errors: Vec<_> = rows
            .records
            .iter()
            .map(|record| record.parsed.as_ref().err().cloned())
            .collect();
        assert_eq!(
            errors,
            vec![
                Some("invalid Year value \"seven\"".to_string()),
                Some("missing student name".to_string()),
                Some("invalid Attitude value \"high\"".to_string()),
                None,
            ]
        );
        assert_eq!(rows.records[3].row, 4);
    }

    #[test]
    fn rows_past_the_limit_are_skipped() {
        let limits = BatchLimits {
            max_rows: 2,
            ..BatchLimits::default()
        };
        let csv = "Student Name\nA\nB\nC\nD\n";
        let rows = parse_rows(Cursor::new(csv), &limits).expect("csv parses");
        assert_eq!(rows.records.len(), 2);
        assert_eq!(rows.skipped, 2);
    }

    #[test]
    fn name_column_is_required() {
        let error = parse_rows(Cursor::new("Name,Year\nOmar,7\n"), &BatchLimits::default())
            .expect_err("no Student Name column");
        assert!(matches!(error, BatchImportError::MissingColumn("Student Name")));
    }
}
