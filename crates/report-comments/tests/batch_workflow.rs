use chrono::{NaiveDate, NaiveDateTime};
use report_comments::workflows::batch::{export, BatchLimits, CommentBatch};
use report_comments::workflows::comments::{CommentAssembler, PhraseBank, SeededRandom};
use std::sync::Arc;

const ROSTER: &str = "Student Name,Gender,Subject,Year,Attitude,Achievement,Target,Comment\n\
aseel,Female,English,5,75,80,85,\n\
Omar,Male,Maths,7,90,85,80,Led the maths club\n\
Pierre,Male,French,5,75,75,75,\n\
,Female,Science,7,70,70,70,\n\
Lina,Female,ESL (IGCSE),11,65,seventy,60,\n\
Noor,,Chemistry,10,,,,\n";

const SAMPLE_ROSTER: &str = "Student Name,Gender,Subject,Year,Attitude,Achievement,Target\n\
John,Male,English,7,75,80,85\n\
Sarah,Female,Maths,5,80,75,80\n\
Ahmed,Male,ESL (IGCSE),10,85,90,85\n\
Maria,Female,Chemistry,11,80,85,80\n";

fn run_time() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2025, 12, 1)
        .and_then(|date| date.and_hms_opt(9, 30, 0))
        .expect("valid timestamp")
}

fn assembler() -> CommentAssembler {
    CommentAssembler::new(Arc::new(
        PhraseBank::standard().expect("standard catalog validates"),
    ))
}

#[test]
fn roster_generates_good_rows_and_reports_bad_ones() {
    let batch = CommentBatch::from_reader(ROSTER.as_bytes(), BatchLimits::default())
        .expect("roster parses");
    assert_eq!(batch.len(), 6);

    let outcome = batch.generate(&assembler(), &mut SeededRandom::new(21), run_time());

    let generated: Vec<(usize, &str)> = outcome
        .entries
        .iter()
        .map(|entry| (entry.row, entry.entry.student_name.as_str()))
        .collect();
    assert_eq!(generated, vec![(1, "Aseel"), (2, "Omar"), (6, "Noor")]);

    let failed: Vec<usize> = outcome.failures.iter().map(|failure| failure.row).collect();
    assert_eq!(failed, vec![3, 4, 5]);
    assert!(outcome.failures[0].message.contains("French Year 5"));
    assert_eq!(outcome.failures[1].message, "missing student name");
    assert_eq!(
        outcome.failures[2].message,
        "invalid Achievement value \"seventy\""
    );

    let omar = &outcome.entries[1].entry;
    assert!(omar.comment.starts_with(char::is_uppercase));
    assert!(omar.char_count <= 500);

    let noor = &outcome.entries[2].entry;
    assert_eq!(noor.subject, "Chemistry");
    assert_eq!(noor.year, 10);
    assert!(noor.comment.contains("Noor"));
}

#[test]
fn sample_roster_covers_every_subject_without_failures() {
    let batch = CommentBatch::from_reader(SAMPLE_ROSTER.as_bytes(), BatchLimits::default())
        .expect("sample roster parses");
    let outcome = batch.generate(&assembler(), &mut SeededRandom::new(8), run_time());

    assert!(outcome.failures.is_empty(), "{:?}", outcome.failures);
    let subjects: Vec<(&str, u8)> = outcome
        .entries
        .iter()
        .map(|entry| (entry.entry.subject.as_str(), entry.entry.year))
        .collect();
    assert_eq!(
        subjects,
        vec![
            ("English", 7),
            ("Maths", 5),
            ("ESL (IGCSE)", 10),
            ("Chemistry", 11)
        ]
    );
    assert!(outcome.entries[3].entry.comment.contains("Maria"));
}

#[test]
fn rows_beyond_the_limit_are_skipped() {
    let limits = BatchLimits {
        max_rows: 2,
        ..BatchLimits::default()
    };
    let batch = CommentBatch::from_reader(ROSTER.as_bytes(), limits).expect("roster parses");
    assert_eq!(batch.len(), 2);
    assert_eq!(batch.skipped(), 4);

    let outcome = batch.generate(&assembler(), &mut SeededRandom::new(1), run_time());
    assert_eq!(outcome.entries.len(), 2);
    assert_eq!(outcome.skipped, 4);
}

#[test]
fn generated_rows_export_with_the_run_timestamp() {
    let batch = CommentBatch::from_reader(ROSTER.as_bytes(), BatchLimits::default())
        .expect("roster parses");
    let outcome = batch.generate(&assembler(), &mut SeededRandom::new(4), run_time());

    let csv = export::to_csv_string(&outcome.comment_entries()).expect("export");

    let mut reader = csv::Reader::from_reader(csv.as_bytes());
    let headers = reader.headers().expect("headers").clone();
    assert_eq!(
        headers.iter().collect::<Vec<_>>(),
        vec!["Student Name", "Subject", "Year", "Comment", "Generated"]
    );
    let rows: Vec<csv::StringRecord> = reader
        .records()
        .collect::<Result<_, _>>()
        .expect("rows parse back");
    assert_eq!(rows.len(), 3);
    assert!(rows.iter().all(|row| &row[4] == "2025-12-01 09:30"));
    assert_eq!(&rows[0][0], "Aseel");
    assert_eq!(&rows[1][2], "7");
}
