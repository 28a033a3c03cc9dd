use crate::infra::{random_source, CommentService};
use chrono::Local;
use clap::Args;
use report_comments::config::AppConfig;
use report_comments::error::AppError;
use report_comments::workflows::batch::{
    export, strip_unsafe, student_name, BatchLimits, CommentBatch, ADDENDUM_MAX_CHARS,
};
use report_comments::workflows::comments::{CommentRequest, SubjectKey};
use std::fs::File;
use std::io::{self, BufWriter};
use std::path::PathBuf;

#[derive(Args, Debug)]
pub(crate) struct GenerateArgs {
    /// Subject name as listed by `subjects`
    #[arg(long)]
    pub(crate) subject: String,
    /// Year group
    #[arg(long)]
    pub(crate) year: u8,
    /// Student first name
    #[arg(long)]
    pub(crate) name: String,
    /// Student gender (male, female, or anything else for they/their)
    #[arg(long, default_value = "")]
    pub(crate) gender: String,
    /// Attitude score (40-90)
    #[arg(long, default_value_t = 75.0)]
    pub(crate) attitude: f64,
    /// Achievement score (40-90)
    #[arg(long, default_value_t = 75.0)]
    pub(crate) achievement: f64,
    /// Target score (40-90)
    #[arg(long, default_value_t = 75.0)]
    pub(crate) target: f64,
    /// Free-text sentence appended after the closing
    #[arg(long)]
    pub(crate) comment: Option<String>,
    /// Seed for reproducible phrase selection
    #[arg(long)]
    pub(crate) seed: Option<u64>,
}

#[derive(Args, Debug)]
pub(crate) struct BatchArgs {
    /// CSV file with a "Student Name" column
    #[arg(long)]
    pub(crate) input: PathBuf,
    /// Where to write the comment CSV (defaults to stdout)
    #[arg(long)]
    pub(crate) output: Option<PathBuf>,
    /// Seed for reproducible phrase selection
    #[arg(long)]
    pub(crate) seed: Option<u64>,
}

pub(crate) fn run_generate(args: GenerateArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    let service = CommentService::from_config(&config)?;
    let seed = args.seed;
    let request = comment_request(args, &service.limits)?;

    let mut random = random_source(seed);
    let comment = service.assembler.generate(&request, random.as_mut())?;
    println!("{}", comment.text);
    println!("({} characters)", comment.char_count);
    Ok(())
}

fn comment_request(args: GenerateArgs, limits: &BatchLimits) -> Result<CommentRequest, AppError> {
    Ok(CommentRequest {
        subject: SubjectKey::new(&args.subject, args.year),
        student_name: student_name(&args.name, limits.name_max_len)?,
        gender: args.gender,
        attitude: args.attitude,
        achievement: args.achievement,
        target: args.target,
        addendum: args
            .comment
            .as_deref()
            .map(|comment| strip_unsafe(comment, ADDENDUM_MAX_CHARS)),
    })
}

pub(crate) fn run_batch(args: BatchArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    let service = CommentService::from_config(&config)?;

    let batch = CommentBatch::from_path(&args.input, service.limits)?;
    let mut random = random_source(args.seed);
    let outcome = batch.generate(
        &service.assembler,
        random.as_mut(),
        Local::now().naive_local(),
    );

    for failure in &outcome.failures {
        eprintln!("row {}: {}", failure.row, failure.message);
    }
    if outcome.skipped > 0 {
        eprintln!(
            "{} rows skipped beyond the limit of {}",
            outcome.skipped, service.limits.max_rows
        );
    }

    let entries = outcome.comment_entries();
    match args.output {
        Some(path) => {
            let writer = BufWriter::new(File::create(&path)?);
            export::write_csv(writer, &entries)?;
            eprintln!("{} comments written to {}", entries.len(), path.display());
        }
        None => export::write_csv(io::stdout().lock(), &entries)?,
    }

    Ok(())
}

pub(crate) fn run_subjects() -> Result<(), AppError> {
    let config = AppConfig::load()?;
    let service = CommentService::from_config(&config)?;

    for key in service.assembler.bank().tracks() {
        println!("{} (Year {})", key.subject(), key.year());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(name: &str) -> GenerateArgs {
        GenerateArgs {
            subject: "English".to_string(),
            year: 5,
            name: name.to_string(),
            gender: "female".to_string(),
            attitude: 75.0,
            achievement: 80.0,
            target: 85.0,
            comment: Some("<b>great</b> reader!".to_string()),
            seed: None,
        }
    }

    #[test]
    fn requests_carry_cleaned_names_and_addenda() {
        let request = comment_request(args(" aseel "), &BatchLimits::default()).expect("request");
        assert_eq!(request.student_name, "Aseel");
        assert_eq!(request.addendum.as_deref(), Some("bgreatb reader"));
        assert_eq!(request.subject, SubjectKey::new("english", 5));
    }

    #[test]
    fn names_without_letters_are_rejected() {
        let error = comment_request(args("<>"), &BatchLimits::default())
            .expect_err("empty name");
        assert!(matches!(error, AppError::Name(_)));
    }
}
