use crate::commands::{run_batch, run_generate, run_subjects, BatchArgs, GenerateArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use report_comments::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Report Comment Generator",
    about = "Generate student report comments from the command line or over HTTP",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Generate a single comment and print it
    Generate(GenerateArgs),
    /// Generate comments for every row of a CSV file
    Batch(BatchArgs),
    /// List the subject and year tracks in the phrase catalog
    Subjects,
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Generate(args) => run_generate(args),
        Command::Batch(args) => run_batch(args),
        Command::Subjects => run_subjects(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn serve_is_the_default_command() {
        let cli = Cli::try_parse_from(["report-comments-api"]).expect("parses");
        assert!(cli.command.is_none());
    }

    #[test]
    fn generate_scores_default_to_the_middle_band() {
        let cli = Cli::try_parse_from([
            "report-comments-api",
            "generate",
            "--subject",
            "Maths",
            "--year",
            "7",
            "--name",
            "Omar",
        ])
        .expect("parses");

        let Some(Command::Generate(args)) = cli.command else {
            panic!("expected generate command");
        };
        assert_eq!(args.attitude, 75.0);
        assert_eq!(args.gender, "");
        assert!(args.seed.is_none());
    }
}
