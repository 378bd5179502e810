use crate::demo::{run_catalog, run_demo, run_score, CatalogArgs, DemoArgs, ScoreArgs};
use crate::server;
use career_fit::error::AppError;
use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "Career Fit Assessment",
    about = "Serve and run the CSR career-fit assessment from the command line",
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
    /// Print the question catalog in presentation order
    Catalog(CatalogArgs),
    /// Score a JSON file of responses and print the verdict
    Score(ScoreArgs),
    /// Score a built-in sample respondent and render the report
    Demo(DemoArgs),
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
        Command::Catalog(args) => run_catalog(args),
        Command::Score(args) => run_score(args),
        Command::Demo(args) => run_demo(args),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_serve_without_subcommand() {
        let cli = Cli::try_parse_from(["career-fit-api"]).expect("parses");
        assert!(cli.command.is_none());
    }

    #[test]
    fn score_requires_a_responses_file() {
        assert!(Cli::try_parse_from(["career-fit-api", "score"]).is_err());

        let cli = Cli::try_parse_from([
            "career-fit-api",
            "score",
            "--responses",
            "answers.json",
            "--json",
        ])
        .expect("parses");
        match cli.command {
            Some(Command::Score(args)) => {
                assert_eq!(args.responses.to_string_lossy(), "answers.json");
                assert!(args.json);
                assert!(args.catalog.is_none());
            }
            other => panic!("expected score command, got {other:?}"),
        }
    }
}
