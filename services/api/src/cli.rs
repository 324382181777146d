use crate::demo::{run_analyse, run_demo, AnalyseArgs, DemoArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use clarion::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Clarion",
    about = "Generate property feasibility scenarios from the command line or over HTTP",
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
    /// Run the scenario engine over a saved project snapshot
    Analyse(AnalyseArgs),
    /// Analyse a built-in sample property
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
        Command::Analyse(args) => run_analyse(args),
        Command::Demo(args) => run_demo(args),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn analyse_accepts_json_and_csv_flags() {
        let cli = Cli::try_parse_from([
            "clarion-api",
            "analyse",
            "--input",
            "project.json",
            "--json",
            "--cashflow-csv",
            "flows.csv",
        ])
        .expect("arguments parse");

        match cli.command {
            Some(Command::Analyse(args)) => {
                assert_eq!(args.input, PathBuf::from("project.json"));
                assert!(args.json);
                assert_eq!(args.cashflow_csv, Some(PathBuf::from("flows.csv")));
            }
            other => panic!("expected analyse command, got {other:?}"),
        }
    }

    #[test]
    fn no_subcommand_defaults_to_serve() {
        let cli = Cli::try_parse_from(["clarion-api"]).expect("arguments parse");
        assert!(cli.command.is_none());
    }
}
