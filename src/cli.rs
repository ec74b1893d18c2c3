use crate::demo::{run_ask, run_demo, run_report, AskArgs, DemoArgs, ReportArgs};
use crate::error::AppError;
use crate::server;
use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "ClauseWise",
    about = "Serve and demonstrate the ClauseWise contract explainer from the command line",
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
    /// Walk through upload, results, chat and read-aloud in the terminal
    Demo(DemoArgs),
    /// Print the analysis results page for the sample NDA
    Report(ReportArgs),
    /// Ask the contract assistant a single question
    Ask(AskArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
    /// Override the simulated analysis delay, in milliseconds
    #[arg(long)]
    pub(crate) analysis_delay_ms: Option<u64>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Demo(args) => run_demo(args).await,
        Command::Report(args) => run_report(args),
        Command::Ask(args) => run_ask(args),
    }
}
