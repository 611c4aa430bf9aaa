use crate::demo::{run_demo, run_questions, run_score, run_types, DemoArgs, ScoreArgs, TypesArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use hps::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Hormone Personality System",
    about = "Serve the HPS quiz API or score answers from the command line",
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
    /// Print the question battery in presentation order
    Questions,
    /// Print the personality type catalog, or one profile by code
    Types(TypesArgs),
    /// Score a set of answers and print the resulting type
    Score(ScoreArgs),
    /// Run sample respondents through the full submit and lookup flow
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
        Command::Questions => run_questions(),
        Command::Types(args) => run_types(args),
        Command::Score(args) => run_score(args),
        Command::Demo(args) => run_demo(args),
    }
}
