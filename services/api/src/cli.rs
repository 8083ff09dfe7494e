use crate::demo::{run_recommend, run_weights, RecommendArgs, WeightsArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use invest_ai::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Property Investment Advisor",
    about = "Run the property recommendation service or exercise it from the command line",
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
    /// Rank a catalog CSV against an investor profile
    Recommend(RecommendArgs),
    /// Derive criteria weights for an investor profile
    Weights(WeightsArgs),
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
        Command::Recommend(args) => run_recommend(args).await,
        Command::Weights(args) => run_weights(args),
    }
}
