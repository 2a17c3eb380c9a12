use crate::draw::{run_draw, DrawArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use pool_draw::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "pool-draw",
    about = "Draw tournament pools with last year's finalists spread across them",
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
    /// Print the pools for a local roster export
    Draw(DrawArgs),
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
        Command::Draw(args) => run_draw(args).await,
    }
}
