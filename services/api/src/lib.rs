mod cli;
mod draw;
mod infra;
mod routes;
mod server;

use pool_draw::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
