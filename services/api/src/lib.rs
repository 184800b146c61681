mod cli;
mod demo;
mod infra;
mod routes;
mod server;

use spirit_quiz::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
