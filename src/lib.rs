pub mod analysis;
pub mod chat;
mod cli;
pub mod config;
mod demo;
pub mod error;
mod infra;
pub mod routes;
mod server;
pub mod session;
pub mod telemetry;

use error::AppError;

pub use routes::session_router;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
