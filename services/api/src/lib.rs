mod infra;
mod routes;
mod server;

use agro_advisor::error::AppError;

pub async fn run() -> Result<(), AppError> {
    server::run().await
}
