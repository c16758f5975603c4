mod batch;
mod cli;
mod demo;
mod infra;

use credit_card_applications::error::AppError;

pub fn run() -> Result<(), AppError> {
    cli::run()
}
