mod cli;
mod commands;
mod infra;

use occumed::error::AppError;

pub fn run() -> Result<(), AppError> {
    cli::run()
}
