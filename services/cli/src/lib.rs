mod cli;
mod demo;
mod infra;

use site_scout::error::AppError;

pub fn run() -> Result<(), AppError> {
    cli::run()
}
