use crate::cli::Cli;
use crate::config::DataConfig;
use crate::errors::AppResult;
use crate::models::calendar::{DayFilter, MonthFilter};
use crate::models::city::City;
use crate::services::session::{Session, run_query, write_query_report};
use clap::Parser;
use log::info;
use std::io::{self, Write};

mod cli;
mod config;
mod consts;
mod errors;
mod models;
mod services;
mod state;
#[cfg(test)]
mod test_support;

fn main() -> AppResult<()> {
    let args = Cli::parse();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(args.log_filter()))
        .init();
    info!("Application started");

    let config = DataConfig::new(args.data_dir.clone());

    match &args.city {
        Some(city) => run_once(&config, city, &args.month, &args.day),
        None => {
            let stdin = io::stdin();
            let stdout = io::stdout();
            Session::new(config, stdin.lock(), stdout.lock()).run()
        }
    }
}

/// Non-interactive single query; any failure becomes the process exit status.
fn run_once(config: &DataConfig, city: &str, month: &str, day: &str) -> AppResult<()> {
    let city: City = city.parse()?;
    let month: MonthFilter = month.parse()?;
    let day: DayFilter = day.parse()?;

    let dataset = run_query(config, city, month, day)?;

    let out = io::stdout();
    let mut handle = out.lock();
    write_query_report(&mut handle, &dataset)?;
    handle.flush()?;
    Ok(())
}
