use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Directory holding chicago.csv, new_york_city.csv and washington.csv
    #[arg(long, default_value = ".")]
    pub data_dir: PathBuf,

    /// Run a single query for this city instead of the interactive session
    #[arg(long)]
    pub city: Option<String>,

    /// Month filter for a single query (january..june or all)
    #[arg(long, default_value = "all")]
    pub month: String,

    /// Day filter for a single query (monday..sunday or all)
    #[arg(long, default_value = "all")]
    pub day: String,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    pub fn log_filter(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    }
}
