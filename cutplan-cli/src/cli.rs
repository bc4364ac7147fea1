use std::path::PathBuf;

use clap::Parser;
use log::LevelFilter;

#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// JSON instance file with parts and stock
    #[arg(short, long, value_name = "FILE")]
    pub input_file: PathBuf,
    /// Folder the solution JSON is written to
    #[arg(short, long, value_name = "FOLDER")]
    pub solution_folder: PathBuf,
    /// Optional JSON file with a custom PackConfig
    #[arg(short, long, value_name = "FILE")]
    pub config_file: Option<PathBuf>,
    /// Evaluate all sort strategies and keep the best result
    #[arg(short, long)]
    pub optimize: bool,
    #[arg(
        short,
        long,
        value_name = "[off, error, warn, info, debug, trace]",
        default_value = "info"
    )]
    pub log_level: LevelFilter,
}
