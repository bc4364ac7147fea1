use std::fs;
use std::fs::File;
use std::io::BufReader;

use anyhow::{Context, Result};
use clap::Parser;
use cutplan::PackConfig;
use log::{info, warn};

use crate::cli::Cli;
use crate::io::EPOCH;

mod cli;
mod io;

fn main() -> Result<()> {
    let args = Cli::parse();
    io::init_logger(args.log_level)?;

    let config = match &args.config_file {
        None => {
            warn!("no config file provided, using defaults (see --config-file)");
            PackConfig::default()
        }
        Some(config_file) => {
            let file = File::open(config_file)
                .with_context(|| format!("could not open config file: {config_file:?}"))?;
            let reader = BufReader::new(file);
            serde_json::from_reader(reader).context("incorrect config file format")?
        }
    };
    info!("running with {config:?}");

    let ext_instance = io::read_instance(&args.input_file)?;
    let (parts, stock) = cutplan::io::import(&ext_instance);

    if !args.solution_folder.exists() {
        fs::create_dir_all(&args.solution_folder).with_context(|| {
            format!("could not create solution folder: {:?}", args.solution_folder)
        })?;
    }

    let start = std::time::Instant::now();
    let (layout, strategy_used) = if args.optimize {
        let optimized = cutplan::pack_optimized(&parts, &stock, &config)?;
        (optimized.layout, Some(optimized.strategy_used))
    } else {
        (cutplan::pack(&parts, &stock, &config)?, None)
    };

    info!(
        "packed {} instances onto {} sheets ({} unplaced) in {:.3}ms",
        layout.placed_count(),
        layout.sheets.len(),
        layout.unplaced_count(),
        start.elapsed().as_secs_f64() * 1000.0
    );

    let solution = cutplan::io::export(
        &ext_instance.name,
        layout,
        config,
        strategy_used,
        EPOCH.elapsed(),
    );

    let input_stem = args
        .input_file
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("instance");
    let solution_path = args.solution_folder.join(format!("sol_{input_stem}.json"));
    io::write_solution(&solution, &solution_path)?;

    Ok(())
}
