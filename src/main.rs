mod adif;
mod band;
mod brackets;
mod cli;
mod csv_out;
mod diag;
mod display;
mod errors;
mod loader;
mod model;
mod parse_line;
mod report;
mod validate;
mod write_file;

use crate::errors::AppError;
use env_logger::Env;
use log::{info, warn};
use std::fs;

fn setup_logging(level: &str) {
    let env = Env::default().filter_or("RUST_LOG", match level {
        "essential" => "info",
        "debug" => "debug",
        "trace" => "trace",
        "warn" => "warn",
        "error" => "error",
        _ => "info",
    });
    env_logger::Builder::from_env(env).init();
}

fn main() -> anyhow::Result<()> {
    let args = cli::parse_cli();
    setup_logging(&args.log_level);

    let text = fs::read_to_string(&args.input)
        .map_err(|e| AppError::IO(format!("read {}: {}", args.input.display(), e)))?;

    let parsed = loader::load_log(&text);
    for issue in &parsed.issues {
        warn!("line {}: {}", issue.line_no, issue.message);
    }
    info!(
        "parsed {} QSOs from {}",
        parsed.records.len(),
        args.input.display()
    );

    if let Some(adif_path) = &args.adif {
        adif::validate_for_adif(&parsed.records, args.wwff, args.sota)?;
        let lines = adif::build_adif(&parsed.records, args.wwff, args.sota)?;
        write_file::write_lines(adif_path, &lines)?;
    }

    if let Some(csv_path) = &args.csv {
        // The SOTA upload format always needs the activator's summit.
        adif::validate_for_adif(&parsed.records, false, true)?;
        csv_out::write_csv(csv_path, &parsed.records)?;
    }

    if args.adif.is_none() && args.csv.is_none() {
        display::display_log(&parsed.records);
    }

    Ok(())
}
