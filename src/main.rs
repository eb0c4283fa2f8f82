use sales_analysis::{analysis::analyze, parse_sales};

use std::env;
use std::io::stdout;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    init_logging();

    let csv_path = parse_args();
    run(&csv_path)
}

fn parse_args() -> String {
    let args: Vec<String> = env::args().collect();

    match args.len() {
        1 => "data/sales.csv".to_string(),
        2 => args[1].clone(),
        _ => {
            eprintln!("Usage: {} [csv_file]", args[0]);
            eprintln!("  csv_file: Path to CSV sales data file (default: data/sales.csv)");
            std::process::exit(1);
        }
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn run(csv_path: &str) -> anyhow::Result<()> {
    let records = parse_sales(csv_path)?;

    if records.is_empty() {
        println!(
            "File '{}' read successfully, but no valid records were found for analysis.",
            csv_path
        );
        return Ok(());
    }

    let result = analyze(&records);
    result.write_report(stdout(), csv_path)?;

    Ok(())
}
