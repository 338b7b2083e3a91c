//! Run every simulation listed in a requests CSV
//!
//! Writes one summary row per request; rejected requests are reported in the
//! output instead of stopping the run.

use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;

use loan_simulator::input::load_requests;
use loan_simulator::report::format_brl;
use loan_simulator::{BatchRunner, BatchTotals, SimulationRequest};

#[derive(Parser)]
#[command(name = "run_batch", version, about = "Run simulations in bulk from a CSV file")]
struct Cli {
    /// Requests CSV (Kind column plus the product fields)
    input: PathBuf,

    /// Summary CSV to write
    #[arg(long, default_value = "batch_simulation_output.csv")]
    output: PathBuf,

    /// Keep the run on a single thread
    #[arg(long)]
    sequential: bool,
}

/// One summary row per request
#[derive(Debug, Serialize)]
struct SummaryRow {
    #[serde(rename = "Row")]
    row: usize,
    #[serde(rename = "Kind")]
    kind: &'static str,
    #[serde(rename = "Months")]
    months: Option<u32>,
    #[serde(rename = "Financed")]
    financed: Option<String>,
    #[serde(rename = "MonthlyPayment")]
    monthly_payment: Option<String>,
    #[serde(rename = "Error")]
    error: Option<String>,
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();
    if let Err(e) = run(&cli) {
        eprintln!("error: {:#}", e);
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let start = Instant::now();
    println!("Loading requests from {}...", cli.input.display());

    let requests: Vec<SimulationRequest> = load_requests(&cli.input)
        .with_context(|| format!("Failed to load requests from {}", cli.input.display()))?;
    println!("Loaded {} requests in {:?}", requests.len(), start.elapsed());

    let runner = if cli.sequential {
        BatchRunner::sequential()
    } else {
        BatchRunner::new()
    };

    let run_start = Instant::now();
    let results = runner.run(&requests);
    println!("Simulations complete in {:?}", run_start.elapsed());

    let mut writer = csv::Writer::from_path(&cli.output)
        .with_context(|| format!("Failed to create {}", cli.output.display()))?;

    for (index, (request, result)) in requests.iter().zip(&results).enumerate() {
        let row = match result {
            Ok(outcome) => SummaryRow {
                row: index + 1,
                kind: outcome.kind().code(),
                months: Some(outcome.term_months()),
                financed: Some(format!("{:.2}", outcome.financed_amount())),
                monthly_payment: Some(format!("{:.2}", outcome.monthly_payment())),
                error: None,
            },
            Err(e) => SummaryRow {
                row: index + 1,
                kind: request.kind().code(),
                months: None,
                financed: None,
                monthly_payment: None,
                error: Some(e.to_string()),
            },
        };
        writer.serialize(row)?;
    }
    writer.flush()?;

    println!("Output written to {}", cli.output.display());

    let totals = BatchTotals::from_results(&results);
    println!("\nBatch Summary:");
    println!("  Simulations:     {}", totals.simulations);
    println!("  Rejected:        {}", totals.failures);
    println!("  Total financed:  {}", format_brl(totals.total_financed));
    println!("  Total monthly:   {}", format_brl(totals.total_monthly_payment));
    println!("\nTotal time: {:?}", start.elapsed());

    Ok(())
}
