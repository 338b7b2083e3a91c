//! Semicolon-delimited schedule export

use std::io::Write;
use std::path::Path;

use serde::Serialize;

use crate::amortization::PaymentSchedule;
use crate::error::SimulationResult;

/// File name used when a product has no specific export name
pub const DEFAULT_EXPORT_FILE: &str = "amortizacao.csv";

/// Export row; figures are pre-rendered with two decimals
#[derive(Debug, Serialize)]
struct CsvRow {
    #[serde(rename = "Parcela")]
    index: u32,
    #[serde(rename = "Amortizacao")]
    amortization: String,
    #[serde(rename = "Juros")]
    interest: String,
    #[serde(rename = "Saldo")]
    balance: String,
}

/// Write the schedule as `Parcela;Amortizacao;Juros;Saldo` rows
pub fn write_schedule_csv<W: Write>(schedule: &PaymentSchedule, writer: W) -> SimulationResult<()> {
    let mut csv_writer = csv::WriterBuilder::new()
        .delimiter(b';')
        .from_writer(writer);

    for installment in schedule {
        csv_writer.serialize(CsvRow {
            index: installment.index,
            amortization: format!("{:.2}", installment.amortization),
            interest: format!("{:.2}", installment.interest),
            balance: format!("{:.2}", installment.remaining_balance),
        })?;
    }

    // Header only, for an empty schedule
    if schedule.is_empty() {
        csv_writer.write_record(["Parcela", "Amortizacao", "Juros", "Saldo"])?;
    }

    csv_writer.flush()?;
    Ok(())
}

/// Write the schedule to a file
pub fn export_schedule<P: AsRef<Path>>(schedule: &PaymentSchedule, path: P) -> SimulationResult<()> {
    let file = std::fs::File::create(path.as_ref())?;
    write_schedule_csv(schedule, file)?;
    log::info!(
        "Exported {} installments to {}",
        schedule.len(),
        path.as_ref().display()
    );
    Ok(())
}
