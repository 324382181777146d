use super::results::{CashFlowPoint, ScenarioId};
use std::io::Write;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("failed to write cash-flow export: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to encode cash-flow export: {0}")]
    Csv(#[from] csv::Error),
}

/// Writes `year,scenario_a,scenario_b,scenario_c` rows, one per point.
pub fn write_cash_flow_csv<W: Write>(writer: W, points: &[CashFlowPoint]) -> Result<(), ExportError> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer.write_record(["year", "scenario_a", "scenario_b", "scenario_c"])?;
    for point in points {
        let mut record = vec![point.year.to_string()];
        record.extend(ScenarioId::ordered().map(|id| format!("{:.2}", point.value(id))));
        csv_writer.write_record(&record)?;
    }
    csv_writer.flush()?;
    Ok(())
}

pub fn export_cash_flow_csv(path: impl AsRef<Path>, points: &[CashFlowPoint]) -> Result<(), ExportError> {
    let file = std::fs::File::create(path)?;
    write_cash_flow_csv(file, points)
}
