use std::io::Write;

use gastos_core::CategorizedTransaction;

/// Write the categorized list as CSV: one row per transaction plus the
/// month bucket, mirroring the on-screen table.
pub fn write_csv<W: Write>(
    writer: W,
    transactions: &[CategorizedTransaction],
) -> Result<(), csv::Error> {
    let mut w = csv::Writer::from_writer(writer);
    w.write_record(["fecha", "mes", "descripcion", "categoria", "monto", "archivo"])?;
    for tx in transactions {
        w.write_record([
            tx.date.to_string(),
            tx.month().to_string(),
            tx.description.clone(),
            tx.category.to_string(),
            tx.amount.as_decimal().to_string(),
            tx.source.clone(),
        ])?;
    }
    w.flush()?;
    Ok(())
}

pub fn to_json(transactions: &[CategorizedTransaction]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(transactions)
}
