use crate::export::model::EntryExport;
use csv::Writer;

/// Write the entry rows as CSV.
pub fn write_csv(path: &str, rows: &[EntryExport]) -> std::io::Result<()> {
    let mut wtr = Writer::from_path(path)?;

    for row in rows {
        wtr.serialize(row)?;
    }

    wtr.flush()?;
    Ok(())
}
