use std::path::Path;

use crate::error::Result;
use crate::models::{Nutrient, Row};

/// Write a generated table to a CSV file with a header row.
///
/// Days are numbered from 1.
pub fn export_csv(rows: &[Row], path: &Path) -> Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;

    let mut header = vec!["day"];
    header.extend(Nutrient::ALL.iter().map(|n| n.key()));
    wtr.write_record(&header)?;

    for (i, row) in rows.iter().enumerate() {
        let mut record = vec![(i + 1).to_string()];
        record.extend(row.to_array().iter().map(|v| v.to_string()));
        wtr.write_record(&record)?;
    }

    wtr.flush()?;
    log::info!("exported {} rows to {}", rows.len(), path.display());
    Ok(())
}
