//! CSV export of sampled curves for external charting tools.

use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};

use super::types::Curve;

/// Write `curve` as CSV: a header of the swept input followed by the series
/// names, then one row per sample. Excluded samples keep their x value and
/// leave the series cells empty.
pub fn write_csv<W: Write>(curve: &Curve, writer: W) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);

    let mut header = vec![curve.kind.swept_input().name()];
    header.extend_from_slice(curve.series_names());
    wtr.write_record(&header)
        .context("failed to write curve header")?;

    let width = curve.series_names().len();
    for sample in &curve.samples {
        let mut record = Vec::with_capacity(width + 1);
        record.push(sample.x.to_string());
        match &sample.values {
            Some(values) => record.extend(values.iter().map(|v| v.to_string())),
            None => record.extend(std::iter::repeat(String::new()).take(width)),
        }
        wtr.write_record(&record)
            .with_context(|| format!("failed to write sample at x={}", sample.x))?;
    }

    wtr.flush().context("failed to flush curve csv")?;
    Ok(())
}

pub fn write_csv_file(curve: &Curve, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let file = std::fs::File::create(path)
        .with_context(|| format!("failed to create {}", path.display()))?;
    write_csv(curve, file)
}
