use crate::OutputFormat;
use anyhow::Context;
use log::info;
use serde::Serialize;
use std::fs::File;
use std::io::{self, BufWriter, Write};

/// Stdout, or a freshly created file at `path`.
pub fn open_output(path: Option<&str>) -> anyhow::Result<Box<dyn Write>> {
    match path {
        Some(path) => {
            let file = File::create(path).with_context(|| format!("creating {path}"))?;
            Ok(Box::new(BufWriter::new(file)))
        }
        None => Ok(Box::new(io::stdout().lock())),
    }
}

/// Write `value` as pretty JSON, or `rows` as CSV with a header line.
pub fn write_records<T, R, W>(
    writer: W,
    format: OutputFormat,
    value: &T,
    rows: &[R],
) -> anyhow::Result<()>
where
    T: Serialize + ?Sized,
    R: Serialize,
    W: Write,
{
    match format {
        OutputFormat::Json => {
            let mut writer = writer;
            serde_json::to_writer_pretty(&mut writer, value)?;
            writeln!(writer)?;
            writer.flush()?;
        }
        OutputFormat::Csv => {
            let mut csv_writer = csv::Writer::from_writer(writer);
            for row in rows {
                csv_writer.serialize(row)?;
            }
            csv_writer.flush()?;
        }
    }
    info!("wrote {} records as {:?}", rows.len(), format);
    Ok(())
}
