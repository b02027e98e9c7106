use crate::errors::{AppError, AppResult};
use crate::export::{WeekExport, notify_export_success};
use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

/// JSON pretty-printed, to `path` or stdout.
pub fn write_json(week: &WeekExport, path: Option<&Path>) -> AppResult<()> {
    let json_data = serde_json::to_string_pretty(week)
        .map_err(|e| AppError::Serialization(format!("JSON serialization error: {e}")))?;

    match path {
        Some(p) => {
            let mut file = File::create(p)?;
            file.write_all(json_data.as_bytes())?;
            notify_export_success("JSON", p);
        }
        None => println!("{json_data}"),
    }
    Ok(())
}

/// CSV with header (from serde field names), to `path` or stdout.
pub fn write_csv(week: &WeekExport, path: Option<&Path>) -> AppResult<()> {
    match path {
        Some(p) => {
            let file = File::create(p)?;
            serialize_csv(week, file)?;
            notify_export_success("CSV", p);
        }
        None => serialize_csv(week, io::stdout().lock())?,
    }
    Ok(())
}

fn serialize_csv<W: Write>(week: &WeekExport, out: W) -> AppResult<()> {
    let mut wtr = csv::Writer::from_writer(out);

    for rec in week.records() {
        wtr.serialize(rec)
            .map_err(|e| AppError::Serialization(format!("CSV write error: {e}")))?;
    }

    wtr.flush()?;
    Ok(())
}
