// src/export/csv.rs

use crate::core::tracker::TrackerSnapshot;
use crate::errors::{AppError, AppResult};
use crate::models::record_type::RecordType;
use crate::utils::date::format_millis;
use crate::utils::formatting::days_label;
use csv::{QuoteStyle, Terminator, WriterBuilder};

pub const HEADERS: [&str; 3] = ["Record Type", "Timestamp", "Date/Time"];

fn event_row(kind: RecordType, ts: i64, date_format: &str) -> [String; 3] {
    [
        kind.label().to_string(),
        ts.to_string(),
        format_millis(ts, date_format),
    ]
}

/// Render the export table: header, water rows in stored order, the last
/// incident if any, then the high score summary. Every field is quoted.
pub fn build_export(snapshot: &TrackerSnapshot, date_format: &str) -> AppResult<String> {
    let mut wtr = WriterBuilder::new()
        .quote_style(QuoteStyle::Always)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    wtr.write_record(HEADERS)?;

    for ts in &snapshot.water_history {
        wtr.write_record(event_row(RecordType::Water, *ts, date_format))?;
    }

    if let Some(ts) = snapshot.last_incident {
        wtr.write_record(event_row(RecordType::LastIncident, ts, date_format))?;
    }

    wtr.write_record([
        RecordType::HighScore.label().to_string(),
        snapshot.high_score.to_string(),
        days_label(snapshot.high_score),
    ])?;

    let bytes = wtr
        .into_inner()
        .map_err(|e| AppError::Export(format!("CSV flush error: {}", e.error())))?;

    String::from_utf8(bytes).map_err(|e| AppError::Export(format!("CSV encoding error: {e}")))
}
