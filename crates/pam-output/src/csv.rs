//! CSV log backend.
//!
//! Creates two files in the configured output directory:
//! - `activity_log.csv`
//! - `leg_log.csv`
//!
//! Times are written as minutes since the start of the day; the end of the
//! day is written as `1440`.

use std::fs::File;
use std::path::Path;

use csv::Writer;
use tracing::debug;

use pam_population::{ActivityRecord, LegRecord};

use crate::OutputResult;
use crate::writer::LogWriter;

pub const ACTIVITY_HEADER: [&str; 8] = ["hid", "pid", "seq", "act", "area", "start", "end", "duration"];
pub const LEG_HEADER: [&str; 9] =
    ["hid", "pid", "seq", "mode", "start_area", "end_area", "start", "end", "duration"];

/// Writes activity and leg logs to two CSV files.
pub struct CsvLogWriter {
    activities: Writer<File>,
    legs:       Writer<File>,
    rows:       usize,
    finished:   bool,
}

impl CsvLogWriter {
    /// Open (or create) the two CSV files in `dir` and write the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut activities = Writer::from_path(dir.join("activity_log.csv"))?;
        activities.write_record(ACTIVITY_HEADER)?;

        let mut legs = Writer::from_path(dir.join("leg_log.csv"))?;
        legs.write_record(LEG_HEADER)?;

        Ok(Self { activities, legs, rows: 0, finished: false })
    }
}

impl LogWriter for CsvLogWriter {
    fn write_activities(&mut self, rows: &[ActivityRecord]) -> OutputResult<()> {
        for row in rows {
            self.activities.write_record(&[
                row.hid.0.to_string(),
                row.pid.0.to_string(),
                row.seq.to_string(),
                row.act.clone(),
                row.area.0.to_string(),
                row.start.resolved_minutes().to_string(),
                row.end.resolved_minutes().to_string(),
                row.duration.to_string(),
            ])?;
        }
        self.rows += rows.len();
        Ok(())
    }

    fn write_legs(&mut self, rows: &[LegRecord]) -> OutputResult<()> {
        for row in rows {
            self.legs.write_record(&[
                row.hid.0.to_string(),
                row.pid.0.to_string(),
                row.seq.to_string(),
                row.mode.as_str().to_string(),
                row.start_area.0.to_string(),
                row.end_area.0.to_string(),
                row.start.resolved_minutes().to_string(),
                row.end.resolved_minutes().to_string(),
                row.duration.to_string(),
            ])?;
        }
        self.rows += rows.len();
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.activities.flush()?;
        self.legs.flush()?;
        debug!(rows = self.rows, "flushed plan logs");
        Ok(())
    }
}
