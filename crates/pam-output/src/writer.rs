//! The `LogWriter` trait implemented by log backends.

use pam_population::{ActivityRecord, LegRecord, Population, activity_log, leg_log};

use crate::OutputResult;

/// Sink for flattened activity and leg logs.
pub trait LogWriter {
    /// Write a batch of activity records.
    fn write_activities(&mut self, rows: &[ActivityRecord]) -> OutputResult<()>;

    /// Write a batch of leg records.
    fn write_legs(&mut self, rows: &[LegRecord]) -> OutputResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Idempotent; safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}

/// Flatten `population` and write both logs, then finish the writer.
///
/// Returns the number of activity and leg rows written.
pub fn write_population_logs<W: LogWriter + ?Sized>(
    writer:     &mut W,
    population: &Population,
) -> OutputResult<(usize, usize)> {
    let activities = activity_log(population);
    let legs = leg_log(population);
    writer.write_activities(&activities)?;
    writer.write_legs(&legs)?;
    writer.finish()?;
    Ok((activities.len(), legs.len()))
}
