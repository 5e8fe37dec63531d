//! `pam-output` — writers for flattened plan logs.
//!
//! | Backend | Files created                         |
//! |---------|---------------------------------------|
//! | CSV     | `activity_log.csv`, `leg_log.csv`     |
//!
//! Backends implement [`LogWriter`]; [`write_population_logs`] flattens a
//! population with `pam_population::{activity_log, leg_log}` and drives any
//! writer.
//!
//! # Usage
//!
//! ```rust,ignore
//! use pam_output::{CsvLogWriter, write_population_logs};
//!
//! let mut writer = CsvLogWriter::new(Path::new("./output"))?;
//! let (acts, legs) = write_population_logs(&mut writer, &population)?;
//! ```

pub mod csv;
pub mod error;
pub mod writer;


pub use crate::csv::CsvLogWriter;
pub use error::{OutputError, OutputResult};
pub use writer::{LogWriter, write_population_logs};
