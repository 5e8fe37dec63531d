//! `pam-population` — people, households, and the population that owns them.
//!
//! # Crate layout
//!
//! | Module          | Contents                                                 |
//! |-----------------|----------------------------------------------------------|
//! | [`attributes`]  | `AttributeValue`, `Attributes`                           |
//! | [`person`]      | `Person` (attributes + home area + `Plan`)               |
//! | [`household`]   | `Household` (insertion-ordered people)                   |
//! | [`population`]  | `Population`, `PopulationStats`                          |
//! | [`log`]         | `activity_log`, `leg_log` flattened records              |
//! | [`loader`]      | CSV plan and attribute loaders                           |
//! | [`error`]       | `PopulationError`, `PopulationResult<T>`                 |
//!
//! Every container iterates in insertion order, so a population traversed
//! twice yields people (and random draws consumed against them) in the same
//! sequence.

pub mod attributes;
pub mod error;
pub mod household;
pub mod loader;
pub mod log;
pub mod person;
pub mod population;

#[cfg(test)]
mod tests;

pub use attributes::{AttributeValue, Attributes};
pub use error::{PopulationError, PopulationResult};
pub use household::Household;
pub use loader::{load_attributes_csv, load_attributes_reader, load_population_csv, load_population_reader};
pub use log::{ActivityRecord, LegRecord, activity_log, leg_log};
pub use person::Person;
pub use population::{Population, PopulationStats};
