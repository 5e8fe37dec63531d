//! `pam-core` — foundational types for the `pam` activity-plan engine.
//!
//! This crate is a dependency of every other `pam-*` crate.  It has no
//! `pam-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `HouseholdId`, `PersonId`, `AreaId`                   |
//! | [`time`]        | `TimePoint`, `DAY_START`, `END_OF_DAY`, `DayClock`    |
//! | [`rng`]         | `UniformSource`, `SimRng`, `HouseholdRng`, `SequenceSource` |
//! | [`transport`]   | `TransportMode` enum                                  |
//! | [`error`]       | `CoreError`, `CoreResult`                             |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod error;
pub mod ids;
pub mod rng;
pub mod time;
pub mod transport;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{CoreError, CoreResult};
pub use ids::{AreaId, HouseholdId, PersonId};
pub use rng::{HouseholdRng, SequenceSource, SimRng, UniformSource};
pub use time::{DAY_START, DayClock, END_OF_DAY, MINUTES_PER_DAY, TimePoint};
pub use transport::TransportMode;
