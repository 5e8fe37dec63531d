//! `pam-plan` — a person's day as alternating activities and legs.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                   |
//! |--------------|------------------------------------------------------------|
//! | [`element`]  | `Activity`, `Leg`, `PlanElement`, `ElementKind`            |
//! | [`plan`]     | `Plan`, `Removal`, `GapKind`                               |
//! | [`error`]    | `PlanError`, `PlanResult<T>`                               |
//!
//! # Plan shape
//!
//! ```text
//! Activity ─ Leg ─ Activity ─ Leg ─ … ─ Activity
//! 00:00                                   END_OF_DAY
//! ```
//!
//! A valid plan has odd length, alternates strictly, starts at `DAY_START`,
//! ends at `END_OF_DAY`, and every element starts exactly where the previous
//! one ended.  [`Plan::validate`] checks all of this; the mutation
//! primitives ([`Plan::remove_activity`], [`Plan::fill_plan`],
//! [`Plan::simplify`]) restore it after activities are dropped.

pub mod element;
pub mod error;
pub mod plan;


pub use element::{Activity, ElementKind, Leg, PlanElement};
pub use error::{PlanError, PlanResult};
pub use plan::{GapKind, Plan, Removal};
