//! `pam-policy` — probabilistic plan modifications for households.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                     |
//! |-------------|--------------------------------------------------------------|
//! | [`scope`]   | `Scope` (`activity` / `person` / `household`)                |
//! | [`config`]  | `RemoveActivityConfig` (serde-loadable)                      |
//! | [`remove`]  | `RemoveActivity` policy and its sampling rules               |
//! | [`policy`]  | `HouseholdPolicy` trait, `ChainedPolicy`, `.then` chaining   |
//! | [`apply`]   | population-wide helpers, seeded and (optionally) parallel    |
//! | [`error`]   | `PolicyError`, `PolicyResult<T>`                             |
//!
//! # Feature flags
//!
//! | Flag       | Effect                                                    |
//! |------------|-----------------------------------------------------------|
//! | `parallel` | Adds `par_apply_seeded` (Rayon, one task per household).  |
//!
//! # Usage
//!
//! ```rust,ignore
//! use pam_core::SimRng;
//! use pam_policy::{RemoveActivity, RemoveActivityConfig, apply_to_population};
//!
//! let policy = RemoveActivity::new(
//!     RemoveActivityConfig::new(["education"], 0.5).policy_type("household"),
//! )?
//! .with_condition("age", |v| v.as_int().is_some_and(|age| age < 18));
//!
//! let mut rng = SimRng::new(42);
//! apply_to_population(&policy, &mut population, &mut rng)?;
//! ```

pub mod apply;
pub mod config;
pub mod error;
pub mod policy;
pub mod remove;
pub mod scope;


pub use apply::{apply_seeded, apply_to_population};
pub use config::RemoveActivityConfig;
pub use error::{PolicyError, PolicyResult};
pub use policy::{ChainedPolicy, HouseholdPolicy, HouseholdPolicyExt};
pub use remove::{AttributePredicate, RemoveActivity};
pub use scope::Scope;

#[cfg(feature = "parallel")]
pub use apply::par_apply_seeded;
