//! `HouseholdPolicy` — the seam every household-level modifier plugs into.
//!
//! Policies are composable: chain them with [`HouseholdPolicyExt::then`] to
//! apply several independent rules in sequence.

use pam_core::UniformSource;
use pam_population::Household;

use crate::{PolicyResult, RemoveActivity};

// ── Trait ─────────────────────────────────────────────────────────────────────

/// A mutation applied to one household at a time.
///
/// # Contract
///
/// - Must be deterministic given the same `rng` draws.
/// - Must not touch other households or perform I/O.
/// - Implementations must be `Send + Sync` (shared across Rayon threads).
pub trait HouseholdPolicy: Send + Sync {
    /// Mutate `household` in place.  Returns the number of activities
    /// removed.
    fn apply_to(&self, household: &mut Household, rng: &mut dyn UniformSource) -> PolicyResult<usize>;
}

impl HouseholdPolicy for RemoveActivity {
    fn apply_to(&self, household: &mut Household, rng: &mut dyn UniformSource) -> PolicyResult<usize> {
        RemoveActivity::apply_to(self, household, rng)
    }
}

// ── Chained policy ────────────────────────────────────────────────────────────

/// Applies two policies in sequence.
///
/// The second policy sees the household as the first left it, and continues
/// drawing from the same source.  Construct chains with
/// `policy_a.then(policy_b)`.
pub struct ChainedPolicy<A: HouseholdPolicy, B: HouseholdPolicy> {
    first:  A,
    second: B,
}

impl<A: HouseholdPolicy, B: HouseholdPolicy> HouseholdPolicy for ChainedPolicy<A, B> {
    fn apply_to(&self, household: &mut Household, rng: &mut dyn UniformSource) -> PolicyResult<usize> {
        let removed = self.first.apply_to(household, rng)?;
        Ok(removed + self.second.apply_to(household, rng)?)
    }
}

/// Extension trait that adds `.then(other)` to any `HouseholdPolicy`.
pub trait HouseholdPolicyExt: HouseholdPolicy + Sized {
    fn then<B: HouseholdPolicy>(self, other: B) -> ChainedPolicy<Self, B> {
        ChainedPolicy { first: self, second: other }
    }
}

impl<P: HouseholdPolicy + Sized> HouseholdPolicyExt for P {}
