//! Population-wide application.
//!
//! Households never share plans, so each one is an independent unit of work.
//! [`apply_to_population`] threads one caller-supplied source through every
//! household in order.  [`apply_seeded`] and [`par_apply_seeded`] instead give
//! each household its own [`HouseholdRng`], which makes the result independent
//! of processing order: both produce identical populations for the same seed.
//!
//! All helpers stop at the first failing household (in population order) and
//! report it as [`PolicyError::Household`].

use tracing::info;

use pam_core::{HouseholdRng, UniformSource};
use pam_population::{Household, Population};

use crate::{HouseholdPolicy, PolicyError, PolicyResult};

/// Apply `policy` to every household, drawing from `rng` in population order.
pub fn apply_to_population<P: HouseholdPolicy + ?Sized>(
    policy:     &P,
    population: &mut Population,
    rng:        &mut dyn UniformSource,
) -> PolicyResult<usize> {
    let mut removed = 0;
    for household in population.households_mut() {
        let hid = household.hid;
        removed += policy
            .apply_to(household, rng)
            .map_err(|e| PolicyError::Household { hid, source: Box::new(e) })?;
    }
    info!(population = %population.name, households = population.len(), removed, "applied policy");
    Ok(removed)
}

/// Apply `policy` to every household with a per-household RNG derived from
/// `seed`.
pub fn apply_seeded<P: HouseholdPolicy + ?Sized>(
    policy:     &P,
    population: &mut Population,
    seed:       u64,
) -> PolicyResult<usize> {
    let mut removed = 0;
    for household in population.households_mut() {
        removed += apply_one(policy, household, seed)?;
    }
    info!(population = %population.name, households = population.len(), removed, seed, "applied policy");
    Ok(removed)
}

/// Parallel twin of [`apply_seeded`], one Rayon task per household.
#[cfg(feature = "parallel")]
pub fn par_apply_seeded<P: HouseholdPolicy + ?Sized>(
    policy:     &P,
    population: &mut Population,
    seed:       u64,
) -> PolicyResult<usize> {
    use rayon::prelude::*;

    let results: Vec<PolicyResult<usize>> = population
        .households_slice_mut()
        .par_iter_mut()
        .map(|household| apply_one(policy, household, seed))
        .collect();

    let mut removed = 0;
    for result in results {
        removed += result?;
    }
    info!(population = %population.name, households = population.len(), removed, seed, "applied policy in parallel");
    Ok(removed)
}

fn apply_one<P: HouseholdPolicy + ?Sized>(policy: &P, household: &mut Household, seed: u64) -> PolicyResult<usize> {
    let hid = household.hid;
    let mut rng = HouseholdRng::new(seed, hid);
    policy
        .apply_to(household, &mut rng)
        .map_err(|e| PolicyError::Household { hid, source: Box::new(e) })
}
