//! `RemoveActivity` — probabilistic removal of activities from plans.
//!
//! # Sampling and effect
//!
//! Two independent settings decide what a policy does:
//!
//! | Setting             | Meaning                                          |
//! |---------------------|--------------------------------------------------|
//! | `probability_level` | unit that gets one Bernoulli draw                |
//! | `policy_type`       | unit whose matching activities a hit removes     |
//!
//! Only relevant people (see [`RemoveActivity::is_relevant`]) and their
//! matching activities are sampled.  Draws are taken from the injected
//! [`UniformSource`] in traversal order: people in household order, then
//! activities in plan order.  All draws for a person happen before their plan
//! is touched, so plan indices stay valid.
//!
//! A household-type policy stops drawing at its first hit and then removes
//! every matching activity of every member, exactly once.

use std::fmt;

use tracing::{debug, trace};

use pam_core::UniformSource;
use pam_plan::{Activity, Plan};
use pam_population::{AttributeValue, Household, Person};

use crate::{PolicyError, PolicyResult, RemoveActivityConfig, Scope};

/// Predicate over one person attribute.
pub type AttributePredicate = Box<dyn Fn(&AttributeValue) -> bool + Send + Sync>;

pub struct RemoveActivity {
    activities:        Vec<String>,
    probability:       f64,
    policy_type:       Scope,
    probability_level: Scope,
    conditions:        Vec<(String, AttributePredicate)>,
    strict:            bool,
    default_activity:  String,
}

impl fmt::Debug for RemoveActivity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RemoveActivity")
            .field("activities", &self.activities)
            .field("probability", &self.probability)
            .field("policy_type", &self.policy_type)
            .field("probability_level", &self.probability_level)
            .field("conditions", &self.conditions.iter().map(|(k, _)| k).collect::<Vec<_>>())
            .field("strict", &self.strict)
            .field("default_activity", &self.default_activity)
            .finish()
    }
}

impl RemoveActivity {
    /// Validate `config` and build the policy.
    ///
    /// Fails with [`PolicyError::Config`] for a probability outside `[0, 1]`
    /// (or NaN), an unknown scope name, or an empty default activity.
    pub fn new(config: RemoveActivityConfig) -> PolicyResult<Self> {
        if !(0.0..=1.0).contains(&config.probability) {
            return Err(PolicyError::Config(format!(
                "probability {} is outside [0, 1]",
                config.probability
            )));
        }
        if config.default_activity.trim().is_empty() {
            return Err(PolicyError::Config("default_activity must not be empty".into()));
        }
        Ok(Self {
            activities:        config.activities,
            probability:       config.probability,
            policy_type:       config.policy_type.parse()?,
            probability_level: config.probability_level.parse()?,
            conditions:        Vec::new(),
            strict:            config.attribute_strict_conditions,
            default_activity:  config.default_activity,
        })
    }

    /// Add a relevance condition on the attribute `attribute`.
    pub fn with_condition<F>(mut self, attribute: impl Into<String>, predicate: F) -> Self
    where
        F: Fn(&AttributeValue) -> bool + Send + Sync + 'static,
    {
        self.conditions.push((attribute.into(), Box::new(predicate)));
        self
    }

    pub fn activities(&self) -> &[String] {
        &self.activities
    }

    pub fn probability(&self) -> f64 {
        self.probability
    }

    pub fn policy_type(&self) -> Scope {
        self.policy_type
    }

    pub fn probability_level(&self) -> Scope {
        self.probability_level
    }

    pub fn default_activity(&self) -> &str {
        &self.default_activity
    }

    // ── Predicates ────────────────────────────────────────────────────────

    /// One Bernoulli trial.  Always consumes exactly one draw, and always
    /// succeeds when the probability is 1.
    pub fn is_selected(&self, rng: &mut dyn UniformSource) -> bool {
        let draw = rng.next_uniform();
        let hit = self.probability >= 1.0 || draw < self.probability;
        trace!(draw, probability = self.probability, hit, "bernoulli draw");
        hit
    }

    pub fn is_activity_for_removal(&self, activity: &Activity) -> bool {
        self.activities.iter().any(|a| *a == activity.act)
    }

    /// Whether `person` is subject to the policy.
    ///
    /// Everyone is relevant when there are no conditions.  Otherwise all
    /// conditions (strict) or at least one (non-strict) must hold.  Every
    /// attribute a condition names must be present on the person.
    pub fn is_relevant(&self, person: &Person) -> PolicyResult<bool> {
        if self.conditions.is_empty() {
            return Ok(true);
        }
        let mut results = Vec::with_capacity(self.conditions.len());
        for (attribute, predicate) in &self.conditions {
            let value = person.attribute(attribute).ok_or_else(|| PolicyError::MissingAttribute {
                pid:       person.pid,
                attribute: attribute.clone(),
            })?;
            results.push(predicate(value));
        }
        Ok(if self.strict {
            results.iter().all(|&ok| ok)
        } else {
            results.iter().any(|&ok| ok)
        })
    }

    // ── Entry point ───────────────────────────────────────────────────────

    /// Apply the policy to one household.  Returns the number of activities
    /// removed.
    pub fn apply_to(&self, household: &mut Household, rng: &mut dyn UniformSource) -> PolicyResult<usize> {
        let removed = match self.policy_type {
            Scope::Household => self.evaluate_household_policy(household, rng)?,
            Scope::Person => self.evaluate_person_policy(household, rng)?,
            Scope::Activity => self.evaluate_activity_policy(household, rng)?,
        };
        if removed > 0 {
            debug!(hid = %household.hid, removed, policy_type = %self.policy_type, "applied removal policy");
        }
        Ok(removed)
    }

    // ── Per-type evaluation ───────────────────────────────────────────────

    /// A hit anywhere in the household removes matching activities from
    /// every member.
    pub fn evaluate_household_policy(
        &self,
        household: &mut Household,
        rng: &mut dyn UniformSource,
    ) -> PolicyResult<usize> {
        let relevant = self.relevance(household)?;
        let hit = match self.probability_level {
            Scope::Household => relevant.contains(&true) && self.is_selected(rng),
            Scope::Person => relevant.iter().any(|&r| r && self.is_selected(rng)),
            Scope::Activity => household
                .people()
                .zip(&relevant)
                .filter(|(_, r)| **r)
                .flat_map(|(person, _)| person.activities())
                .filter(|a| self.is_activity_for_removal(a))
                .any(|_| self.is_selected(rng)),
        };
        if hit {
            self.remove_household_activities(household)
        } else {
            Ok(0)
        }
    }

    /// A hit removes matching activities from the person it belongs to (or,
    /// at household level, from every relevant person).
    pub fn evaluate_person_policy(
        &self,
        household: &mut Household,
        rng: &mut dyn UniformSource,
    ) -> PolicyResult<usize> {
        let relevant = self.relevance(household)?;
        let shared_hit = self.probability_level == Scope::Household
            && relevant.contains(&true)
            && self.is_selected(rng);

        let mut removed = 0;
        for (person, is_relevant) in household.people_mut().zip(relevant) {
            if !is_relevant {
                continue;
            }
            let hit = match self.probability_level {
                Scope::Household => shared_hit,
                Scope::Person => self.is_selected(rng),
                // First hit decides; the person's remaining activities are not drawn.
                Scope::Activity => person
                    .activities()
                    .filter(|a| self.is_activity_for_removal(a))
                    .any(|_| self.is_selected(rng)),
            };
            if hit {
                removed += self.remove_person_activities(person)?;
            }
        }
        Ok(removed)
    }

    /// Each matching activity is removed on its own unit's hit.
    pub fn evaluate_activity_policy(
        &self,
        household: &mut Household,
        rng: &mut dyn UniformSource,
    ) -> PolicyResult<usize> {
        let relevant = self.relevance(household)?;
        let shared_hit = self.probability_level == Scope::Household
            && relevant.contains(&true)
            && self.is_selected(rng);

        let mut removed = 0;
        for (person, is_relevant) in household.people_mut().zip(relevant) {
            if !is_relevant {
                continue;
            }
            removed += match self.probability_level {
                Scope::Activity => self.remove_individual_activities(person, rng)?,
                Scope::Person if self.is_selected(rng) => self.remove_person_activities(person)?,
                Scope::Household if shared_hit => self.remove_person_activities(person)?,
                Scope::Person | Scope::Household => 0,
            };
        }
        Ok(removed)
    }

    // ── Removal ───────────────────────────────────────────────────────────

    /// Draw once per matching activity and remove the ones that hit.
    pub fn remove_individual_activities(
        &self,
        person: &mut Person,
        rng: &mut dyn UniformSource,
    ) -> PolicyResult<usize> {
        let selected: Vec<usize> = self
            .matching_indices(&person.plan)
            .into_iter()
            .filter(|_| self.is_selected(rng))
            .collect();
        self.remove_indices(person, &selected)
    }

    /// Remove every matching activity of `person`.
    pub fn remove_person_activities(&self, person: &mut Person) -> PolicyResult<usize> {
        let selected = self.matching_indices(&person.plan);
        self.remove_indices(person, &selected)
    }

    /// Remove every matching activity of every member, relevant or not.
    pub fn remove_household_activities(&self, household: &mut Household) -> PolicyResult<usize> {
        let mut removed = 0;
        for person in household.people_mut() {
            removed += self.remove_person_activities(person)?;
        }
        Ok(removed)
    }

    // ── Helpers ───────────────────────────────────────────────────────────

    fn relevance(&self, household: &Household) -> PolicyResult<Vec<bool>> {
        household.people().map(|p| self.is_relevant(p)).collect()
    }

    fn matching_indices(&self, plan: &Plan) -> Vec<usize> {
        plan.indexed_activities()
            .filter(|(_, a)| self.is_activity_for_removal(a))
            .map(|(i, _)| i)
            .collect()
    }

    fn remove_indices(&self, person: &mut Person, indices: &[usize]) -> PolicyResult<usize> {
        if indices.is_empty() {
            return Ok(0);
        }
        let removed = person
            .plan
            .remove_activities(indices, &self.default_activity)
            .map_err(|source| PolicyError::Plan { pid: person.pid, source })?;
        debug!(pid = %person.pid, requested = indices.len(), removed, "removed activities");
        Ok(removed)
    }
}
