//! `Population` — the top-level container handed to policies and writers.

use rustc_hash::FxHashMap;

use pam_core::{HouseholdId, PersonId};

use crate::{Household, Person, PopulationError, PopulationResult};

// ── PopulationStats ───────────────────────────────────────────────────────────

/// Element counts across a whole population.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PopulationStats {
    pub households: usize,
    pub people:     usize,
    pub activities: usize,
    pub legs:       usize,
}

impl PopulationStats {
    /// Mean number of activities per person, `0.0` for an empty population.
    pub fn activities_per_person(&self) -> f64 {
        if self.people == 0 {
            0.0
        } else {
            self.activities as f64 / self.people as f64
        }
    }
}

// ── Population ────────────────────────────────────────────────────────────────

/// Named collection of households, iterated in insertion order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Population {
    pub name:   String,
    households: Vec<Household>,
    index:      FxHashMap<HouseholdId, usize>,
}

impl Population {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), households: Vec::new(), index: FxHashMap::default() }
    }

    /// Add a household.  Fails if its id is already taken.
    pub fn add(&mut self, household: Household) -> PopulationResult<()> {
        if self.index.contains_key(&household.hid) {
            return Err(PopulationError::DuplicateHousehold(household.hid));
        }
        self.index.insert(household.hid, self.households.len());
        self.households.push(household);
        Ok(())
    }

    pub fn get(&self, hid: HouseholdId) -> Option<&Household> {
        self.index.get(&hid).map(|&i| &self.households[i])
    }

    pub fn get_mut(&mut self, hid: HouseholdId) -> Option<&mut Household> {
        self.index.get(&hid).map(|&i| &mut self.households[i])
    }

    /// Like [`get_mut`](Self::get_mut) but reports a miss as an error.
    pub fn household_mut(&mut self, hid: HouseholdId) -> PopulationResult<&mut Household> {
        self.get_mut(hid).ok_or(PopulationError::UnknownHousehold(hid))
    }

    pub fn person(&self, hid: HouseholdId, pid: PersonId) -> Option<&Person> {
        self.get(hid).and_then(|hh| hh.get(pid))
    }

    pub fn households(&self) -> impl Iterator<Item = &Household> + Clone + '_ {
        self.households.iter()
    }

    pub fn households_mut(&mut self) -> impl Iterator<Item = &mut Household> + '_ {
        self.households.iter_mut()
    }

    /// Mutable slice of all households, for callers that split work across
    /// threads.
    pub fn households_slice_mut(&mut self) -> &mut [Household] {
        &mut self.households
    }

    /// Every person in the population, with the household they belong to.
    pub fn people(&self) -> impl Iterator<Item = (HouseholdId, PersonId, &Person)> + '_ {
        self.households
            .iter()
            .flat_map(|hh| hh.people().map(move |p| (hh.hid, p.pid, p)))
    }

    pub fn len(&self) -> usize {
        self.households.len()
    }

    pub fn is_empty(&self) -> bool {
        self.households.is_empty()
    }

    pub fn stats(&self) -> PopulationStats {
        let mut stats = PopulationStats { households: self.households.len(), ..Default::default() };
        for (_, _, person) in self.people() {
            stats.people += 1;
            stats.activities += person.activities().count();
            stats.legs += person.legs().count();
        }
        stats
    }
}
