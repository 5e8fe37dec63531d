use rustc_hash::FxHashMap;

use pam_core::{HouseholdId, PersonId};

use crate::{AttributeValue, Attributes, Person, PopulationError, PopulationResult};

/// People who share a dwelling.  Members keep their insertion order.
#[derive(Clone, Debug, PartialEq)]
pub struct Household {
    pub hid:        HouseholdId,
    pub attributes: Attributes,
    people:         Vec<Person>,
    index:          FxHashMap<PersonId, usize>,
}

impl Household {
    pub fn new(hid: HouseholdId) -> Self {
        Self {
            hid,
            attributes: Attributes::new(),
            people: Vec::new(),
            index: FxHashMap::default(),
        }
    }

    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<AttributeValue>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    /// Add a member.  Fails if a person with the same id is already present.
    pub fn add(&mut self, person: Person) -> PopulationResult<()> {
        if self.index.contains_key(&person.pid) {
            return Err(PopulationError::DuplicatePerson { hid: self.hid, pid: person.pid });
        }
        self.index.insert(person.pid, self.people.len());
        self.people.push(person);
        Ok(())
    }

    pub fn get(&self, pid: PersonId) -> Option<&Person> {
        self.index.get(&pid).map(|&i| &self.people[i])
    }

    pub fn get_mut(&mut self, pid: PersonId) -> Option<&mut Person> {
        self.index.get(&pid).map(|&i| &mut self.people[i])
    }

    pub fn contains(&self, pid: PersonId) -> bool {
        self.index.contains_key(&pid)
    }

    /// Members in insertion order.
    pub fn people(&self) -> impl Iterator<Item = &Person> + Clone + '_ {
        self.people.iter()
    }

    pub fn people_mut(&mut self) -> impl Iterator<Item = &mut Person> + '_ {
        self.people.iter_mut()
    }

    pub fn len(&self) -> usize {
        self.people.len()
    }

    pub fn is_empty(&self) -> bool {
        self.people.is_empty()
    }
}
