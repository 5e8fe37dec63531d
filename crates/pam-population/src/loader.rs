//! CSV population and attribute loaders.
//!
//! # Plan CSV
//!
//! One row per plan element, each person's rows in plan order.  Households
//! and people are created in order of first appearance.
//!
//! ```csv
//! hid,pid,seq,element,label,start_area,end_area,start,end,purpose
//! 1,1,1,activity,home,10,,0,480,
//! 1,1,1,leg,car,10,20,480,510,work
//! 1,1,2,activity,work,20,,510,1020,
//! 1,1,2,leg,car,20,10,1020,1050,home
//! 1,1,3,activity,home,10,,1050,eod,
//! ```
//!
//! | Column       | Activity row          | Leg row                        |
//! |--------------|-----------------------|--------------------------------|
//! | `label`      | activity label        | transport mode (`car`, `walk`) |
//! | `start_area` | where it happens      | origin                         |
//! | `end_area`   | ignored               | destination (required)         |
//! | `start/end`  | minutes, or `eod` for the end of the day                |
//! | `purpose`    | ignored               | optional trip purpose          |
//!
//! Every plan is validated once all rows are read.  A person's home area is
//! taken from their first `home` activity.
//!
//! # Attribute CSV
//!
//! ```csv
//! hid,pid,key,value
//! 1,1,age,50
//! 1,,tenure,owner
//! ```
//!
//! An empty `pid` attaches the attribute to the household.  Values are typed
//! with [`AttributeValue::infer`].

use std::io::Read;
use std::path::Path;

use serde::Deserialize;
use tracing::info;

use pam_core::{AreaId, END_OF_DAY, HouseholdId, PersonId, TimePoint, TransportMode};
use pam_plan::{Activity, Leg, PlanElement};

use crate::{AttributeValue, Household, Person, Population, PopulationError, PopulationResult};

// ── CSV records ───────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct PlanRecord {
    hid:        u32,
    pid:        u32,
    seq:        u32,
    element:    String,
    label:      String,
    start_area: u32,
    end_area:   Option<u32>,
    start:      String,
    end:        String,
    purpose:    Option<String>,
}

#[derive(Deserialize)]
struct AttributeRecord {
    hid:   u32,
    pid:   Option<u32>,
    key:   String,
    value: String,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load a population from a plan CSV file.
pub fn load_population_csv(path: &Path, name: &str) -> PopulationResult<Population> {
    let file = std::fs::File::open(path)?;
    load_population_reader(file, name)
}

/// Like [`load_population_csv`] but accepts any `Read` source.
pub fn load_population_reader<R: Read>(reader: R, name: &str) -> PopulationResult<Population> {
    let mut population = Population::new(name);
    let mut csv_reader = csv::Reader::from_reader(reader);

    for result in csv_reader.deserialize::<PlanRecord>() {
        let row = result.map_err(|e| PopulationError::Parse(e.to_string()))?;
        let hid = HouseholdId(row.hid);
        let pid = PersonId(row.pid);
        let element = parse_element(&row)?;

        if population.get(hid).is_none() {
            population.add(Household::new(hid))?;
        }
        let household = population.household_mut(hid)?;
        if !household.contains(pid) {
            household.add(Person::new(pid))?;
        }
        let person = household
            .get_mut(pid)
            .ok_or(PopulationError::UnknownPerson { hid, pid })?;
        person
            .add(element)
            .map_err(|source| PopulationError::InvalidPlan { hid, pid, source })?;
    }

    for household in population.households_mut() {
        let hid = household.hid;
        for person in household.people_mut() {
            person
                .plan
                .validate()
                .map_err(|source| PopulationError::InvalidPlan { hid, pid: person.pid, source })?;
            if person.home_area.is_none() {
                let home = person.activities().find(|a| a.act == "home").map(|a| a.area);
                person.home_area = home;
            }
        }
    }

    let stats = population.stats();
    info!(
        name,
        households = stats.households,
        people = stats.people,
        activities = stats.activities,
        "loaded population"
    );
    Ok(population)
}

/// Attach attributes from a CSV file to an existing population.
pub fn load_attributes_csv(path: &Path, population: &mut Population) -> PopulationResult<usize> {
    let file = std::fs::File::open(path)?;
    load_attributes_reader(file, population)
}

/// Like [`load_attributes_csv`] but accepts any `Read` source.
///
/// Returns the number of attributes set.  Rows naming a household or person
/// that is not in the population are errors.
pub fn load_attributes_reader<R: Read>(reader: R, population: &mut Population) -> PopulationResult<usize> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut count = 0;

    for result in csv_reader.deserialize::<AttributeRecord>() {
        let row = result.map_err(|e| PopulationError::Parse(e.to_string()))?;
        let hid = HouseholdId(row.hid);
        let value = AttributeValue::infer(&row.value);
        let household = population.household_mut(hid)?;
        let attributes = match row.pid.map(PersonId) {
            None => &mut household.attributes,
            Some(pid) => {
                &mut household
                    .get_mut(pid)
                    .ok_or(PopulationError::UnknownPerson { hid, pid })?
                    .attributes
            }
        };
        attributes.insert(row.key, value);
        count += 1;
    }
    Ok(count)
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn parse_element(row: &PlanRecord) -> PopulationResult<PlanElement> {
    let start = parse_time(&row.start)?;
    let end = parse_time(&row.end)?;
    match row.element.trim() {
        "activity" => Ok(Activity::new(row.seq, row.label.trim(), AreaId(row.start_area), start, end).into()),
        "leg" => {
            let mode = row
                .label
                .trim()
                .parse::<TransportMode>()
                .map_err(|e| PopulationError::Parse(e.to_string()))?;
            let end_area = row.end_area.ok_or_else(|| {
                PopulationError::Parse(format!(
                    "leg {} of person {} in household {} has no end_area",
                    row.seq, row.pid, row.hid
                ))
            })?;
            let mut leg = Leg::new(row.seq, mode, AreaId(row.start_area), AreaId(end_area), start, end);
            if let Some(purpose) = row.purpose.as_deref().map(str::trim).filter(|p| !p.is_empty()) {
                leg = leg.with_purpose(purpose);
            }
            Ok(leg.into())
        }
        other => Err(PopulationError::Parse(format!(
            "invalid element {other:?}: expected \"activity\" or \"leg\""
        ))),
    }
}

fn parse_time(s: &str) -> PopulationResult<TimePoint> {
    match s.trim() {
        "eod" | "EOD" => Ok(END_OF_DAY),
        n => n
            .parse::<u32>()
            .map(TimePoint::from_minutes)
            .map_err(|_| PopulationError::Parse(format!("invalid time {n:?}: expected minutes or \"eod\""))),
    }
}
