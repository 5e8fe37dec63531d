//! Flattened activity and leg logs.
//!
//! One record per plan element, in population order then plan order.  These
//! are what writers and plotting tools consume.

use pam_core::{AreaId, HouseholdId, PersonId, TimePoint, TransportMode};

use crate::Population;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ActivityRecord {
    pub hid:      HouseholdId,
    pub pid:      PersonId,
    pub seq:      u32,
    pub act:      String,
    pub area:     AreaId,
    pub start:    TimePoint,
    pub end:      TimePoint,
    /// Minutes; `END_OF_DAY` counts as midnight.
    pub duration: u32,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LegRecord {
    pub hid:        HouseholdId,
    pub pid:        PersonId,
    pub seq:        u32,
    pub mode:       TransportMode,
    pub start_area: AreaId,
    pub end_area:   AreaId,
    pub start:      TimePoint,
    pub end:        TimePoint,
    pub duration:   u32,
}

pub fn activity_log(population: &Population) -> Vec<ActivityRecord> {
    population
        .people()
        .flat_map(|(hid, pid, person)| {
            person.activities().map(move |a| ActivityRecord {
                hid,
                pid,
                seq: a.seq,
                act: a.act.clone(),
                area: a.area,
                start: a.start_time,
                end: a.end_time,
                duration: a.duration(),
            })
        })
        .collect()
}

pub fn leg_log(population: &Population) -> Vec<LegRecord> {
    population
        .people()
        .flat_map(|(hid, pid, person)| {
            person.legs().map(move |l| LegRecord {
                hid,
                pid,
                seq: l.seq,
                mode: l.mode.clone(),
                start_area: l.start_area,
                end_area: l.end_area,
                start: l.start_time,
                end: l.end_time,
                duration: l.duration(),
            })
        })
        .collect()
}
