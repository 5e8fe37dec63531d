//! Unit tests for pam-population.

use pam_core::{AreaId, END_OF_DAY, HouseholdId, PersonId, TimePoint, TransportMode};
use pam_plan::{Activity, Leg, Plan};

use crate::{Household, Person, Population};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn m(minutes: u32) -> TimePoint {
    TimePoint::from_minutes(minutes)
}

/// home(a) → `act`(b) → home(a).
fn commute(act: &str, leave: u32, back: u32) -> Plan {
    Plan::from_elements([
        Activity::new(1, "home", AreaId(0), m(0), m(leave)).into(),
        Leg::new(1, TransportMode::Car, AreaId(0), AreaId(1), m(leave), m(leave + 30)).into(),
        Activity::new(2, act, AreaId(1), m(leave + 30), m(back)).into(),
        Leg::new(2, TransportMode::Car, AreaId(1), AreaId(0), m(back), m(back + 30)).into(),
        Activity::new(3, "home", AreaId(0), m(back + 30), END_OF_DAY).into(),
    ])
    .unwrap()
}

fn two_households() -> Population {
    let mut pop = Population::new("test");
    let mut hh1 = Household::new(HouseholdId(1));
    hh1.add(Person::new(PersonId(1)).with_plan(commute("work", 480, 1020))).unwrap();
    hh1.add(Person::new(PersonId(2)).with_plan(commute("education", 500, 900))).unwrap();
    let mut hh2 = Household::new(HouseholdId(2));
    hh2.add(Person::new(PersonId(3)).with_plan(commute("shop", 600, 660))).unwrap();
    pop.add(hh1).unwrap();
    pop.add(hh2).unwrap();
    pop
}

// ── Attributes ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod attributes {
    use crate::AttributeValue;

    #[test]
    fn infer_types() {
        assert_eq!(AttributeValue::infer("true"), AttributeValue::Bool(true));
        assert_eq!(AttributeValue::infer(" 42 "), AttributeValue::Int(42));
        assert_eq!(AttributeValue::infer("-3"), AttributeValue::Int(-3));
        assert_eq!(AttributeValue::infer("2.5"), AttributeValue::Float(2.5));
        assert_eq!(AttributeValue::infer("influencer"), AttributeValue::Text("influencer".into()));
    }

    #[test]
    fn numeric_views() {
        assert_eq!(AttributeValue::Int(6).as_float(), Some(6.0));
        assert_eq!(AttributeValue::Float(6.5).as_int(), None);
        assert_eq!(AttributeValue::from("work").as_str(), Some("work"));
        assert_eq!(AttributeValue::from(true).as_bool(), Some(true));
        assert_eq!(AttributeValue::from(7).to_string(), "7");
    }
}

// ── Containers ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod containers {
    use super::*;
    use crate::{AttributeValue, PopulationError};

    #[test]
    fn person_add_delegates_to_plan() {
        let mut p = Person::new(PersonId(1));
        p.add(Activity::new(1, "home", AreaId(0), m(0), END_OF_DAY)).unwrap();
        assert!(p.add(Activity::new(2, "work", AreaId(1), m(0), END_OF_DAY)).is_err());
        assert_eq!(p.activities().count(), 1);
    }

    #[test]
    fn person_attributes() {
        let p = Person::new(PersonId(1)).with_attribute("age", 50).with_attribute("job", "work");
        assert_eq!(p.attribute("age"), Some(&AttributeValue::Int(50)));
        assert_eq!(p.attribute("job").and_then(AttributeValue::as_str), Some("work"));
        assert_eq!(p.attribute("licence"), None);
    }

    #[test]
    fn household_rejects_duplicate_person() {
        let mut hh = Household::new(HouseholdId(9));
        hh.add(Person::new(PersonId(1))).unwrap();
        let err = hh.add(Person::new(PersonId(1))).unwrap_err();
        assert!(matches!(
            err,
            PopulationError::DuplicatePerson { hid: HouseholdId(9), pid: PersonId(1) }
        ));
        assert_eq!(hh.len(), 1);
    }

    #[test]
    fn household_keeps_insertion_order() {
        let mut hh = Household::new(HouseholdId(1));
        for pid in [5, 2, 9] {
            hh.add(Person::new(PersonId(pid))).unwrap();
        }
        let pids: Vec<PersonId> = hh.people().map(|p| p.pid).collect();
        assert_eq!(pids, vec![PersonId(5), PersonId(2), PersonId(9)]);
        assert!(hh.get(PersonId(2)).is_some());
        assert!(hh.get(PersonId(3)).is_none());
    }

    #[test]
    fn population_rejects_duplicate_household() {
        let mut pop = two_households();
        let err = pop.add(Household::new(HouseholdId(1))).unwrap_err();
        assert!(matches!(err, PopulationError::DuplicateHousehold(HouseholdId(1))));
        assert_eq!(pop.len(), 2);
    }

    #[test]
    fn unknown_household_is_error() {
        let mut pop = two_households();
        assert!(matches!(
            pop.household_mut(HouseholdId(77)),
            Err(PopulationError::UnknownHousehold(HouseholdId(77)))
        ));
    }

    #[test]
    fn people_flattens_in_order() {
        let pop = two_households();
        let ids: Vec<(HouseholdId, PersonId)> = pop.people().map(|(h, p, _)| (h, p)).collect();
        assert_eq!(
            ids,
            vec![
                (HouseholdId(1), PersonId(1)),
                (HouseholdId(1), PersonId(2)),
                (HouseholdId(2), PersonId(3)),
            ]
        );
        assert_eq!(pop.person(HouseholdId(2), PersonId(3)).unwrap().pid, PersonId(3));
        assert!(pop.person(HouseholdId(2), PersonId(1)).is_none());
    }

    #[test]
    fn stats() {
        let stats = two_households().stats();
        assert_eq!(stats.households, 2);
        assert_eq!(stats.people, 3);
        assert_eq!(stats.activities, 9);
        assert_eq!(stats.legs, 6);
        assert_eq!(stats.activities_per_person(), 3.0);
        assert_eq!(Population::new("empty").stats().activities_per_person(), 0.0);
    }
}

// ── Logs ──────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod logs {
    use super::*;
    use crate::{activity_log, leg_log};

    #[test]
    fn activity_log_rows_and_durations() {
        let log = activity_log(&two_households());
        assert_eq!(log.len(), 9);
        let first = &log[0];
        assert_eq!((first.hid, first.pid, first.act.as_str()), (HouseholdId(1), PersonId(1), "home"));
        assert_eq!(first.duration, 480);
        let work = &log[1];
        assert_eq!((work.start, work.end, work.duration), (m(510), m(1020), 510));
        // Last activity runs to the end of the day, counted as midnight.
        let last = &log[2];
        assert_eq!(last.end, END_OF_DAY);
        assert_eq!(last.duration, 1440 - 1050);
        assert_eq!(log[8].pid, PersonId(3));
    }

    #[test]
    fn leg_log_rows() {
        let log = leg_log(&two_households());
        assert_eq!(log.len(), 6);
        assert!(log.iter().all(|l| l.mode == TransportMode::Car && l.duration == 30));
        assert_eq!((log[0].start_area, log[0].end_area), (AreaId(0), AreaId(1)));
        assert_eq!(log[1].seq, 2);
    }
}

// ── Loader ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod loader {
    use std::io::Cursor;

    use super::*;
    use crate::{AttributeValue, PopulationError, load_attributes_reader, load_population_reader};

    const PLANS: &str = "\
hid,pid,seq,element,label,start_area,end_area,start,end,purpose
1,1,1,activity,home,10,,0,480,
1,1,1,leg,car,10,20,480,510,work
1,1,2,activity,work,20,,510,1020,
1,1,2,leg,car,20,10,1020,1050,home
1,1,3,activity,home,10,,1050,eod,
1,2,1,activity,home,10,,0,eod,
2,3,1,activity,shop,30,,0,600,
2,3,1,leg,walk,30,40,600,615,
2,3,2,activity,home,40,,615,EOD,
";

    #[test]
    fn loads_households_people_and_plans() {
        let pop = load_population_reader(Cursor::new(PLANS), "survey").unwrap();
        assert_eq!(pop.name, "survey");
        let stats = pop.stats();
        assert_eq!((stats.households, stats.people, stats.activities, stats.legs), (2, 3, 6, 3));

        let steve = pop.person(HouseholdId(1), PersonId(1)).unwrap();
        assert_eq!(steve.plan.activity_labels(), vec!["home", "work", "home"]);
        assert_eq!(steve.home_area, Some(AreaId(10)));
        let leg = steve.legs().next().unwrap();
        assert_eq!(leg.purpose.as_deref(), Some("work"));

        let stay_home = pop.person(HouseholdId(1), PersonId(2)).unwrap();
        assert_eq!(stay_home.plan.len(), 1);

        let shopper = pop.person(HouseholdId(2), PersonId(3)).unwrap();
        assert_eq!(shopper.legs().next().unwrap().purpose, None);
        assert_eq!(shopper.home_area, Some(AreaId(40)));
    }

    #[test]
    fn survey_specific_modes_and_missing_home() {
        let csv = "\
hid,pid,seq,element,label,start_area,end_area,start,end,purpose
5,1,1,activity,work,20,,0,480,
5,1,1,leg,ferry,20,30,480,540,shop
5,1,2,activity,shop,30,,540,eod,
";
        let pop = load_population_reader(Cursor::new(csv), "islands").unwrap();
        let commuter = pop.person(HouseholdId(5), PersonId(1)).unwrap();
        assert_eq!(commuter.home_area, None);
        let leg = commuter.legs().next().unwrap();
        assert_eq!(leg.mode, TransportMode::Other("ferry".into()));
        assert_eq!(leg.mode.as_str(), "ferry");
    }

    #[test]
    fn plans_are_validated() {
        let csv = "\
hid,pid,seq,element,label,start_area,end_area,start,end,purpose
1,1,1,activity,home,10,,0,480,
1,1,1,leg,car,10,20,480,510,
1,1,2,activity,work,20,,510,1020,
";
        let err = load_population_reader(Cursor::new(csv), "bad").unwrap_err();
        assert!(matches!(err, PopulationError::InvalidPlan { hid: HouseholdId(1), pid: PersonId(1), .. }));
    }

    #[test]
    fn alternation_break_is_reported_with_person() {
        let csv = "\
hid,pid,seq,element,label,start_area,end_area,start,end,purpose
4,7,1,activity,home,10,,0,480,
4,7,2,activity,work,20,,480,eod,
";
        let err = load_population_reader(Cursor::new(csv), "bad").unwrap_err();
        assert!(matches!(err, PopulationError::InvalidPlan { hid: HouseholdId(4), pid: PersonId(7), .. }));
    }

    #[test]
    fn malformed_rows_are_parse_errors() {
        let header = "hid,pid,seq,element,label,start_area,end_area,start,end,purpose\n";
        for row in [
            "1,1,1,stop,home,10,,0,eod,\n",
            "1,1,1,activity,home,10,,0,late,\n",
            "1,1,1,leg,car,10,,0,10,\n",
            "1,1,1,leg,,10,20,0,10,\n",
        ] {
            let csv = format!("{header}{row}");
            let err = load_population_reader(Cursor::new(csv), "bad").unwrap_err();
            assert!(matches!(err, PopulationError::Parse(_)), "row {row:?} gave {err}");
        }
    }

    #[test]
    fn loads_person_and_household_attributes() {
        let mut pop = load_population_reader(Cursor::new(PLANS), "survey").unwrap();
        let attrs = "\
hid,pid,key,value
1,1,age,50
1,1,job,work
1,,tenure,owner
2,3,student,false
";
        let n = load_attributes_reader(Cursor::new(attrs), &mut pop).unwrap();
        assert_eq!(n, 4);
        let steve = pop.person(HouseholdId(1), PersonId(1)).unwrap();
        assert_eq!(steve.attribute("age"), Some(&AttributeValue::Int(50)));
        assert_eq!(steve.attribute("job"), Some(&AttributeValue::Text("work".into())));
        assert_eq!(
            pop.get(HouseholdId(1)).unwrap().attributes.get("tenure"),
            Some(&AttributeValue::Text("owner".into()))
        );
        assert_eq!(
            pop.person(HouseholdId(2), PersonId(3)).unwrap().attribute("student"),
            Some(&AttributeValue::Bool(false))
        );
    }

    #[test]
    fn attributes_for_unknown_ids_are_errors() {
        let mut pop = load_population_reader(Cursor::new(PLANS), "survey").unwrap();
        let err = load_attributes_reader(Cursor::new("hid,pid,key,value\n9,1,age,3\n"), &mut pop).unwrap_err();
        assert!(matches!(err, PopulationError::UnknownHousehold(HouseholdId(9))));
        let err = load_attributes_reader(Cursor::new("hid,pid,key,value\n1,9,age,3\n"), &mut pop).unwrap_err();
        assert!(matches!(err, PopulationError::UnknownPerson { hid: HouseholdId(1), pid: PersonId(9) }));
    }
}
