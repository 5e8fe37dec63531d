//! household_policy — apply activity-removal policies to a small survey.
//!
//! Loads two households from embedded CSV, closes schools for children with
//! a household-wide policy, sends some workers home with a person-level
//! policy, and writes the resulting activity and leg logs.
//!
//! Set `RUST_LOG=debug` to see every removal, `RUST_LOG=trace` for every
//! random draw.

use std::io::Cursor;
use std::path::Path;
use std::time::Instant;

use anyhow::Result;
use tracing::info;

use pam_population::{Population, load_attributes_reader, load_population_reader};
use pam_policy::{HouseholdPolicyExt, RemoveActivity, RemoveActivityConfig};
use pam_output::{CsvLogWriter, write_population_logs};

// ── Constants ─────────────────────────────────────────────────────────────────

const SEED:       u64  = 42;
const OUTPUT_DIR: &str = "output/household_policy";

// ── Embedded inputs ───────────────────────────────────────────────────────────

// Household 1: Steve (worker), Hilda, Timmy (student), Bobby (pupil).
// Household 2: a commuter and a pupil.
const PLANS_CSV: &str = "\
hid,pid,seq,element,label,start_area,end_area,start,end,purpose\n\
1,1,1,activity,home,10,,0,300,\n\
1,1,1,leg,car,10,20,300,360,work\n\
1,1,2,activity,work,20,,360,720,\n\
1,1,2,leg,walk,20,30,720,730,leisure\n\
1,1,3,activity,leisure,30,,730,770,\n\
1,1,3,leg,walk,30,20,770,780,work\n\
1,1,4,activity,work,20,,780,1080,\n\
1,1,4,leg,car,20,10,1080,1140,home\n\
1,1,5,activity,home,10,,1140,eod,\n\
1,2,1,activity,home,10,,0,480,\n\
1,2,1,leg,walk,10,20,480,485,escort\n\
1,2,2,activity,escort,20,,485,510,\n\
1,2,2,leg,pt,20,30,510,530,shop\n\
1,2,3,activity,shop,30,,530,840,\n\
1,2,3,leg,pt,30,40,840,860,leisure\n\
1,2,4,activity,leisure,40,,860,940,\n\
1,2,4,leg,pt,40,20,940,960,escort\n\
1,2,5,activity,escort,20,,960,990,\n\
1,2,5,leg,walk,20,10,990,995,home\n\
1,2,6,activity,home,10,,995,eod,\n\
1,3,1,activity,home,10,,0,600,\n\
1,3,1,leg,bike,10,20,600,660,education\n\
1,3,2,activity,education,20,,660,780,\n\
1,3,2,leg,bike,20,30,780,785,shop\n\
1,3,3,activity,shop,30,,785,810,\n\
1,3,3,leg,bike,30,20,810,815,education\n\
1,3,4,activity,education,20,,815,900,\n\
1,3,4,leg,bike,20,40,900,910,leisure\n\
1,3,5,activity,leisure,40,,910,1080,\n\
1,3,5,leg,bike,40,10,1080,1100,home\n\
1,3,6,activity,home,10,,1100,eod,\n\
1,4,1,activity,home,10,,0,480,\n\
1,4,1,leg,walk,10,20,480,510,education\n\
1,4,2,activity,education,20,,510,960,\n\
1,4,2,leg,walk,20,10,960,990,home\n\
1,4,3,activity,home,10,,990,eod,\n\
2,5,1,activity,home,50,,0,450,\n\
2,5,1,leg,bus,50,60,450,500,work\n\
2,5,2,activity,work,60,,500,1010,\n\
2,5,2,leg,bus,60,50,1010,1060,home\n\
2,5,3,activity,home,50,,1060,eod,\n\
2,6,1,activity,home,50,,0,510,\n\
2,6,1,leg,walk,50,70,510,525,education\n\
2,6,2,activity,education,70,,525,930,\n\
2,6,2,leg,walk,70,50,930,945,home\n\
2,6,3,activity,home,50,,945,eod,\n\
";

const ATTRIBUTES_CSV: &str = "\
hid,pid,key,value\n\
1,1,age,50\n\
1,1,job,work\n\
1,2,age,45\n\
1,2,job,influencer\n\
1,3,age,18\n\
1,3,job,education\n\
1,4,age,6\n\
1,4,job,education\n\
2,5,age,38\n\
2,5,job,work\n\
2,6,age,9\n\
2,6,job,education\n\
";

// School closure hits whole households; home working is decided per person.
const POLICIES_JSON: &str = r#"[
    {
        "activities": ["education"],
        "probability": 0.8,
        "policy_type": "household",
        "probability_level": "person"
    },
    {
        "activities": ["work"],
        "probability": 0.5,
        "policy_type": "person",
        "probability_level": "person"
    }
]"#;

// ── Helpers ───────────────────────────────────────────────────────────────────

fn print_plans(title: &str, population: &Population) {
    println!("{title}");
    println!("{:<6} {:<6} {}", "hid", "pid", "activities");
    println!("{}", "-".repeat(60));
    for (hid, pid, person) in population.people() {
        println!("{:<6} {:<6} {}", hid.0, pid.0, person.plan.activity_labels().join(" → "));
    }
    println!();
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    println!("=== household_policy — activity-removal policies ===");
    println!("Seed: {SEED}");
    println!();

    // 1. Load plans and attributes.
    let mut population = load_population_reader(Cursor::new(PLANS_CSV), "demo")?;
    let attributes = load_attributes_reader(Cursor::new(ATTRIBUTES_CSV), &mut population)?;
    let before = population.stats();
    info!(attributes, "attached attributes");
    print_plans("Before", &population);

    // 2. Build policies from JSON config; predicates are attached in code.
    let configs: Vec<RemoveActivityConfig> = serde_json::from_str(POLICIES_JSON)?;
    let [school, work]: [RemoveActivityConfig; 2] = configs
        .try_into()
        .map_err(|v: Vec<RemoveActivityConfig>| anyhow::anyhow!("expected 2 policies, got {}", v.len()))?;
    let school_closure =
        RemoveActivity::new(school)?.with_condition("age", |v| v.as_int().is_some_and(|age| age < 18));
    let home_working =
        RemoveActivity::new(work)?.with_condition("job", |v| v.as_str() == Some("work"));
    let policy = school_closure.then(home_working);

    // 3. Apply, one RNG stream per household.
    let t0 = Instant::now();
    #[cfg(not(feature = "parallel"))]
    let removed = pam_policy::apply_seeded(&policy, &mut population, SEED)?;
    #[cfg(feature = "parallel")]
    let removed = pam_policy::par_apply_seeded(&policy, &mut population, SEED)?;
    let elapsed = t0.elapsed();

    let after = population.stats();
    println!("Removed {removed} activities in {:.3} ms", elapsed.as_secs_f64() * 1e3);
    println!(
        "  activities: {} → {}  |  legs: {} → {}",
        before.activities, after.activities, before.legs, after.legs
    );
    println!();
    print_plans("After", &population);

    // 4. Write logs.
    std::fs::create_dir_all(OUTPUT_DIR)?;
    let mut writer = CsvLogWriter::new(Path::new(OUTPUT_DIR))?;
    let (activity_rows, leg_rows) = write_population_logs(&mut writer, &population)?;
    println!("  activity_log.csv : {activity_rows} rows");
    println!("  leg_log.csv      : {leg_rows} rows");

    Ok(())
}
