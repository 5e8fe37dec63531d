use pam_core::{HouseholdId, PersonId};
use pam_plan::PlanError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PopulationError {
    #[error("household {0} already exists in the population")]
    DuplicateHousehold(HouseholdId),

    #[error("person {pid} already exists in household {hid}")]
    DuplicatePerson { hid: HouseholdId, pid: PersonId },

    #[error("unknown household {0}")]
    UnknownHousehold(HouseholdId),

    #[error("unknown person {pid} in household {hid}")]
    UnknownPerson { hid: HouseholdId, pid: PersonId },

    #[error("invalid plan for {pid} in household {hid}: {source}")]
    InvalidPlan {
        hid:    HouseholdId,
        pid:    PersonId,
        #[source]
        source: PlanError,
    },

    #[error(transparent)]
    Plan(#[from] PlanError),

    #[error("population parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type PopulationResult<T> = Result<T, PopulationError>;
