use pam_core::{HouseholdId, PersonId};
use pam_plan::PlanError;
use pam_population::PopulationError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PolicyError {
    #[error("policy configuration error: {0}")]
    Config(String),

    #[error("person {pid} has no attribute {attribute:?} required by a policy condition")]
    MissingAttribute { pid: PersonId, attribute: String },

    #[error("plan mutation failed for {pid}: {source}")]
    Plan {
        pid:    PersonId,
        #[source]
        source: PlanError,
    },

    #[error("policy failed in household {hid}: {source}")]
    Household {
        hid:    HouseholdId,
        #[source]
        source: Box<PolicyError>,
    },

    #[error(transparent)]
    Population(#[from] PopulationError),
}

pub type PolicyResult<T> = Result<T, PolicyError>;
