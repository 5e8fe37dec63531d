use std::fmt;
use std::str::FromStr;

use crate::PolicyError;

/// Granularity of a policy: which unit is sampled, or which unit a hit
/// affects.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Scope {
    Activity,
    Person,
    Household,
}

impl Scope {
    pub fn as_str(self) -> &'static str {
        match self {
            Scope::Activity => "activity",
            Scope::Person => "person",
            Scope::Household => "household",
        }
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Scope {
    type Err = PolicyError;

    fn from_str(s: &str) -> Result<Self, PolicyError> {
        match s.trim() {
            "activity"  => Ok(Scope::Activity),
            "person"    => Ok(Scope::Person),
            "household" => Ok(Scope::Household),
            other       => Err(PolicyError::Config(format!(
                "unknown scope {other:?}: expected \"activity\", \"person\", or \"household\""
            ))),
        }
    }
}
