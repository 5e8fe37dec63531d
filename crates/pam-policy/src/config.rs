//! Declarative policy configuration.
//!
//! Configs are plain data and can be read from JSON or TOML by the
//! application.  Scope names stay strings here and are checked when the
//! config is turned into a policy with [`RemoveActivity::new`].
//!
//! ```json
//! {
//!   "activities": ["education", "work"],
//!   "probability": 0.3,
//!   "policy_type": "household",
//!   "probability_level": "person"
//! }
//! ```
//!
//! [`RemoveActivity::new`]: crate::RemoveActivity::new

use serde::Deserialize;

/// Configuration for [`RemoveActivity`](crate::RemoveActivity).
///
/// Missing fields take their [`Default`] values.  Attribute predicates are
/// code, not data, and are attached afterwards with
/// [`RemoveActivity::with_condition`](crate::RemoveActivity::with_condition).
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct RemoveActivityConfig {
    /// Activity labels eligible for removal.
    pub activities: Vec<String>,

    /// Bernoulli probability of a sampled unit being hit, in `[0, 1]`.
    pub probability: f64,

    /// Which unit a hit affects: `activity`, `person`, or `household`.
    pub policy_type: String,

    /// Which unit is sampled: `activity`, `person`, or `household`.
    pub probability_level: String,

    /// `true`: a person is relevant when every condition holds.
    /// `false`: when any condition holds.
    pub attribute_strict_conditions: bool,

    /// Activity that absorbs freed time when a removal leaves a gap before
    /// it.
    pub default_activity: String,
}

impl Default for RemoveActivityConfig {
    fn default() -> Self {
        Self {
            activities:                  Vec::new(),
            probability:                 1.0,
            policy_type:                 "activity".into(),
            probability_level:           "activity".into(),
            attribute_strict_conditions: true,
            default_activity:            "home".into(),
        }
    }
}

impl RemoveActivityConfig {
    pub fn new<S: Into<String>>(activities: impl IntoIterator<Item = S>, probability: f64) -> Self {
        Self {
            activities: activities.into_iter().map(Into::into).collect(),
            probability,
            ..Self::default()
        }
    }

    pub fn policy_type(mut self, scope: &str) -> Self {
        self.policy_type = scope.into();
        self
    }

    pub fn probability_level(mut self, scope: &str) -> Self {
        self.probability_level = scope.into();
        self
    }

    pub fn strict(mut self, strict: bool) -> Self {
        self.attribute_strict_conditions = strict;
        self
    }

    pub fn default_activity(mut self, act: &str) -> Self {
        self.default_activity = act.into();
        self
    }
}
