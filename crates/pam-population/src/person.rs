use pam_core::{AreaId, PersonId};
use pam_plan::{Activity, Leg, Plan, PlanElement, PlanResult};

use crate::{AttributeValue, Attributes};

/// One household member and their day.
#[derive(Clone, Debug, PartialEq)]
pub struct Person {
    pub pid:        PersonId,
    pub attributes: Attributes,
    pub home_area:  Option<AreaId>,
    pub plan:       Plan,
}

impl Person {
    pub fn new(pid: PersonId) -> Self {
        Self { pid, attributes: Attributes::new(), home_area: None, plan: Plan::new() }
    }

    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<AttributeValue>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    pub fn with_home_area(mut self, area: AreaId) -> Self {
        self.home_area = Some(area);
        self
    }

    pub fn with_plan(mut self, plan: Plan) -> Self {
        self.plan = plan;
        self
    }

    /// Append an element to the plan; see [`Plan::add`].
    pub fn add(&mut self, element: impl Into<PlanElement>) -> PlanResult<()> {
        self.plan.add(element)
    }

    pub fn attribute(&self, key: &str) -> Option<&AttributeValue> {
        self.attributes.get(key)
    }

    pub fn activities(&self) -> impl Iterator<Item = &Activity> + Clone + '_ {
        self.plan.activities()
    }

    pub fn legs(&self) -> impl Iterator<Item = &Leg> + Clone + '_ {
        self.plan.legs()
    }
}
