//! Plan elements: `Activity`, `Leg`, and the `PlanElement` sum type.
//!
//! Elements are plain records.  Ordering is carried by `seq` (1-based, counted
//! separately for activities and legs) and by position in the owning
//! [`Plan`](crate::Plan); only the plan enforces how neighbours relate.

use std::fmt;

use pam_core::{AreaId, TimePoint, TransportMode};

// ── ElementKind ───────────────────────────────────────────────────────────────

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ElementKind {
    Activity,
    Leg,
}

impl ElementKind {
    /// The kind that must follow `self` in a plan.
    #[inline]
    pub fn next(self) -> ElementKind {
        match self {
            ElementKind::Activity => ElementKind::Leg,
            ElementKind::Leg => ElementKind::Activity,
        }
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ElementKind::Activity => "an activity",
            ElementKind::Leg => "a leg",
        })
    }
}

// ── Activity ──────────────────────────────────────────────────────────────────

/// Time spent at one place doing one thing.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Activity {
    pub seq:        u32,
    /// Activity label, e.g. `"home"`, `"work"`, `"education"`.
    pub act:        String,
    pub area:       AreaId,
    pub start_time: TimePoint,
    pub end_time:   TimePoint,
}

impl Activity {
    pub fn new(
        seq: u32,
        act: impl Into<String>,
        area: AreaId,
        start_time: TimePoint,
        end_time: TimePoint,
    ) -> Self {
        Self { seq, act: act.into(), area, start_time, end_time }
    }

    /// Minutes spent in the activity.
    #[inline]
    pub fn duration(&self) -> u32 {
        self.start_time.duration_until(self.end_time)
    }

    /// Same label at the same place; times and `seq` are ignored.
    #[inline]
    pub fn is_same_stay(&self, other: &Activity) -> bool {
        self.act == other.act && self.area == other.area
    }
}

// ── Leg ───────────────────────────────────────────────────────────────────────

/// A trip between two activities.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Leg {
    pub seq:        u32,
    pub mode:       TransportMode,
    pub start_area: AreaId,
    pub end_area:   AreaId,
    /// Label of the activity the trip leads to, when the survey recorded it.
    pub purpose:    Option<String>,
    pub start_time: TimePoint,
    pub end_time:   TimePoint,
}

impl Leg {
    pub fn new(
        seq: u32,
        mode: TransportMode,
        start_area: AreaId,
        end_area: AreaId,
        start_time: TimePoint,
        end_time: TimePoint,
    ) -> Self {
        Self { seq, mode, start_area, end_area, purpose: None, start_time, end_time }
    }

    pub fn with_purpose(mut self, purpose: impl Into<String>) -> Self {
        self.purpose = Some(purpose.into());
        self
    }

    /// Travel time in minutes.
    #[inline]
    pub fn duration(&self) -> u32 {
        self.start_time.duration_until(self.end_time)
    }

    /// A trip that returns to the area it left from.
    #[inline]
    pub fn is_closed_loop(&self) -> bool {
        self.start_area == self.end_area
    }
}

// ── PlanElement ───────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PlanElement {
    Activity(Activity),
    Leg(Leg),
}

impl PlanElement {
    #[inline]
    pub fn kind(&self) -> ElementKind {
        match self {
            PlanElement::Activity(_) => ElementKind::Activity,
            PlanElement::Leg(_) => ElementKind::Leg,
        }
    }

    #[inline]
    pub fn start_time(&self) -> TimePoint {
        match self {
            PlanElement::Activity(a) => a.start_time,
            PlanElement::Leg(l) => l.start_time,
        }
    }

    #[inline]
    pub fn end_time(&self) -> TimePoint {
        match self {
            PlanElement::Activity(a) => a.end_time,
            PlanElement::Leg(l) => l.end_time,
        }
    }

    pub fn as_activity(&self) -> Option<&Activity> {
        match self {
            PlanElement::Activity(a) => Some(a),
            PlanElement::Leg(_) => None,
        }
    }

    pub fn as_leg(&self) -> Option<&Leg> {
        match self {
            PlanElement::Leg(l) => Some(l),
            PlanElement::Activity(_) => None,
        }
    }

    pub(crate) fn as_activity_mut(&mut self) -> Option<&mut Activity> {
        match self {
            PlanElement::Activity(a) => Some(a),
            PlanElement::Leg(_) => None,
        }
    }

    pub(crate) fn set_seq(&mut self, seq: u32) {
        match self {
            PlanElement::Activity(a) => a.seq = seq,
            PlanElement::Leg(l) => l.seq = seq,
        }
    }
}

impl From<Activity> for PlanElement {
    fn from(a: Activity) -> Self {
        PlanElement::Activity(a)
    }
}

impl From<Leg> for PlanElement {
    fn from(l: Leg) -> Self {
        PlanElement::Leg(l)
    }
}
