use pam_core::TimePoint;
use thiserror::Error;

use crate::ElementKind;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PlanError {
    #[error("plan has no elements")]
    Empty,

    #[error("element {index} must be {expected} but is {found}")]
    Alternation {
        index:    usize,
        expected: ElementKind,
        found:    ElementKind,
    },

    #[error("plan has even length {0}; it must end with an activity")]
    EvenLength(usize),

    #[error("plan starts at {0} instead of the start of the day")]
    StartsLate(TimePoint),

    #[error("plan ends at {0} instead of the end of the day")]
    EndsEarly(TimePoint),

    #[error("element {index} ends at {end} but the next element starts at {start}")]
    Discontinuity {
        index: usize,
        end:   TimePoint,
        start: TimePoint,
    },

    #[error("element {index} starts at {start}, after its end at {end}")]
    InvertedWindow {
        index: usize,
        start: TimePoint,
        end:   TimePoint,
    },

    #[error("cannot remove the only activity of a plan")]
    SoleActivity,

    #[error("no activity at index {0}")]
    NoActivityAt(usize),
}

impl PlanError {
    /// `true` for errors that describe a broken plan shape, as opposed to a
    /// request for an element that does not exist.
    pub fn is_structural(&self) -> bool {
        !matches!(self, PlanError::NoActivityAt(_))
    }
}

pub type PlanResult<T> = Result<T, PlanError>;
