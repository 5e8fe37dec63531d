//! `Plan` — the ordered activity/leg sequence and its mutation primitives.
//!
//! # Removing an activity
//!
//! Dropping an activity also drops the trips that served it:
//!
//! ```text
//! first:     [A0] L1  A2  …        → A2 …          (gap at day start)
//! last:      … A4  L5 [A6]         → … A4          (gap at day end)
//! interior:  A0  L1 [A2] L3  A4    → A0  A4        (gap between A0 and A4)
//! ```
//!
//! [`Plan::remove_activity`] only cuts.  [`Plan::fill_plan`] then closes the
//! gap: leading and trailing gaps are absorbed by the surviving neighbour;
//! interior gaps either leave two identical stays touching (folded later by
//! [`Plan::simplify`]) or get a bridging leg between the two different
//! neighbours.  Only after `simplify` is the plan guaranteed valid again.

use std::ops::Range;

use pam_core::{DAY_START, END_OF_DAY, TimePoint};
use tracing::trace;

use crate::{Activity, ElementKind, Leg, PlanElement, PlanError, PlanResult};

// ── Removal ───────────────────────────────────────────────────────────────────

/// Where a vacated window sits in the plan.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GapKind {
    /// The first activity was removed.
    Leading,
    /// The last activity was removed.
    Trailing,
    /// An inner activity was removed together with both of its legs.
    /// `outbound` is the removed leg that led on to the following activity.
    Interior { outbound: Leg },
}

/// What [`Plan::remove_activity`] cut out of the plan.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Removal {
    /// Element indices removed, relative to the plan before the cut.
    pub range:     Range<usize>,
    pub gap_start: TimePoint,
    pub gap_end:   TimePoint,
    pub kind:      GapKind,
    pub activity:  Activity,
}

// ── Plan ──────────────────────────────────────────────────────────────────────

/// A person's day: `Activity, Leg, Activity, …, Activity`.
///
/// Equality is structural: two plans are equal when their element sequences
/// are equal field by field.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Plan {
    elements: Vec<PlanElement>,
}

impl Plan {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a plan by `add`ing each element in order.
    pub fn from_elements<I>(elements: I) -> PlanResult<Self>
    where
        I: IntoIterator<Item = PlanElement>,
    {
        let mut plan = Plan::new();
        for element in elements {
            plan.add(element)?;
        }
        Ok(plan)
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Read-only slice of all elements in plan order.
    pub fn elements(&self) -> &[PlanElement] {
        &self.elements
    }

    pub fn get(&self, index: usize) -> Option<&PlanElement> {
        self.elements.get(index)
    }

    // ── Construction ──────────────────────────────────────────────────────

    /// Append `element`.
    ///
    /// Only alternation is checked here: a plan under construction is allowed
    /// to be temporally incomplete until [`validate`](Self::validate) runs.
    pub fn add(&mut self, element: impl Into<PlanElement>) -> PlanResult<()> {
        let element = element.into();
        let expected = match self.elements.last() {
            None => ElementKind::Activity,
            Some(tail) => tail.kind().next(),
        };
        if element.kind() != expected {
            return Err(PlanError::Alternation {
                index: self.elements.len(),
                expected,
                found: element.kind(),
            });
        }
        self.elements.push(element);
        Ok(())
    }

    // ── Queries ───────────────────────────────────────────────────────────

    /// Activities in plan order.  Cheap to clone and restart.
    pub fn activities(&self) -> impl Iterator<Item = &Activity> + Clone + '_ {
        self.elements.iter().filter_map(PlanElement::as_activity)
    }

    /// Legs in plan order.  Cheap to clone and restart.
    pub fn legs(&self) -> impl Iterator<Item = &Leg> + Clone + '_ {
        self.elements.iter().filter_map(PlanElement::as_leg)
    }

    /// Element indices of all activities, paired with the activity.
    pub fn indexed_activities(&self) -> impl Iterator<Item = (usize, &Activity)> + '_ {
        self.elements
            .iter()
            .enumerate()
            .filter_map(|(i, e)| e.as_activity().map(|a| (i, a)))
    }

    pub fn activity_labels(&self) -> Vec<&str> {
        self.activities().map(|a| a.act.as_str()).collect()
    }

    pub fn first_activity(&self) -> Option<&Activity> {
        self.elements.first().and_then(PlanElement::as_activity)
    }

    pub fn last_activity(&self) -> Option<&Activity> {
        self.elements.last().and_then(PlanElement::as_activity)
    }

    /// `true` when the day begins and ends with the same stay (typically
    /// home → … → home).
    pub fn starts_and_ends_with_same_activity(&self) -> bool {
        match (self.first_activity(), self.last_activity()) {
            (Some(first), Some(last)) => first.is_same_stay(last),
            _ => false,
        }
    }

    // ── Validation ────────────────────────────────────────────────────────

    /// Check alternation, day boundaries, and temporal continuity.
    pub fn validate(&self) -> PlanResult<()> {
        let first = self.elements.first().ok_or(PlanError::Empty)?;

        for (index, element) in self.elements.iter().enumerate() {
            let expected = if index % 2 == 0 { ElementKind::Activity } else { ElementKind::Leg };
            if element.kind() != expected {
                return Err(PlanError::Alternation { index, expected, found: element.kind() });
            }
            if element.start_time() > element.end_time() {
                return Err(PlanError::InvertedWindow {
                    index,
                    start: element.start_time(),
                    end:   element.end_time(),
                });
            }
        }
        if self.elements.len() % 2 == 0 {
            return Err(PlanError::EvenLength(self.elements.len()));
        }

        if first.start_time() != DAY_START {
            return Err(PlanError::StartsLate(first.start_time()));
        }
        let last = &self.elements[self.elements.len() - 1];
        if last.end_time() != END_OF_DAY {
            return Err(PlanError::EndsEarly(last.end_time()));
        }

        for (index, pair) in self.elements.windows(2).enumerate() {
            if pair[0].end_time() != pair[1].start_time() {
                return Err(PlanError::Discontinuity {
                    index,
                    end:   pair[0].end_time(),
                    start: pair[1].start_time(),
                });
            }
        }
        Ok(())
    }

    // ── Mutation primitives ───────────────────────────────────────────────

    /// Cut the activity at `index` and the legs attached to it.
    ///
    /// The plan is left with a hole; call [`fill_plan`](Self::fill_plan) with
    /// the returned [`Removal`] before doing anything else with it.
    pub fn remove_activity(&mut self, index: usize) -> PlanResult<Removal> {
        let is_activity = self
            .elements
            .get(index)
            .is_some_and(|e| e.kind() == ElementKind::Activity);
        if !is_activity {
            return Err(PlanError::NoActivityAt(index));
        }
        let last = self.elements.len() - 1;
        if last == 0 {
            return Err(PlanError::SoleActivity);
        }

        let range = if index == 0 {
            0..2
        } else if index == last {
            index - 1..index + 1
        } else {
            index - 1..index + 2
        };
        // Every neighbour of an activity must be a leg for the cut to be clean.
        for i in range.clone() {
            let expected = if i == index { ElementKind::Activity } else { ElementKind::Leg };
            let found = self.elements[i].kind();
            if found != expected {
                return Err(PlanError::Alternation { index: i, expected, found });
            }
        }

        let gap_start = self.elements[range.start].start_time();
        let gap_end = self.elements[range.end - 1].end_time();
        let offset = index - range.start;
        let (mut activity, mut outbound) = (None, None);
        for (i, element) in self.elements.drain(range.clone()).enumerate() {
            match element {
                PlanElement::Activity(a) if i == offset => activity = Some(a),
                PlanElement::Leg(l) if i > offset => outbound = Some(l),
                _ => {}
            }
        }
        let activity = activity.ok_or(PlanError::NoActivityAt(index))?;

        let kind = if index == 0 {
            GapKind::Leading
        } else if index == last {
            GapKind::Trailing
        } else {
            let outbound = outbound.ok_or(PlanError::NoActivityAt(index))?;
            GapKind::Interior { outbound }
        };

        trace!(index, act = %activity.act, %gap_start, %gap_end, "cut activity");
        Ok(Removal { range, gap_start, gap_end, kind, activity })
    }

    /// Close the hole left by `removal`.
    ///
    /// For an interior gap between two different activities, a bridging leg
    /// is inserted that reuses the mode and travel time of the removed
    /// outbound leg.  When the following activity is `default_act` it starts
    /// early to absorb the freed time; otherwise the preceding activity runs
    /// late.
    pub fn fill_plan(&mut self, removal: &Removal, default_act: &str) -> PlanResult<()> {
        match &removal.kind {
            GapKind::Leading => {
                self.activity_mut(0)?.start_time = removal.gap_start;
            }
            GapKind::Trailing => {
                let last = self.elements.len().checked_sub(1).ok_or(PlanError::Empty)?;
                self.activity_mut(last)?.end_time = END_OF_DAY;
            }
            GapKind::Interior { outbound } => {
                let next_idx = removal.range.start;
                let prev_idx = next_idx.checked_sub(1).ok_or(PlanError::NoActivityAt(0))?;
                let prev = self.activity_at(prev_idx)?.clone();
                let next = self.activity_at(next_idx)?.clone();

                if prev.is_same_stay(&next) {
                    // Touching duplicates; `simplify` folds them.
                    self.activity_mut(prev_idx)?.end_time = removal.gap_end;
                } else {
                    let travel = outbound
                        .duration()
                        .min(removal.gap_start.duration_until(removal.gap_end));
                    let (leg_start, leg_end) = if next.act == default_act {
                        let leg_end = removal.gap_start.offset(travel);
                        self.activity_mut(next_idx)?.start_time = leg_end;
                        (removal.gap_start, leg_end)
                    } else {
                        let leg_start = removal.gap_end.rewind(travel);
                        self.activity_mut(prev_idx)?.end_time = leg_start;
                        (leg_start, removal.gap_end)
                    };
                    let bridge = Leg::new(
                        outbound.seq,
                        outbound.mode.clone(),
                        prev.area,
                        next.area,
                        leg_start,
                        leg_end,
                    )
                    .with_purpose(next.act.clone());
                    self.elements.insert(next_idx, PlanElement::Leg(bridge));
                }
            }
        }

        if self.elements.len() == 1 {
            let only = self.activity_mut(0)?;
            only.start_time = DAY_START;
            only.end_time = END_OF_DAY;
        }
        Ok(())
    }

    /// Fold activities left touching by interior removals into one.
    ///
    /// Only identical stays are folded.  Does not renumber or validate;
    /// returns the number of folds.
    pub fn merge_adjacent_duplicates(&mut self) -> usize {
        let mut merged = 0;
        let mut i = 0;
        while i + 1 < self.elements.len() {
            let end = match (&self.elements[i], &self.elements[i + 1]) {
                (PlanElement::Activity(a), PlanElement::Activity(b)) if a.is_same_stay(b) => {
                    Some(b.end_time)
                }
                _ => None,
            };
            match end {
                Some(end) => {
                    self.elements.remove(i + 1);
                    if let Some(a) = self.elements[i].as_activity_mut() {
                        a.end_time = end;
                    }
                    merged += 1;
                }
                None => i += 1,
            }
        }
        merged
    }

    /// Fold duplicate stays, renumber, and validate.
    ///
    /// Two identical activities are folded when they touch or when only a
    /// closed-loop leg separates them.  Afterwards activity and leg `seq`
    /// values each run contiguously from 1.
    pub fn simplify(&mut self) -> PlanResult<()> {
        let mut merged = self.merge_adjacent_duplicates();

        let mut i = 0;
        while i + 2 < self.elements.len() {
            let end = match (&self.elements[i], &self.elements[i + 1], &self.elements[i + 2]) {
                (PlanElement::Activity(a), PlanElement::Leg(l), PlanElement::Activity(b))
                    if l.is_closed_loop() && a.is_same_stay(b) =>
                {
                    Some(b.end_time)
                }
                _ => None,
            };
            match end {
                Some(end) => {
                    self.elements.drain(i + 1..i + 3);
                    if let Some(a) = self.elements[i].as_activity_mut() {
                        a.end_time = end;
                    }
                    merged += 1;
                }
                None => i += 1,
            }
        }
        if merged > 0 {
            trace!(merged, "folded duplicate activities");
        }

        self.renumber();
        self.validate()
    }

    /// Remove every activity at `indices`, then `simplify`.
    ///
    /// Indices refer to the plan as it is now.  They are processed from the
    /// back so earlier indices stay valid.  A batch that would remove the
    /// last remaining activity fails with [`PlanError::SoleActivity`].  The
    /// whole batch is applied to a copy and committed only if the result is
    /// valid.
    ///
    /// Returns the number of activities removed.
    pub fn remove_activities(&mut self, indices: &[usize], default_act: &str) -> PlanResult<usize> {
        let mut targets = indices.to_vec();
        targets.sort_unstable();
        targets.dedup();

        let mut work = self.clone();
        let mut removed = 0;
        for &index in targets.iter().rev() {
            if work.len() == 1 {
                return Err(PlanError::SoleActivity);
            }
            let removal = work.remove_activity(index)?;
            work.fill_plan(&removal, default_act)?;
            work.merge_adjacent_duplicates();
            removed += 1;
        }

        if removed > 0 {
            work.simplify()?;
            *self = work;
        }
        Ok(removed)
    }

    // ── Private helpers ───────────────────────────────────────────────────

    fn activity_at(&self, index: usize) -> PlanResult<&Activity> {
        self.elements
            .get(index)
            .and_then(PlanElement::as_activity)
            .ok_or(PlanError::NoActivityAt(index))
    }

    fn activity_mut(&mut self, index: usize) -> PlanResult<&mut Activity> {
        self.elements
            .get_mut(index)
            .and_then(PlanElement::as_activity_mut)
            .ok_or(PlanError::NoActivityAt(index))
    }

    fn renumber(&mut self) {
        let (mut acts, mut legs) = (0, 0);
        for element in &mut self.elements {
            let seq = match element.kind() {
                ElementKind::Activity => {
                    acts += 1;
                    acts
                }
                ElementKind::Leg => {
                    legs += 1;
                    legs
                }
            };
            element.set_seq(seq);
        }
    }
}
