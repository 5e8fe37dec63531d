//! Day-relative time model.
//!
//! # Design
//!
//! A plan covers one simulated day.  Every instant in it is a `TimePoint`:
//! whole minutes since the day origin.  The mapping to wall-clock time is held
//! in `DayClock`:
//!
//!   wall_time = origin_unix_secs + minutes * 60
//!
//! Integer minutes keep all retiming arithmetic exact.
//!
//! # End of day
//!
//! The last activity of every plan ends at [`END_OF_DAY`].  It is *not* the
//! same instant as "minute 1440": surveys routinely record trips after
//! midnight (minute 1500 is a valid `TimePoint`), and the sentinel must still
//! sort after all of them.  It is stored as `u32::MAX` and is never produced
//! by arithmetic, so a plan that ends at `END_OF_DAY` keeps ending there
//! however its inner activities are retimed.  For durations the sentinel
//! resolves to [`MINUTES_PER_DAY`].

use std::fmt;

use crate::{CoreError, CoreResult};

/// Minutes in one simulated day.
pub const MINUTES_PER_DAY: u32 = 1_440;

/// Start of the simulated day (minute 0).
pub const DAY_START: TimePoint = TimePoint(0);

/// Terminal marker for the last activity of a plan.
pub const END_OF_DAY: TimePoint = TimePoint(u32::MAX);

// ── TimePoint ─────────────────────────────────────────────────────────────────

/// An instant within the simulated day, in minutes since [`DAY_START`].
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TimePoint(u32);

impl TimePoint {
    /// The instant `minutes` after the day origin.
    ///
    /// `u32::MAX` is reserved for [`END_OF_DAY`]; larger offsets are clamped
    /// one minute short of it.
    #[inline]
    pub const fn from_minutes(minutes: u32) -> TimePoint {
        if minutes == u32::MAX {
            TimePoint(u32::MAX - 1)
        } else {
            TimePoint(minutes)
        }
    }

    /// Convenience constructor from hours and minutes (`from_hm(13, 30)`).
    #[inline]
    pub const fn from_hm(hours: u32, minutes: u32) -> TimePoint {
        TimePoint::from_minutes(hours * 60 + minutes)
    }

    #[inline]
    pub fn is_end_of_day(self) -> bool {
        self == END_OF_DAY
    }

    /// Minutes since the origin, or `None` for [`END_OF_DAY`].
    #[inline]
    pub fn minutes(self) -> Option<u32> {
        (!self.is_end_of_day()).then_some(self.0)
    }

    /// Minutes since the origin, resolving [`END_OF_DAY`] to
    /// [`MINUTES_PER_DAY`].
    #[inline]
    pub fn resolved_minutes(self) -> u32 {
        if self.is_end_of_day() { MINUTES_PER_DAY } else { self.0 }
    }

    /// Minutes elapsed from `self` to `later`, saturating at zero.
    #[inline]
    pub fn duration_until(self, later: TimePoint) -> u32 {
        later.resolved_minutes().saturating_sub(self.resolved_minutes())
    }

    /// The instant `minutes` later.  [`END_OF_DAY`] stays where it is.
    #[inline]
    pub fn offset(self, minutes: u32) -> TimePoint {
        if self.is_end_of_day() {
            return self;
        }
        TimePoint::from_minutes(self.0.saturating_add(minutes))
    }

    /// The instant `minutes` earlier, saturating at [`DAY_START`].
    ///
    /// Rewinding from [`END_OF_DAY`] counts back from [`MINUTES_PER_DAY`].
    #[inline]
    pub fn rewind(self, minutes: u32) -> TimePoint {
        TimePoint(self.resolved_minutes().saturating_sub(minutes))
    }
}

impl std::ops::Sub for TimePoint {
    type Output = u32;

    /// Duration in minutes; see [`TimePoint::duration_until`].
    #[inline]
    fn sub(self, rhs: TimePoint) -> u32 {
        rhs.duration_until(self)
    }
}

impl fmt::Display for TimePoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.minutes() {
            Some(m) => write!(f, "{:02}:{:02}", m / 60, m % 60),
            None => f.write_str("EOD"),
        }
    }
}

// ── DayClock ──────────────────────────────────────────────────────────────────

/// Converts between `TimePoint`s and Unix wall-clock seconds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DayClock {
    /// Unix timestamp (seconds since epoch) of [`DAY_START`].
    pub origin_unix_secs: i64,
}

impl DayClock {
    pub fn new(origin_unix_secs: i64) -> Self {
        Self { origin_unix_secs }
    }

    /// Absolute timestamp of `time`.  [`END_OF_DAY`] maps to the origin of
    /// the following day.
    #[inline]
    pub fn to_unix_secs(&self, time: TimePoint) -> i64 {
        self.origin_unix_secs + time.resolved_minutes() as i64 * 60
    }

    /// Day-relative instant for `secs`, truncated to the whole minute.
    pub fn from_unix_secs(&self, secs: i64) -> CoreResult<TimePoint> {
        let elapsed = secs - self.origin_unix_secs;
        if elapsed < 0 {
            return Err(CoreError::BeforeDayOrigin { secs, origin: self.origin_unix_secs });
        }
        let minutes = u32::try_from(elapsed / 60)
            .map_err(|_| CoreError::Parse(format!("timestamp {secs} is too far past the day origin")))?;
        Ok(TimePoint::from_minutes(minutes))
    }
}
