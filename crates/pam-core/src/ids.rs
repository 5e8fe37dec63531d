//! Strongly typed, zero-cost identifier wrappers.
//!
//! All IDs are `Copy + Ord + Hash` so they can be used as map keys and sorted
//! collection elements without ceremony.  Travel surveys hand out numeric
//! household, person, and zone identifiers, so every wrapper holds a `u32`.

use std::fmt;
use std::str::FromStr;

use crate::CoreError;

/// Generate a typed ID wrapper around a primitive integer.
macro_rules! typed_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident($inner:ty);) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        $vis struct $name(pub $inner);

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }

        impl From<$inner> for $name {
            #[inline(always)]
            fn from(n: $inner) -> $name {
                $name(n)
            }
        }

        impl FromStr for $name {
            type Err = CoreError;

            fn from_str(s: &str) -> Result<$name, CoreError> {
                s.trim().parse::<$inner>().map($name).map_err(|_| {
                    CoreError::Parse(format!(
                        "invalid {} {s:?}: expected an unsigned integer",
                        stringify!($name)
                    ))
                })
            }
        }
    };
}

typed_id! {
    /// Identifier of a household in the survey.
    pub struct HouseholdId(u32);
}

typed_id! {
    /// Identifier of a person.  Unique within a household.
    pub struct PersonId(u32);
}

typed_id! {
    /// Identifier of a spatial zone (the "area" activities take place in).
    pub struct AreaId(u32);
}
