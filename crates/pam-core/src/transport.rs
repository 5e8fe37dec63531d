//! Travel mode enum shared by legs, loaders, and output writers.

use std::str::FromStr;

use crate::CoreError;

/// The means by which a leg is travelled.
///
/// Survey labels without a dedicated variant are kept verbatim in
/// [`TransportMode::Other`].
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[non_exhaustive]
pub enum TransportMode {
    /// Private vehicle, as driver or passenger.
    Car,
    /// On foot.
    Walk,
    /// Bicycle.
    Bike,
    /// Scheduled public transport without a more specific sub-mode.
    Pt,
    Bus,
    Rail,
    Taxi,
    /// Walking access/egress stage of a public transport trip.
    TransitWalk,
    /// Any other survey mode label, e.g. `ferry`.
    Other(String),
}

impl TransportMode {
    /// Survey label, also used for CSV column values.
    pub fn as_str(&self) -> &str {
        match self {
            TransportMode::Car         => "car",
            TransportMode::Walk        => "walk",
            TransportMode::Bike        => "bike",
            TransportMode::Pt          => "pt",
            TransportMode::Bus         => "bus",
            TransportMode::Rail        => "rail",
            TransportMode::Taxi        => "taxi",
            TransportMode::TransitWalk => "transit_walk",
            TransportMode::Other(label) => label,
        }
    }
}

impl std::fmt::Display for TransportMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TransportMode {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, CoreError> {
        match s.trim() {
            "car"          => Ok(TransportMode::Car),
            "walk"         => Ok(TransportMode::Walk),
            "bike"         => Ok(TransportMode::Bike),
            "pt"           => Ok(TransportMode::Pt),
            "bus"          => Ok(TransportMode::Bus),
            "rail"         => Ok(TransportMode::Rail),
            "taxi"         => Ok(TransportMode::Taxi),
            "transit_walk" => Ok(TransportMode::TransitWalk),
            ""             => Err(CoreError::Parse("empty travel mode".into())),
            other          => Ok(TransportMode::Other(other.to_owned())),
        }
    }
}
