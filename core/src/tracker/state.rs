use crate::game_data::{EmissionInfo, LocationInfo};
use crate::state::GameSnapshot;

/// An HGE state locked to the system it was detected in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmissionState {
    pub system: Option<String>,
    /// Conditions that matched on acquisition. May be empty when tracking
    /// was started by a signal alone.
    pub emissions: Vec<&'static EmissionInfo>,
}

/// What the player is currently farming. Location and emission tracking
/// are mutually exclusive.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum TrackingState {
    #[default]
    Idle,
    Location(&'static LocationInfo),
    Emission(EmissionState),
}

impl TrackingState {
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    pub fn location(&self) -> Option<&'static LocationInfo> {
        match self {
            Self::Location(location) => Some(*location),
            _ => None,
        }
    }

    pub fn emission(&self) -> Option<&EmissionState> {
        match self {
            Self::Emission(emission) => Some(emission),
            _ => None,
        }
    }

    /// Whether the tracked state still applies at the snapshot's position.
    ///
    /// A location needs the exact system and body. An emission needs the
    /// same system and no body at all: HGEs are deep-space signals, so
    /// arriving at any body ends them.
    pub fn is_valid_for(&self, snapshot: &GameSnapshot) -> bool {
        match self {
            Self::Idle => true,
            Self::Location(location) => {
                snapshot.system() == Some(location.system) && snapshot.body() == Some(location.body)
            }
            Self::Emission(emission) => {
                emission.system.as_deref() == snapshot.system() && snapshot.body().is_none()
            }
        }
    }
}
