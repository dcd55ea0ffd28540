use serde::{Deserialize, Serialize};

use crate::journal::event::SystemEvent;

/// What the last `Location`/`FSDJump` told us about the current system.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SystemInfo {
    pub name: Option<String>,
    pub allegiance: Option<String>,
    pub faction_state: Option<String>,
    pub population: u64,
}

impl SystemInfo {
    pub fn from_event(event: &SystemEvent) -> Self {
        Self {
            name: event.star_system.clone(),
            allegiance: event.system_allegiance.clone(),
            faction_state: event.system_faction.faction_state.clone(),
            population: event.population,
        }
    }
}
