use hashbrown::HashMap;

use crate::game_data::Material;
use crate::journal::event::SystemEvent;
use crate::state::info::SystemInfo;

/// Per-session context the tracker consults when deciding what to show.
///
/// Created when the tracker starts and reset on `Shutdown`.
#[derive(Debug, Clone, Default)]
pub struct SessionContext {
    pub system: SystemInfo,
    /// Set once a very valuable salvage signal was seen in this system
    pub saw_valuable_signal: bool,
    localised_names: HashMap<Material, String>,
}

impl SessionContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the system state from a jump/location event.
    /// Clears the valuable-signal flag: signals belong to the system they were seen in.
    pub fn enter_system(&mut self, event: &SystemEvent) {
        self.system = SystemInfo::from_event(event);
        self.saw_valuable_signal = false;
    }

    /// Remember the journal's localised name for a material.
    pub fn note_localised_name(&mut self, material: Material, localised: Option<&str>) {
        if let Some(name) = localised.filter(|name| !name.is_empty()) {
            self.localised_names.insert(material, name.to_string());
        }
    }

    /// Name to display for a material: the localised name if one was seen,
    /// otherwise the catalog name.
    pub fn display_name(&self, material: &Material) -> Option<&str> {
        self.localised_names
            .get(material)
            .map(String::as_str)
            .or_else(|| material.info().map(|info| info.name))
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
