//! Journal-driven tracker state machine.
//!
//! Consumes one journal entry at a time (after the state monitor has folded
//! it into the snapshot) and decides what is being farmed: a fixed hotspot,
//! a high grade emission, or nothing. Display updates are delegated to
//! [`MaterialDisplay`].

use chrono::{DateTime, Duration, Utc};
use matfarm_types::TrackerConfig;

use crate::game_data::{Material, MaterialCategory, find_location, matching_emissions};
use crate::journal::{JournalEntry, JournalEvent};
use crate::state::{GameSnapshot, SessionContext};

use super::display::{DisplayFrame, MaterialDisplay};
use super::state::{EmissionState, TrackingState};

/// Status shown once a valuable salvage signal was seen in the system.
pub const STATUS_HGE: &str = "HGE";
/// Status shown when only the system conditions suggest HGEs.
pub const STATUS_HGE_UNCONFIRMED: &str = "HGE?";

#[derive(Debug, Clone)]
pub struct Tracker {
    config: TrackerConfig,
    session: SessionContext,
    state: TrackingState,
    display: MaterialDisplay,
}

impl Default for Tracker {
    fn default() -> Self {
        Self::new(TrackerConfig::default())
    }
}

impl Tracker {
    pub fn new(config: TrackerConfig) -> Self {
        let display = MaterialDisplay::new(config.ungraded_cap);
        Self {
            config,
            session: SessionContext::new(),
            state: TrackingState::Idle,
            display,
        }
    }

    /// Process one journal entry against the post-event snapshot.
    ///
    /// Returns true when the rendered frame may have changed.
    pub fn handle_entry(
        &mut self,
        entry: &JournalEntry,
        snapshot: &GameSnapshot,
        now: DateTime<Utc>,
    ) -> bool {
        if matches!(entry.event, JournalEvent::Shutdown) {
            let changed = !self.state.is_idle()
                || !self.display.is_empty()
                || !self.display.status().is_empty();
            tracing::debug!("Shutdown, resetting tracker");
            self.reset();
            return changed;
        }

        let mut changed = false;

        self.note_localised_names(&entry.event);

        match &entry.event {
            JournalEvent::Location(system)
            | JournalEvent::FsdJump(system)
            | JournalEvent::CarrierJump(system) => {
                self.session.enter_system(system);
                tracing::debug!(
                    system = ?self.session.system.name,
                    allegiance = ?self.session.system.allegiance,
                    faction_state = ?self.session.system.faction_state,
                    population = self.session.system.population,
                    "Entered system"
                );
            }
            JournalEvent::FssSignalDiscovered(signal) if signal.is_very_valuable_salvage() => {
                self.session.saw_valuable_signal = true;
                if self.config.track_emissions && self.state.location().is_none() {
                    self.display.set_status(STATUS_HGE);
                    changed = true;
                }
            }
            _ => {}
        }

        changed |= self.drop_stale_tracking(snapshot);

        let acquired = self.state.is_idle() && self.acquire(snapshot);
        changed |= acquired;

        if let JournalEvent::MaterialCollected(collected) = &entry.event
            && let Some(material) = Material::resolve_str(&collected.category, &collected.name)
        {
            let expires_at = self.temp_row_expiry(now);
            self.display.add_temp_row(material, expires_at, &self.session);
            changed = true;
        }

        if acquired || entry.event.touches_inventory() {
            changed |= self.display.refresh_quantities(snapshot);
        }

        changed
    }

    /// Sweep expired temporary rows. Returns true if any were removed.
    pub fn expire(&mut self, now: DateTime<Utc>) -> bool {
        let removed = self.display.expire(now);
        if removed > 0 {
            tracing::debug!(removed, "Expired temporary rows");
        }
        removed > 0
    }

    pub fn frame(&self, now: DateTime<Utc>) -> DisplayFrame {
        let trader = self.state.location().and_then(|location| location.trader);
        self.display.frame(trader, now)
    }

    /// Back to idle with an empty display and a fresh session.
    pub fn reset(&mut self) {
        self.state = TrackingState::Idle;
        self.display.clear_status();
        self.display.clear_all();
        self.session.reset();
    }

    // --- Accessors ---

    pub fn config(&self) -> &TrackerConfig {
        &self.config
    }

    pub fn session(&self) -> &SessionContext {
        &self.session
    }

    pub fn state(&self) -> &TrackingState {
        &self.state
    }

    pub fn display(&self) -> &MaterialDisplay {
        &self.display
    }

    // --- Internals ---

    fn temp_row_expiry(&self, now: DateTime<Utc>) -> DateTime<Utc> {
        i64::try_from(self.config.temp_row_ttl_secs)
            .ok()
            .and_then(Duration::try_seconds)
            .and_then(|ttl| now.checked_add_signed(ttl))
            .unwrap_or(DateTime::<Utc>::MAX_UTC)
    }

    fn note_localised_names(&mut self, event: &JournalEvent) {
        match event {
            JournalEvent::MaterialCollected(collected) => {
                if let Some(material) = Material::resolve_str(&collected.category, &collected.name) {
                    self.session
                        .note_localised_name(material, collected.name_localised.as_deref());
                }
            }
            JournalEvent::Materials(inventory) => {
                let lists = [
                    (MaterialCategory::Raw, &inventory.raw),
                    (MaterialCategory::Manufactured, &inventory.manufactured),
                    (MaterialCategory::Encoded, &inventory.encoded),
                ];
                for (category, items) in lists {
                    for item in items {
                        if let Some(material) = Material::resolve(category, &item.name) {
                            self.session
                                .note_localised_name(material, item.name_localised.as_deref());
                        }
                    }
                }
            }
            _ => {}
        }
    }

    /// Go idle if the tracked location/emission no longer applies.
    fn drop_stale_tracking(&mut self, snapshot: &GameSnapshot) -> bool {
        if self.state.is_valid_for(snapshot) {
            return false;
        }

        match &self.state {
            TrackingState::Location(location) => tracing::debug!(
                tracked_system = location.system,
                tracked_body = location.body,
                system = ?snapshot.system(),
                body = ?snapshot.body(),
                "Clearing tracked location"
            ),
            TrackingState::Emission(emission) => tracing::debug!(
                tracked_system = ?emission.system,
                system = ?snapshot.system(),
                body = ?snapshot.body(),
                "Clearing tracked emission"
            ),
            TrackingState::Idle => {}
        }

        self.state = TrackingState::Idle;
        self.display.clear_status();
        self.display.clear_all();
        true
    }

    /// Start tracking whatever the snapshot position offers.
    fn acquire(&mut self, snapshot: &GameSnapshot) -> bool {
        if let Some(location) = find_location(snapshot.system(), snapshot.body()) {
            tracing::debug!(
                name = location.name,
                system = location.system,
                body = location.body,
                "Tracking new location"
            );
            self.state = TrackingState::Location(location);
            self.display.set_status(location.name);
            self.display.add_rows(location.materials, &self.session);
            return true;
        }

        // Emissions are only tracked away from bodies
        if !self.config.track_emissions || snapshot.body().is_some() {
            return false;
        }

        let system = &self.session.system;
        let emissions = matching_emissions(
            system.allegiance.as_deref(),
            system.faction_state.as_deref(),
            system.population,
            self.config.hge_min_population,
        );
        if emissions.is_empty() && !self.session.saw_valuable_signal {
            return false;
        }

        tracing::debug!(
            system = ?snapshot.system(),
            conditions = emissions.len(),
            confirmed = self.session.saw_valuable_signal,
            "Tracking new emission"
        );
        let status = if self.session.saw_valuable_signal {
            STATUS_HGE
        } else {
            STATUS_HGE_UNCONFIRMED
        };
        self.display.set_status(status);
        for emission in &emissions {
            self.display.add_rows(emission.materials, &self.session);
        }
        self.state = TrackingState::Emission(EmissionState {
            system: snapshot.system_name.clone(),
            emissions,
        });
        true
    }
}
