//! Game state monitor.
//!
//! Follows the journal to keep a [`GameSnapshot`] current: which system and
//! body the player is at and how many of each material they carry. Entries
//! must be applied here before the tracker sees them so the tracker works
//! from post-event state.

use crate::game_data::MaterialCategory;
use crate::state::GameSnapshot;

use super::event::{BodyEvent, InventoryItem, JournalEntry, JournalEvent, SystemEvent, TradeLeg};

const BODY_TYPE_PLANET: &str = "Planet";

#[derive(Debug, Clone, Default)]
pub struct StateMonitor {
    snapshot: GameSnapshot,
}

impl StateMonitor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn snapshot(&self) -> &GameSnapshot {
        &self.snapshot
    }

    /// Fold one journal entry into the snapshot.
    pub fn apply(&mut self, entry: &JournalEntry) {
        match &entry.event {
            JournalEvent::Location(system) => {
                self.set_system(system);
                self.snapshot.body = planet_body(system.body.as_deref(), system.body_type.as_deref());
            }
            JournalEvent::FsdJump(system) | JournalEvent::CarrierJump(system) => {
                self.set_system(system);
                self.snapshot.body = None;
            }
            JournalEvent::ApproachBody(body)
            | JournalEvent::Touchdown(body)
            | JournalEvent::Liftoff(body) => {
                self.set_system_name(body);
                if body.body.is_some() {
                    self.snapshot.body = body.body.clone();
                }
            }
            JournalEvent::LeaveBody(body) | JournalEvent::SupercruiseEntry(body) => {
                self.set_system_name(body);
                self.snapshot.body = None;
            }
            JournalEvent::SupercruiseExit(body) => {
                self.set_system_name(body);
                self.snapshot.body = body.body.clone();
            }
            JournalEvent::Materials(inventory) => {
                replace_inventory(&mut self.snapshot, MaterialCategory::Raw, &inventory.raw);
                replace_inventory(
                    &mut self.snapshot,
                    MaterialCategory::Manufactured,
                    &inventory.manufactured,
                );
                replace_inventory(&mut self.snapshot, MaterialCategory::Encoded, &inventory.encoded);
            }
            JournalEvent::MaterialCollected(mat) => {
                if let Some(category) = MaterialCategory::parse(&mat.category) {
                    self.adjust(category, &mat.name, i64::from(mat.count));
                }
            }
            JournalEvent::MaterialDiscarded(mat) => {
                if let Some(category) = MaterialCategory::parse(&mat.category) {
                    self.adjust(category, &mat.name, -i64::from(mat.count));
                }
            }
            JournalEvent::MaterialTrade(trade) => {
                self.adjust_leg(&trade.paid, -1);
                self.adjust_leg(&trade.received, 1);
            }
            JournalEvent::Shutdown
            | JournalEvent::FssSignalDiscovered(_)
            | JournalEvent::Other(_) => {}
        }
    }

    fn set_system(&mut self, system: &SystemEvent) {
        if system.star_system.is_some() {
            self.snapshot.system_name = system.star_system.clone();
        }
    }

    fn set_system_name(&mut self, body: &BodyEvent) {
        if body.star_system.is_some() {
            self.snapshot.system_name = body.star_system.clone();
        }
    }

    fn adjust_leg(&mut self, leg: &TradeLeg, sign: i64) {
        if let Some(category) = MaterialCategory::parse(&leg.category) {
            self.adjust(category, &leg.material, sign * i64::from(leg.quantity));
        }
    }

    /// Add `delta` to a carried count, never going below zero.
    fn adjust(&mut self, category: MaterialCategory, name: &str, delta: i64) {
        let entry = self
            .snapshot
            .inventory_mut(category)
            .entry(name.to_ascii_lowercase())
            .or_insert(0);
        let updated = (i64::from(*entry) + delta).clamp(0, i64::from(u32::MAX));
        *entry = updated as u32;
    }
}

/// Only planetary bodies count as "at a body" for hotspot matching.
fn planet_body(body: Option<&str>, body_type: Option<&str>) -> Option<String> {
    match (body, body_type) {
        (Some(body), Some(BODY_TYPE_PLANET)) => Some(body.to_string()),
        _ => None,
    }
}

fn replace_inventory(snapshot: &mut GameSnapshot, category: MaterialCategory, items: &[InventoryItem]) {
    let inventory = snapshot.inventory_mut(category);
    inventory.clear();
    for item in items {
        inventory.insert(item.name.to_ascii_lowercase(), item.count);
    }
}
