use chrono::{DateTime, Utc};
use serde::Deserialize;

/// `USSType` of the signal that marks a high grade emission.
pub const USS_TYPE_VERY_VALUABLE_SALVAGE: &str = "$USS_Type_VeryValuableSalvage;";

/// One parsed journal line.
#[derive(Debug, Clone, PartialEq)]
pub struct JournalEntry {
    pub line_number: u64,
    pub timestamp: DateTime<Utc>,
    pub event: JournalEvent,
}

/// Journal events the tracker and state monitor care about.
/// Everything else is kept only by name.
#[derive(Debug, Clone, PartialEq)]
pub enum JournalEvent {
    Shutdown,
    Location(SystemEvent),
    FsdJump(SystemEvent),
    CarrierJump(SystemEvent),
    ApproachBody(BodyEvent),
    LeaveBody(BodyEvent),
    Touchdown(BodyEvent),
    Liftoff(BodyEvent),
    SupercruiseEntry(BodyEvent),
    SupercruiseExit(BodyEvent),
    FssSignalDiscovered(SignalDiscovered),
    MaterialCollected(MaterialCount),
    MaterialDiscarded(MaterialCount),
    Materials(MaterialsInventory),
    MaterialTrade(MaterialTrade),
    Other(String),
}

impl JournalEvent {
    /// Journal name of the event (`FSDJump`, `MaterialCollected`, ...)
    pub fn name(&self) -> &str {
        match self {
            Self::Shutdown => "Shutdown",
            Self::Location(_) => "Location",
            Self::FsdJump(_) => "FSDJump",
            Self::CarrierJump(_) => "CarrierJump",
            Self::ApproachBody(_) => "ApproachBody",
            Self::LeaveBody(_) => "LeaveBody",
            Self::Touchdown(_) => "Touchdown",
            Self::Liftoff(_) => "Liftoff",
            Self::SupercruiseEntry(_) => "SupercruiseEntry",
            Self::SupercruiseExit(_) => "SupercruiseExit",
            Self::FssSignalDiscovered(_) => "FSSSignalDiscovered",
            Self::MaterialCollected(_) => "MaterialCollected",
            Self::MaterialDiscarded(_) => "MaterialDiscarded",
            Self::Materials(_) => "Materials",
            Self::MaterialTrade(_) => "MaterialTrade",
            Self::Other(name) => name,
        }
    }

    /// Events that change material inventory counts.
    pub fn touches_inventory(&self) -> bool {
        matches!(
            self,
            Self::MaterialCollected(_)
                | Self::MaterialDiscarded(_)
                | Self::Materials(_)
                | Self::MaterialTrade(_)
        )
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct SystemFaction {
    #[serde(rename = "FactionState")]
    pub faction_state: Option<String>,
}

/// Arrival in a system: `Location`, `FSDJump`, `CarrierJump`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct SystemEvent {
    #[serde(rename = "StarSystem")]
    pub star_system: Option<String>,
    #[serde(rename = "Body")]
    pub body: Option<String>,
    #[serde(rename = "BodyType")]
    pub body_type: Option<String>,
    #[serde(rename = "SystemAllegiance")]
    pub system_allegiance: Option<String>,
    #[serde(rename = "SystemFaction", default)]
    pub system_faction: SystemFaction,
    #[serde(rename = "Population", default)]
    pub population: u64,
}

/// Events that move the player relative to a body.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct BodyEvent {
    #[serde(rename = "StarSystem")]
    pub star_system: Option<String>,
    #[serde(rename = "Body")]
    pub body: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct SignalDiscovered {
    #[serde(rename = "USSType")]
    pub uss_type: Option<String>,
}

impl SignalDiscovered {
    pub fn is_very_valuable_salvage(&self) -> bool {
        self.uss_type.as_deref() == Some(USS_TYPE_VERY_VALUABLE_SALVAGE)
    }
}

/// `MaterialCollected` / `MaterialDiscarded`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct MaterialCount {
    #[serde(rename = "Category")]
    pub category: String,
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Name_Localised")]
    pub name_localised: Option<String>,
    #[serde(rename = "Count", default = "one")]
    pub count: u32,
}

fn one() -> u32 {
    1
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct InventoryItem {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Name_Localised")]
    pub name_localised: Option<String>,
    #[serde(rename = "Count", default)]
    pub count: u32,
}

/// Full inventory dump written at game start.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct MaterialsInventory {
    #[serde(rename = "Raw", default)]
    pub raw: Vec<InventoryItem>,
    #[serde(rename = "Manufactured", default)]
    pub manufactured: Vec<InventoryItem>,
    #[serde(rename = "Encoded", default)]
    pub encoded: Vec<InventoryItem>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TradeLeg {
    #[serde(rename = "Material")]
    pub material: String,
    #[serde(rename = "Material_Localised")]
    pub material_localised: Option<String>,
    #[serde(rename = "Category")]
    pub category: String,
    #[serde(rename = "Quantity")]
    pub quantity: u32,
}

/// Material trader exchange.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct MaterialTrade {
    #[serde(rename = "Paid")]
    pub paid: TradeLeg,
    #[serde(rename = "Received")]
    pub received: TradeLeg,
}
