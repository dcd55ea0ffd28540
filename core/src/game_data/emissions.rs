//! High grade emission conditions.
//!
//! HGE signal sources are procedural: which materials they drop depends on
//! the controlling faction's allegiance and state, not on coordinates.

use super::*;

/// A condition under which HGEs carry a known set of materials.
/// `None` filters match anything.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmissionInfo {
    pub allegiance: Option<&'static str>,
    pub faction_state: Option<&'static str>,
    pub materials: &'static [Material],
}

impl EmissionInfo {
    pub fn matches(&self, allegiance: Option<&str>, faction_state: Option<&str>) -> bool {
        if let Some(required) = self.allegiance
            && Some(required) != allegiance
        {
            return false;
        }
        if let Some(required) = self.faction_state
            && Some(required) != faction_state
        {
            return false;
        }
        true
    }
}

const WAR_MATERIALS: &[Material] = &[MFG_MILITARYGRADEALLOYS, MFG_MILITARYSUPERCAPACITORS];

pub static EMISSIONS: &[EmissionInfo] = &[
    EmissionInfo {
        allegiance: Some("Empire"),
        faction_state: None,
        materials: &[MFG_IMPERIALSHIELDING],
    },
    EmissionInfo {
        allegiance: Some("Federation"),
        faction_state: None,
        materials: &[MFG_FEDCORECOMPOSITES, MFG_FEDPROPRIETARYCOMPOSITES],
    },
    EmissionInfo {
        allegiance: None,
        faction_state: Some("Boom"),
        materials: &[
            MFG_EXQUISITEFOCUSCRYSTALS,
            MFG_PROTOLIGHTALLOYS,
            MFG_PROTORADIOLICALLOYS,
        ],
    },
    EmissionInfo {
        allegiance: None,
        faction_state: Some("CivilUnrest"),
        materials: &[MFG_IMPROVISEDCOMPONENTS],
    },
    EmissionInfo {
        allegiance: None,
        faction_state: Some("War"),
        materials: WAR_MATERIALS,
    },
    EmissionInfo {
        allegiance: None,
        faction_state: Some("CivilWar"),
        materials: WAR_MATERIALS,
    },
    EmissionInfo {
        allegiance: None,
        faction_state: Some("Outbreak"),
        materials: &[MFG_PHARMACEUTICALISOLATORS],
    },
];

/// Every emission condition satisfied by the current system.
///
/// Nothing matches below `min_population`; low population systems rarely
/// spawn HGEs even when the faction conditions line up.
pub fn matching_emissions(
    allegiance: Option<&str>,
    faction_state: Option<&str>,
    population: u64,
    min_population: u64,
) -> Vec<&'static EmissionInfo> {
    if population < min_population {
        return Vec::new();
    }
    EMISSIONS
        .iter()
        .filter(|emission| emission.matches(allegiance, faction_state))
        .collect()
}
