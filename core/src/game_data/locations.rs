//! Fixed farming hotspots, indexed by system.
//!
//! Keep each site's list to roughly seven materials, or just the G4/G5s,
//! so the row list stays readable.

use phf::phf_map;

use super::*;

/// Material trader near a hotspot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StationInfo {
    pub system: &'static str,
    pub station: &'static str,
}

/// A named site on a specific body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocationInfo {
    pub name: &'static str,
    pub system: &'static str,
    pub body: &'static str,
    pub materials: &'static [Material],
    pub trader: Option<StationInfo>,
}

const CRASHED_ANACONDA_MATERIALS: &[Material] = &[
    RAW_ANTIMONY,
    RAW_RUTHENIUM,
    RAW_TELLURIUM,
    RAW_TUNGSTEN,
    RAW_ZIRCONIUM,
];

pub static LOCATIONS: phf::Map<&'static str, &'static [LocationInfo]> = phf_map! {
    // https://canonn.science/codex/cmdr-john-jameson-crashed-cobra-mkiii/
    "HIP 12099" => &[LocationInfo {
        name: "Jameson Crash Site",
        system: "HIP 12099",
        body: "HIP 12099 1 b",
        materials: &[
            ENC_ADAPTIVEENCRYPTORS,
            ENC_ENCRYPTIONARCHIVES,
            ENC_INDUSTRIALFIRMWARE,
            ENC_CONSUMERFIRMWARE,
        ],
        trader: Some(StationInfo {
            system: "Diaguandri",
            station: "Ray Gateway",
        }),
    }],
    // https://canonn.science/codex/davs-hope/
    // The G4s listed here are the point of the site, but G1-3s spawn too.
    "Hyades Sector DR-V c2-23" => &[LocationInfo {
        name: "Dav's Hope",
        system: "Hyades Sector DR-V c2-23",
        body: "Hyades Sector DR-V c2-23 A 5",
        materials: &[
            MFG_CHEMICALMANIPULATORS,
            MFG_COMPOUNDSHIELDING,
            MFG_CONDUCTIVEPOLYMERS,
            MFG_CONFIGURABLECOMPONENTS,
            MFG_HEATVANES,
            MFG_POLYMERCAPACITORS,
            MFG_REFINEDFOCUSCRYSTALS,
        ],
        trader: Some(StationInfo {
            system: "HIP 12067",
            station: "Vaucanson Gateway",
        }),
    }],
    "Koli Discii" => &[LocationInfo {
        name: "Crashed Anaconda",
        system: "Koli Discii",
        body: "Koli Discii C 6 a",
        materials: CRASHED_ANACONDA_MATERIALS,
        trader: None,
    }],
    "Orrere" => &[LocationInfo {
        name: "Crashed Anaconda",
        system: "Orrere",
        body: "Orrere 2 b",
        materials: CRASHED_ANACONDA_MATERIALS,
        trader: None,
    }],
    // Brain trees (update 4.1 raw material sites)
    "35 G. Carinae" => &[
        LocationInfo {
            name: "Brain Tree",
            system: "35 G. Carinae",
            body: "35 G. Carinae 1 e",
            materials: &[RAW_ANTIMONY, RAW_CADMIUM, RAW_MOLYBDENUM],
            trader: None,
        },
        LocationInfo {
            name: "Brain Tree",
            system: "35 G. Carinae",
            body: "35 G. Carinae 2 a",
            materials: &[RAW_TECHNETIUM, RAW_NIOBIUM, RAW_TIN],
            trader: None,
        },
        LocationInfo {
            name: "Brain Tree",
            system: "35 G. Carinae",
            body: "35 G. Carinae 2 c",
            materials: &[RAW_RUTHENIUM, RAW_MOLYBDENUM, RAW_TUNGSTEN],
            trader: None,
        },
        LocationInfo {
            name: "Brain Tree",
            system: "35 G. Carinae",
            body: "35 G. Carinae 2 d",
            materials: &[RAW_YTTRIUM, RAW_NIOBIUM, RAW_TUNGSTEN],
            trader: None,
        },
    ],
    "HR 3230" => &[LocationInfo {
        name: "Brain Tree",
        system: "HR 3230",
        body: "HR 3230 3 a a",
        materials: &[RAW_SELENIUM, RAW_TECHNETIUM, RAW_NIOBIUM, RAW_TIN],
        trader: None,
    }],
    "Synuefe SE-V b49-4" => &[LocationInfo {
        name: "Brain Tree",
        system: "Synuefe SE-V b49-4",
        body: "Synuefe SE-V b49-4 B 3 a",
        materials: &[RAW_SELENIUM, RAW_TECHNETIUM, RAW_NIOBIUM, RAW_MERCURY],
        trader: None,
    }],
    "Synuefe AA-P c22-7" => &[LocationInfo {
        name: "Brain Tree",
        system: "Synuefe AA-P c22-7",
        body: "Synuefe AA-P c22-7 5 c",
        materials: &[RAW_POLONIUM, RAW_MOLYBDENUM, RAW_TIN],
        trader: None,
    }],
};

/// All hotspots in a system (empty if none).
pub fn locations_in_system(system: &str) -> &'static [LocationInfo] {
    LOCATIONS.get(system).copied().unwrap_or(&[])
}

/// The hotspot on `body` in `system`, if any.
pub fn find_location(system: Option<&str>, body: Option<&str>) -> Option<&'static LocationInfo> {
    let system = system?;
    locations_in_system(system)
        .iter()
        .find(|location| Some(location.body) == body)
}
