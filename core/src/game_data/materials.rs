//! Material catalog.
//!
//! Names are the in-game English display names; the journal's localised
//! name replaces them once seen in a session.

use phf::phf_map;

use super::{Material, MaterialCategory, MaterialInfo};

pub const ENC_ADAPTIVEENCRYPTORS: Material = Material::new(MaterialCategory::Encoded, "adaptiveencryptors");
pub const ENC_CONSUMERFIRMWARE: Material = Material::new(MaterialCategory::Encoded, "consumerfirmware");
pub const ENC_ENCRYPTIONARCHIVES: Material = Material::new(MaterialCategory::Encoded, "encryptionarchives");
pub const ENC_INDUSTRIALFIRMWARE: Material = Material::new(MaterialCategory::Encoded, "industrialfirmware");

pub const MFG_CHEMICALMANIPULATORS: Material = Material::new(MaterialCategory::Manufactured, "chemicalmanipulators");
pub const MFG_COMPOUNDSHIELDING: Material = Material::new(MaterialCategory::Manufactured, "compoundshielding");
pub const MFG_CONDUCTIVEPOLYMERS: Material = Material::new(MaterialCategory::Manufactured, "conductivepolymers");
pub const MFG_CONFIGURABLECOMPONENTS: Material = Material::new(MaterialCategory::Manufactured, "configurablecomponents");
pub const MFG_EXQUISITEFOCUSCRYSTALS: Material = Material::new(MaterialCategory::Manufactured, "exquisitefocuscrystals");
pub const MFG_FEDCORECOMPOSITES: Material = Material::new(MaterialCategory::Manufactured, "fedcorecomposites");
pub const MFG_FEDPROPRIETARYCOMPOSITES: Material = Material::new(MaterialCategory::Manufactured, "fedproprietarycomposites");
pub const MFG_HEATVANES: Material = Material::new(MaterialCategory::Manufactured, "heatvanes");
pub const MFG_IMPERIALSHIELDING: Material = Material::new(MaterialCategory::Manufactured, "imperialshielding");
pub const MFG_IMPROVISEDCOMPONENTS: Material = Material::new(MaterialCategory::Manufactured, "improvisedcomponents");
pub const MFG_MILITARYGRADEALLOYS: Material = Material::new(MaterialCategory::Manufactured, "militarygradealloys");
pub const MFG_MILITARYSUPERCAPACITORS: Material = Material::new(MaterialCategory::Manufactured, "militarysupercapacitors");
pub const MFG_PHARMACEUTICALISOLATORS: Material = Material::new(MaterialCategory::Manufactured, "pharmaceuticalisolators");
pub const MFG_POLYMERCAPACITORS: Material = Material::new(MaterialCategory::Manufactured, "polymercapacitors");
pub const MFG_PROTOLIGHTALLOYS: Material = Material::new(MaterialCategory::Manufactured, "protolightalloys");
pub const MFG_PROTORADIOLICALLOYS: Material = Material::new(MaterialCategory::Manufactured, "protoradiolicalloys");
pub const MFG_REFINEDFOCUSCRYSTALS: Material = Material::new(MaterialCategory::Manufactured, "refinedfocuscrystals");

pub const RAW_ANTIMONY: Material = Material::new(MaterialCategory::Raw, "antimony");
pub const RAW_CADMIUM: Material = Material::new(MaterialCategory::Raw, "cadmium");
pub const RAW_MERCURY: Material = Material::new(MaterialCategory::Raw, "mercury");
pub const RAW_MOLYBDENUM: Material = Material::new(MaterialCategory::Raw, "molybdenum");
pub const RAW_NIOBIUM: Material = Material::new(MaterialCategory::Raw, "niobium");
pub const RAW_POLONIUM: Material = Material::new(MaterialCategory::Raw, "polonium");
pub const RAW_RUTHENIUM: Material = Material::new(MaterialCategory::Raw, "ruthenium");
pub const RAW_SELENIUM: Material = Material::new(MaterialCategory::Raw, "selenium");
pub const RAW_TECHNETIUM: Material = Material::new(MaterialCategory::Raw, "technetium");
pub const RAW_TELLURIUM: Material = Material::new(MaterialCategory::Raw, "tellurium");
pub const RAW_TIN: Material = Material::new(MaterialCategory::Raw, "tin");
pub const RAW_TUNGSTEN: Material = Material::new(MaterialCategory::Raw, "tungsten");
pub const RAW_YTTRIUM: Material = Material::new(MaterialCategory::Raw, "yttrium");
pub const RAW_ZIRCONIUM: Material = Material::new(MaterialCategory::Raw, "zirconium");

/// Raw materials, keyed by journal name.
pub static RAW: phf::Map<&'static str, MaterialInfo> = phf_map! {
    // Category 1
    "carbon" => MaterialInfo::new("Carbon", 1),
    "vanadium" => MaterialInfo::new("Vanadium", 2),
    "niobium" => MaterialInfo::new("Niobium", 3),
    "yttrium" => MaterialInfo::new("Yttrium", 4),
    // Category 2
    "phosphorus" => MaterialInfo::new("Phosphorus", 1),
    "chromium" => MaterialInfo::new("Chromium", 2),
    "molybdenum" => MaterialInfo::new("Molybdenum", 3),
    "technetium" => MaterialInfo::new("Technetium", 4),
    // Category 3
    "sulphur" => MaterialInfo::new("Sulphur", 1),
    "manganese" => MaterialInfo::new("Manganese", 2),
    "cadmium" => MaterialInfo::new("Cadmium", 3),
    "ruthenium" => MaterialInfo::new("Ruthenium", 4),
    // Category 4
    "iron" => MaterialInfo::new("Iron", 1),
    "zinc" => MaterialInfo::new("Zinc", 2),
    "tin" => MaterialInfo::new("Tin", 3),
    "selenium" => MaterialInfo::new("Selenium", 4),
    // Category 5
    "nickel" => MaterialInfo::new("Nickel", 1),
    "germanium" => MaterialInfo::new("Germanium", 2),
    "tungsten" => MaterialInfo::new("Tungsten", 3),
    "tellurium" => MaterialInfo::new("Tellurium", 4),
    // Category 6
    "rhenium" => MaterialInfo::new("Rhenium", 1),
    "arsenic" => MaterialInfo::new("Arsenic", 2),
    "mercury" => MaterialInfo::new("Mercury", 3),
    "polonium" => MaterialInfo::new("Polonium", 4),
    // Category 7
    "lead" => MaterialInfo::new("Lead", 1),
    "zirconium" => MaterialInfo::new("Zirconium", 2),
    "boron" => MaterialInfo::new("Boron", 3),
    "antimony" => MaterialInfo::new("Antimony", 4),
};

/// Manufactured materials, keyed by journal name.
pub static MANUFACTURED: phf::Map<&'static str, MaterialInfo> = phf_map! {
    // Chemical
    "chemicalstorageunits" => MaterialInfo::new("Chemical Storage Units", 1),
    "chemicalprocessors" => MaterialInfo::new("Chemical Processors", 2),
    "chemicaldistillery" => MaterialInfo::new("Chemical Distillery", 3),
    "chemicalmanipulators" => MaterialInfo::new("Chemical Manipulators", 4),
    "pharmaceuticalisolators" => MaterialInfo::new("Pharmaceutical Isolators", 5),
    // Thermic
    "temperedalloys" => MaterialInfo::new("Tempered Alloys", 1),
    "heatresistantceramics" => MaterialInfo::new("Heat Resistant Ceramics", 2),
    "precipitatedalloys" => MaterialInfo::new("Precipitated Alloys", 3),
    "thermicalloys" => MaterialInfo::new("Thermic Alloys", 4),
    "militarygradealloys" => MaterialInfo::new("Military Grade Alloys", 5),
    // Heat
    "heatconductionwiring" => MaterialInfo::new("Heat Conduction Wiring", 1),
    "heatdispersionplate" => MaterialInfo::new("Heat Dispersion Plate", 2),
    "heatexchangers" => MaterialInfo::new("Heat Exchangers", 3),
    "heatvanes" => MaterialInfo::new("Heat Vanes", 4),
    "protoheatradiators" => MaterialInfo::new("Proto Heat Radiators", 5),
    // Conductive
    "basicconductors" => MaterialInfo::new("Basic Conductors", 1),
    "conductivecomponents" => MaterialInfo::new("Conductive Components", 2),
    "conductiveceramics" => MaterialInfo::new("Conductive Ceramics", 3),
    "conductivepolymers" => MaterialInfo::new("Conductive Polymers", 4),
    "biotechconductors" => MaterialInfo::new("Biotech Conductors", 5),
    // Mechanical Components
    "mechanicalscrap" => MaterialInfo::new("Mechanical Scrap", 1),
    "mechanicalequipment" => MaterialInfo::new("Mechanical Equipment", 2),
    "mechanicalcomponents" => MaterialInfo::new("Mechanical Components", 3),
    "configurablecomponents" => MaterialInfo::new("Configurable Components", 4),
    "improvisedcomponents" => MaterialInfo::new("Improvised Components", 5),
    // Capacitors
    "gridresistors" => MaterialInfo::new("Grid Resistors", 1),
    "hybridcapacitors" => MaterialInfo::new("Hybrid Capacitors", 2),
    "electrochemicalarrays" => MaterialInfo::new("Electrochemical Arrays", 3),
    "polymercapacitors" => MaterialInfo::new("Polymer Capacitors", 4),
    "militarysupercapacitors" => MaterialInfo::new("Military Supercapacitors", 5),
    // Shielding
    "wornshieldemitters" => MaterialInfo::new("Worn Shield Emitters", 1),
    "shieldemitters" => MaterialInfo::new("Shield Emitters", 2),
    "shieldingsensors" => MaterialInfo::new("Shielding Sensors", 3),
    "compoundshielding" => MaterialInfo::new("Compound Shielding", 4),
    "imperialshielding" => MaterialInfo::new("Imperial Shielding", 5),
    // Composite
    "compactcomposites" => MaterialInfo::new("Compact Composites", 1),
    "filamentcomposites" => MaterialInfo::new("Filament Composites", 2),
    "highdensitycomposites" => MaterialInfo::new("High Density Composites", 3),
    "fedproprietarycomposites" => MaterialInfo::new("Proprietary Composites", 4),
    "fedcorecomposites" => MaterialInfo::new("Core Dynamics Composites", 5),
    // Crystals
    "crystalshards" => MaterialInfo::new("Crystal Shards", 1),
    "uncutfocuscrystals" => MaterialInfo::new("Flawed Focus Crystals", 2),
    "focuscrystals" => MaterialInfo::new("Focus Crystals", 3),
    "refinedfocuscrystals" => MaterialInfo::new("Refined Focus Crystals", 4),
    "exquisitefocuscrystals" => MaterialInfo::new("Exquisite Focus Crystals", 5),
    // Alloys
    "salvagedalloys" => MaterialInfo::new("Salvaged Alloys", 1),
    "galvanisingalloys" => MaterialInfo::new("Galvanising Alloys", 2),
    "phasealloys" => MaterialInfo::new("Phase Alloys", 3),
    "protolightalloys" => MaterialInfo::new("Proto Light Alloys", 4),
    "protoradiolicalloys" => MaterialInfo::new("Proto Radiolic Alloys", 5),
    // Guardian Stuff
    "guardian_powercell" => MaterialInfo::new("Guardian Power Cell", 0),
    "guardian_powerconduit" => MaterialInfo::new("Guardian Power Conduit", 0),
    "guardian_sentinel_weaponparts" => MaterialInfo::new("Guardian Sentinel Weapon Parts", 0),
    "guardian_sentinel_wreckagecomponents" => MaterialInfo::new("Guardian Wreckage Components", 0),
    "guardian_techcomponent" => MaterialInfo::new("Guardian Technology Component", 0),
    // Thargoid Stuff
    "tg_abrasion01" => MaterialInfo::new("Heat Exposure Specimen", 0),
    "tg_abrasion02" => MaterialInfo::new("Phasing Membrane Residue", 0),
    "tg_abrasion03" => MaterialInfo::new("Hardened Surface Fragments", 0),
    "tg_biomechanicalconduits" => MaterialInfo::new("Bio-Mechanical Conduits", 0),
    "tg_causticcrystal" => MaterialInfo::new("Caustic Crystal", 0),
    "tg_causticgeneratorparts" => MaterialInfo::new("Corrosive Mechanisms", 0),
    "tg_causticshard" => MaterialInfo::new("Caustic Shard", 0),
    "tg_propulsionelement" => MaterialInfo::new("Propulsion Elements", 0),
    "tg_weaponparts" => MaterialInfo::new("Weapon Parts", 0),
    "tg_wreckagecomponents" => MaterialInfo::new("Wreckage Components", 0),
    "unknowncarapace" => MaterialInfo::new("Thargoid Carapace", 0),
    "unknownenergycell" => MaterialInfo::new("Thargoid Energy Cell", 0),
    "unknownenergysource" => MaterialInfo::new("Sensor Fragment", 0),
    "unknownorganiccircuitry" => MaterialInfo::new("Thargoid Organic Circuitry", 0),
};

/// Encoded materials, keyed by journal name.
pub static ENCODED: phf::Map<&'static str, MaterialInfo> = phf_map! {
    // Emission Data
    "scrambledemissiondata" => MaterialInfo::new("Exceptional Scrambled Emission Data", 1),
    "archivedemissiondata" => MaterialInfo::new("Irregular Emission Data", 2),
    "emissiondata" => MaterialInfo::new("Unexpected Emission Data", 3),
    "decodedemissiondata" => MaterialInfo::new("Decoded Emission Data", 4),
    "compactemissionsdata" => MaterialInfo::new("Abnormal Compact Emissions Data", 5),
    // Wake Scans
    "disruptedwakeechoes" => MaterialInfo::new("Atypical Disrupted Wake Echoes", 1),
    "fsdtelemetry" => MaterialInfo::new("Anomalous FSD Telemetry", 2),
    "wakesolutions" => MaterialInfo::new("Strange Wake Solutions", 3),
    "hyperspacetrajectories" => MaterialInfo::new("Eccentric Hyperspace Trajectories", 4),
    "dataminedwake" => MaterialInfo::new("Datamined Wake Exceptions", 5),
    // Shield Data
    "shieldcyclerecordings" => MaterialInfo::new("Distorted Shield Cycle Recordings", 1),
    "shieldsoakanalysis" => MaterialInfo::new("Inconsistent Shield Soak Analysis", 2),
    "shielddensityreports" => MaterialInfo::new("Untypical Shield Scans", 3),
    "shieldpatternanalysis" => MaterialInfo::new("Aberrant Shield Pattern Analysis", 4),
    "shieldfrequencydata" => MaterialInfo::new("Peculiar Shield Frequency Data", 5),
    // Encryption Files
    "encryptedfiles" => MaterialInfo::new("Unusual Encrypted Files", 1),
    "encryptioncodes" => MaterialInfo::new("Tagged Encryption Codes", 2),
    "symmetrickeys" => MaterialInfo::new("Open Symmetric Keys", 3),
    "encryptionarchives" => MaterialInfo::new("Atypical Encryption Archives", 4),
    "adaptiveencryptors" => MaterialInfo::new("Adaptive Encryptors Capture", 5),
    // Data Archives
    "bulkscandata" => MaterialInfo::new("Anomalous Bulk Scan Data", 1),
    "scanarchives" => MaterialInfo::new("Unidentified Scan Archives", 2),
    "scandatabanks" => MaterialInfo::new("Classified Scan Databanks", 3),
    "encodedscandata" => MaterialInfo::new("Divergent Scan Data", 4),
    "classifiedscandata" => MaterialInfo::new("Classified Scan Fragment", 5),
    // Encoded Firmware
    "legacyfirmware" => MaterialInfo::new("Specialised Legacy Firmware", 1),
    "consumerfirmware" => MaterialInfo::new("Modified Consumer Firmware", 2),
    "industrialfirmware" => MaterialInfo::new("Cracked Industrial Firmware", 3),
    "securityfirmware" => MaterialInfo::new("Security Firmware Patch", 4),
    "embeddedfirmware" => MaterialInfo::new("Modified Embedded Firmware", 5),
    // Guardian Stuff
    "ancientbiologicaldata" => MaterialInfo::new("Pattern Alpha Obelisk Data", 0),
    "ancientculturaldata" => MaterialInfo::new("Pattern Beta Obelisk Data", 0),
    "ancienthistoricaldata" => MaterialInfo::new("Pattern Gamma Obelisk Data", 0),
    "ancientlanguagedata" => MaterialInfo::new("Pattern Delta Obelisk Data", 0),
    "ancienttechnologicaldata" => MaterialInfo::new("Pattern Epsilon Obelisk Data", 0),
    "guardian_moduleblueprint" => MaterialInfo::new("Guardian Module Blueprint Fragment", 0),
    // Thargoid Stuff
    "tg_interdictiondata" => MaterialInfo::new("Thargoid Interdiction Telemetry", 0),
    "tg_shipflightdata" => MaterialInfo::new("Ship Flight Data", 0),
    "tg_shipsystemsdata" => MaterialInfo::new("Ship Systems Data", 0),
    "tg_shutdowndata" => MaterialInfo::new("Massive Energy Surge Analytics", 0),
    "unknownshipsignature" => MaterialInfo::new("Thargoid Ship Signature", 0),
};
