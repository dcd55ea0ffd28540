//! Static game data: the material catalog, fixed farming hotspots and
//! the faction/allegiance conditions that spawn high grade emissions.

mod capacity;
mod emissions;
mod locations;
mod materials;

use std::fmt;

pub use capacity::grade_to_cap;
pub use emissions::{EMISSIONS, EmissionInfo, matching_emissions};
pub use locations::{LOCATIONS, LocationInfo, StationInfo, find_location, locations_in_system};
pub use materials::*;

/// Inventory bucket a material lives in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum MaterialCategory {
    Raw,
    Manufactured,
    Encoded,
}

impl MaterialCategory {
    pub const ALL: [MaterialCategory; 3] = [
        MaterialCategory::Raw,
        MaterialCategory::Manufactured,
        MaterialCategory::Encoded,
    ];

    /// Parse a category as written in the journal.
    ///
    /// Accepts the plain form (`Raw`) as well as the symbol form used by
    /// some events (`$MICRORESOURCE_CATEGORY_Manufactured;`).
    pub fn parse(s: &str) -> Option<Self> {
        let name = s
            .strip_prefix("$MICRORESOURCE_CATEGORY_")
            .map(|rest| rest.trim_end_matches(';'))
            .unwrap_or(s);

        if name.eq_ignore_ascii_case("raw") {
            Some(Self::Raw)
        } else if name.eq_ignore_ascii_case("manufactured") {
            Some(Self::Manufactured)
        } else if name.eq_ignore_ascii_case("encoded") {
            Some(Self::Encoded)
        } else {
            None
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Raw => "Raw",
            Self::Manufactured => "Manufactured",
            Self::Encoded => "Encoded",
        }
    }

    /// Catalog for this category
    fn catalog(&self) -> &'static phf::Map<&'static str, MaterialInfo> {
        match self {
            Self::Raw => &RAW,
            Self::Manufactured => &MANUFACTURED,
            Self::Encoded => &ENCODED,
        }
    }
}

impl fmt::Display for MaterialCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Catalog entry for a material.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MaterialInfo {
    pub name: &'static str,
    /// 1-5, or 0 for special materials with no grade
    pub grade: u8,
}

impl MaterialInfo {
    pub const fn new(name: &'static str, grade: u8) -> Self {
        Self { name, grade }
    }
}

/// A material identity: category plus lowercase journal key.
///
/// Keys are always the catalog's own `&'static str`, so any `Material`
/// obtained through [`Material::resolve`] is guaranteed to be known.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Material {
    pub category: MaterialCategory,
    pub key: &'static str,
}

impl Material {
    pub const fn new(category: MaterialCategory, key: &'static str) -> Self {
        Self { category, key }
    }

    /// Look up a material by category and journal name (case-insensitive).
    /// Returns `None` for anything not in the catalog.
    pub fn resolve(category: MaterialCategory, name: &str) -> Option<Self> {
        let key = name.to_ascii_lowercase();
        category
            .catalog()
            .get_entry(key.as_str())
            .map(|(key, _)| Self { category, key: *key })
    }

    /// Resolve from the raw category string used in journal events.
    pub fn resolve_str(category: &str, name: &str) -> Option<Self> {
        MaterialCategory::parse(category).and_then(|category| Self::resolve(category, name))
    }

    /// Catalog entry for this material
    pub fn info(&self) -> Option<&'static MaterialInfo> {
        self.category.catalog().get(self.key)
    }
}

impl fmt::Display for Material {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.category, self.key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_parse() {
        assert_eq!(MaterialCategory::parse("Raw"), Some(MaterialCategory::Raw));
        assert_eq!(MaterialCategory::parse("encoded"), Some(MaterialCategory::Encoded));
        assert_eq!(
            MaterialCategory::parse("$MICRORESOURCE_CATEGORY_Manufactured;"),
            Some(MaterialCategory::Manufactured)
        );
        assert_eq!(MaterialCategory::parse("Cargo"), None);
        assert_eq!(MaterialCategory::parse(""), None);
    }

    #[test]
    fn test_resolve_known_material() {
        let mat = Material::resolve(MaterialCategory::Raw, "Antimony").expect("antimony is cataloged");
        assert_eq!(mat, RAW_ANTIMONY);
        assert_eq!(mat.info().map(|i| i.grade), Some(4));
    }

    #[test]
    fn test_resolve_wrong_category_is_unknown() {
        // Antimony is Raw, never Encoded
        assert!(Material::resolve(MaterialCategory::Encoded, "antimony").is_none());
        assert!(Material::resolve_str("Raw", "unobtainium").is_none());
        assert!(Material::resolve_str("Cargo", "antimony").is_none());
    }

    #[test]
    fn test_every_hotspot_material_is_cataloged() {
        for locations in LOCATIONS.values() {
            for location in locations.iter() {
                for mat in location.materials {
                    assert!(mat.info().is_some(), "{} at {} not in catalog", mat, location.name);
                }
            }
        }
        for emission in EMISSIONS {
            for mat in emission.materials {
                assert!(mat.info().is_some(), "{} in emission table not in catalog", mat);
            }
        }
    }

    #[test]
    fn test_hotspots_indexed_under_their_own_system() {
        for (system, locations) in LOCATIONS.entries() {
            for location in locations.iter() {
                assert_eq!(location.system, *system);
            }
        }
    }
}
