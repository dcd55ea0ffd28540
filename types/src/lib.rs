//! Types shared between the matfarm core and its front-ends.

pub mod formatting;

use serde::{Deserialize, Serialize};

/// Seconds a "just collected" row stays visible.
pub const DEFAULT_TEMP_ROW_TTL_SECS: u64 = 90;

/// Cadence of the expiry sweep.
pub const DEFAULT_EXPIRY_TICK_MS: u64 = 1_000;

/// Population a system needs before its emission conditions are trusted.
/// Folks say 1M, but 10M keeps busy systems from lighting up everywhere.
pub const DEFAULT_HGE_MIN_POPULATION: u64 = 10_000_000;

/// Cap used for grade 0 (special) and unknown grades.
pub const DEFAULT_UNGRADED_CAP: u32 = 100;

/// Tunables for the material tracker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrackerConfig {
    /// How long a collected material that isn't otherwise tracked stays listed
    pub temp_row_ttl_secs: u64,
    /// How often expired rows are swept (live mode only)
    pub expiry_tick_ms: u64,
    /// Minimum system population for an emission condition to match
    pub hge_min_population: u64,
    /// Cap shown for ungraded materials. Set to 0 to hide the cap entirely.
    pub ungraded_cap: u32,
    /// Evaluate emission (HGE) conditions. When off only fixed hotspots are tracked.
    pub track_emissions: bool,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            temp_row_ttl_secs: DEFAULT_TEMP_ROW_TTL_SECS,
            expiry_tick_ms: DEFAULT_EXPIRY_TICK_MS,
            hge_min_population: DEFAULT_HGE_MIN_POPULATION,
            ungraded_cap: DEFAULT_UNGRADED_CAP,
            track_emissions: true,
        }
    }
}
