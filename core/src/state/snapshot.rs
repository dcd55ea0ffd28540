use hashbrown::HashMap;

use crate::game_data::{Material, MaterialCategory};

/// Current game state as seen by the tracker: where the player is and how
/// much of each material they carry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GameSnapshot {
    pub system_name: Option<String>,
    /// `None` when not near a body (deep space, or on approach to a star)
    pub body: Option<String>,
    pub raw: HashMap<String, u32>,
    pub manufactured: HashMap<String, u32>,
    pub encoded: HashMap<String, u32>,
}

impl GameSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Convenience constructor for a position with empty inventories.
    pub fn at(system: &str, body: Option<&str>) -> Self {
        Self {
            system_name: Some(system.to_string()),
            body: body.map(str::to_string),
            ..Self::default()
        }
    }

    pub fn system(&self) -> Option<&str> {
        self.system_name.as_deref()
    }

    pub fn body(&self) -> Option<&str> {
        self.body.as_deref()
    }

    pub fn inventory(&self, category: MaterialCategory) -> &HashMap<String, u32> {
        match category {
            MaterialCategory::Raw => &self.raw,
            MaterialCategory::Manufactured => &self.manufactured,
            MaterialCategory::Encoded => &self.encoded,
        }
    }

    pub fn inventory_mut(&mut self, category: MaterialCategory) -> &mut HashMap<String, u32> {
        match category {
            MaterialCategory::Raw => &mut self.raw,
            MaterialCategory::Manufactured => &mut self.manufactured,
            MaterialCategory::Encoded => &mut self.encoded,
        }
    }

    /// Carried count of a material; absent entries count as zero.
    pub fn count(&self, material: &Material) -> u32 {
        self.inventory(material.category)
            .get(material.key)
            .copied()
            .unwrap_or(0)
    }

    /// Set a carried count (keys are stored lowercase).
    pub fn set_count(&mut self, category: MaterialCategory, name: &str, count: u32) {
        self.inventory_mut(category)
            .insert(name.to_ascii_lowercase(), count);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_data::{RAW_ANTIMONY, RAW_TIN};

    #[test]
    fn test_count_defaults_to_zero() {
        let mut snapshot = GameSnapshot::at("Koli Discii", Some("Koli Discii C 6 a"));
        snapshot.set_count(MaterialCategory::Raw, "Antimony", 12);

        assert_eq!(snapshot.count(&RAW_ANTIMONY), 12);
        assert_eq!(snapshot.count(&RAW_TIN), 0);
        assert_eq!(snapshot.system(), Some("Koli Discii"));
        assert_eq!(snapshot.body(), Some("Koli Discii C 6 a"));
    }
}
