//! Material row lifecycle.
//!
//! Owns the set of visible material rows and the status text. Rows are
//! either permanent (belong to the tracked location/emission) or temporary
//! (a recent pickup, with an expiry). The tracker decides what to add; this
//! module decides how rows merge, expire and render.

use chrono::{DateTime, Utc};
use hashbrown::HashMap;
use matfarm_types::formatting::{format_cap, format_row_label};

use crate::game_data::{Material, StationInfo, grade_to_cap};
use crate::state::{GameSnapshot, SessionContext};

/// One visible material row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackedMaterial {
    pub material: Material,
    pub name: String,
    pub grade: u8,
    pub quantity: u32,
    pub max_qty: u32,
    /// `None` for permanent rows
    pub expiry: Option<DateTime<Utc>>,
}

impl TrackedMaterial {
    pub fn is_permanent(&self) -> bool {
        self.expiry.is_none()
    }
}

/// Row as handed to a renderer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayRow {
    pub material: Material,
    pub quantity: u32,
    pub max_qty: u32,
    /// `G{grade} {name}`
    pub label: String,
    /// Seconds until a temporary row is swept
    pub expires_in_secs: Option<i64>,
}

impl DisplayRow {
    pub fn quantity_text(&self) -> String {
        self.quantity.to_string()
    }

    pub fn cap_text(&self) -> String {
        format_cap(self.max_qty)
    }
}

/// Declarative description of what should be on screen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DisplayFrame {
    pub status: String,
    pub trader: Option<StationInfo>,
    pub rows: Vec<DisplayRow>,
    /// Row container visibility; hidden whenever there are no rows
    pub visible: bool,
}

#[derive(Debug, Clone)]
pub struct MaterialDisplay {
    status: String,
    rows: HashMap<Material, TrackedMaterial>,
    /// Insertion order, for stable rendering
    order: Vec<Material>,
    visible: bool,
    ungraded_cap: u32,
}

impl MaterialDisplay {
    pub fn new(ungraded_cap: u32) -> Self {
        Self {
            status: String::new(),
            rows: HashMap::new(),
            order: Vec::new(),
            visible: false,
            ungraded_cap,
        }
    }

    // --- Status ---

    pub fn status(&self) -> &str {
        &self.status
    }

    pub fn set_status(&mut self, status: &str) {
        status.clone_into(&mut self.status);
    }

    pub fn clear_status(&mut self) {
        self.status.clear();
    }

    // --- Rows ---

    /// Add a row, or merge into an existing one.
    ///
    /// An existing temporary row takes the new expiry (so a permanent add
    /// promotes it). An existing permanent row is never touched. Unknown
    /// materials are ignored. Returns true only if a new row was created.
    ///
    /// Does not update container visibility; callers do that once per batch.
    pub fn add_row(
        &mut self,
        material: Material,
        expiry: Option<DateTime<Utc>>,
        session: &SessionContext,
    ) -> bool {
        if let Some(existing) = self.rows.get_mut(&material) {
            if existing.expiry.is_some() {
                existing.expiry = expiry;
            }
            return false;
        }

        let Some(info) = material.info() else {
            return false;
        };

        let name = session.display_name(&material).unwrap_or(info.name).to_string();
        self.rows.insert(
            material,
            TrackedMaterial {
                material,
                name,
                grade: info.grade,
                quantity: 0,
                max_qty: grade_to_cap(info.grade, self.ungraded_cap),
                expiry,
            },
        );
        self.order.push(material);
        true
    }

    /// Add permanent rows for every material in a location/emission.
    /// Returns the number of rows created.
    pub fn add_rows(&mut self, materials: &[Material], session: &SessionContext) -> usize {
        let created = materials
            .iter()
            .filter(|material| self.add_row(**material, None, session))
            .count();
        self.update_visibility();
        created
    }

    /// Add a row for a recent pickup that disappears at `expires_at`.
    pub fn add_temp_row(
        &mut self,
        material: Material,
        expires_at: DateTime<Utc>,
        session: &SessionContext,
    ) -> bool {
        let created = self.add_row(material, Some(expires_at), session);
        if created {
            self.update_visibility();
        }
        created
    }

    /// Remove every temporary row whose expiry is at or before `now`.
    /// Returns the number of rows removed.
    pub fn expire(&mut self, now: DateTime<Utc>) -> usize {
        let before = self.rows.len();
        self.rows
            .retain(|_, row| row.expiry.is_none_or(|expiry| expiry > now));
        let removed = before - self.rows.len();

        if removed > 0 {
            let rows = &self.rows;
            self.order.retain(|material| rows.contains_key(material));
            self.update_visibility();
        }
        removed
    }

    /// Drop every row and hide the container.
    pub fn clear_all(&mut self) {
        self.rows.clear();
        self.order.clear();
        self.update_visibility();
    }

    /// Recompute displayed quantities from carried counts, clamped to each
    /// row's cap. Returns true if any quantity changed.
    pub fn refresh_quantities(&mut self, snapshot: &GameSnapshot) -> bool {
        let mut changed = false;
        for row in self.rows.values_mut() {
            let quantity = snapshot.count(&row.material).min(row.max_qty);
            if row.quantity != quantity {
                row.quantity = quantity;
                changed = true;
            }
        }
        changed
    }

    fn update_visibility(&mut self) {
        self.visible = !self.rows.is_empty();
    }

    // --- Accessors ---

    pub fn row(&self, material: &Material) -> Option<&TrackedMaterial> {
        self.rows.get(material)
    }

    /// Rows in insertion order
    pub fn rows(&self) -> impl Iterator<Item = &TrackedMaterial> {
        self.order.iter().filter_map(|material| self.rows.get(material))
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn frame(&self, trader: Option<StationInfo>, now: DateTime<Utc>) -> DisplayFrame {
        DisplayFrame {
            status: self.status.clone(),
            trader,
            rows: self
                .rows()
                .map(|row| DisplayRow {
                    material: row.material,
                    quantity: row.quantity,
                    max_qty: row.max_qty,
                    label: format_row_label(row.grade, &row.name),
                    expires_in_secs: row
                        .expiry
                        .map(|expiry| expiry.signed_duration_since(now).num_seconds()),
                })
                .collect(),
            visible: self.visible,
        }
    }
}
