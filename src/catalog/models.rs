//! Typed records for each catalog entity and the nested detail view model.
//!
//! Rows are mapped by column name once, at the data-access boundary.

use rusqlite::Row;
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Weapon {
    pub weapon_id: i64,
    pub name: String,
    pub image: Option<String>,
    pub weapon_type: Option<String>,
    pub description: Option<String>,
    pub damage: Option<String>,
}

impl Weapon {
    pub(crate) fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            weapon_id: row.get("weapon_id")?,
            name: row.get("name")?,
            image: row.get("image")?,
            weapon_type: row.get("weapon_type")?,
            description: row.get("description")?,
            damage: row.get("damage")?,
        })
    }
}

/// Per-class effectiveness grade of a weapon or ability
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Scaling {
    pub class_name: String,
    pub scaling: String,
}

impl Scaling {
    pub(crate) fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            class_name: row.get("class_name")?,
            scaling: row.get("scaling")?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SpecialAbility {
    pub ability_id: i64,
    pub weapon_id: i64,
    pub name: String,
    pub description: Option<String>,
}

impl SpecialAbility {
    pub(crate) fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            ability_id: row.get("ability_id")?,
            weapon_id: row.get("weapon_id")?,
            name: row.get("name")?,
            description: row.get("description")?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Source {
    pub source_id: i64,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Location {
    pub location_id: i64,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AbilityDetail {
    pub ability: SpecialAbility,
    pub scaling: Vec<Scaling>,
}

/// A source together with the attributes of its link to one weapon
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SourceDetail {
    pub source: Source,
    pub price: Option<i64>,
    pub drop_chance: Option<f64>,
    pub locations: Vec<Location>,
}

/// Everything the detail page shows for one weapon
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeaponDetail {
    pub weapon: Weapon,
    pub scaling: Vec<Scaling>,
    pub abilities: Vec<AbilityDetail>,
    pub sources: Vec<SourceDetail>,
}

impl WeaponDetail {
    /// Ability id -> that ability's scaling rows. Every ability has a key,
    /// including abilities with no scaling.
    pub fn ability_scaling(&self) -> BTreeMap<i64, &[Scaling]> {
        self.abilities
            .iter()
            .map(|a| (a.ability.ability_id, a.scaling.as_slice()))
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchHit {
    pub weapon_id: i64,
    pub name: String,
    pub image: Option<String>,
    pub weapon_type: Option<String>,
    pub detail_path: String,
}
