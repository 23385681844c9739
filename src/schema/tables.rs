//! Table schema definitions for the weapons catalog database

use super::types::*;

// =============================================================================
// Independent Tables (no FK dependencies)
// =============================================================================

pub static WEAPONS: TableSchema = TableSchema {
    name: "weapons",
    source_file: "weapons.jsonl",
    columns: &[
        Column::integer("weapon_id").not_null(),
        Column::text("name").not_null().unique(),
        Column::text("image"),
        Column::text("weapon_type"),
        Column::text("description"),
        Column::text("damage"),
    ],
    primary_key: &["weapon_id"],
    foreign_keys: &[],
};

pub static SOURCES: TableSchema = TableSchema {
    name: "sources",
    source_file: "sources.jsonl",
    columns: &[
        Column::integer("source_id").not_null(),
        Column::text("name").not_null(),
    ],
    primary_key: &["source_id"],
    foreign_keys: &[],
};

pub static LOCATIONS: TableSchema = TableSchema {
    name: "locations",
    source_file: "locations.jsonl",
    columns: &[
        Column::integer("location_id").not_null(),
        Column::text("name").not_null(),
    ],
    primary_key: &["location_id"],
    foreign_keys: &[],
};

// =============================================================================
// Dependent Tables
// =============================================================================

pub static WEAPON_SCALING: TableSchema = TableSchema {
    name: "weapon_scaling",
    source_file: "weapon_scaling.jsonl",
    columns: &[
        Column::integer("weapon_id").not_null(),
        Column::text("class_name").not_null(),
        Column::text("scaling").not_null(),
    ],
    primary_key: &["weapon_id", "class_name"],
    foreign_keys: &[ForeignKey::new("weapon_id", "weapons")],
};

pub static SPECIAL_ABILITIES: TableSchema = TableSchema {
    name: "special_abilities",
    source_file: "special_abilities.jsonl",
    columns: &[
        Column::integer("ability_id").not_null(),
        Column::integer("weapon_id").not_null(),
        Column::text("name").not_null(),
        Column::text("description"),
    ],
    primary_key: &["ability_id"],
    foreign_keys: &[ForeignKey::new("weapon_id", "weapons")],
};

pub static SPECIAL_ABILITY_SCALING: TableSchema = TableSchema {
    name: "special_ability_scaling",
    source_file: "special_ability_scaling.jsonl",
    columns: &[
        Column::integer("ability_id").not_null(),
        Column::integer("weapon_id").not_null(),
        Column::text("class_name").not_null(),
        Column::text("scaling").not_null(),
    ],
    primary_key: &["ability_id", "weapon_id", "class_name"],
    foreign_keys: &[
        ForeignKey::new("ability_id", "special_abilities"),
        ForeignKey::new("weapon_id", "weapons"),
    ],
};

pub static WEAPON_SOURCES: TableSchema = TableSchema {
    name: "weapon_sources",
    source_file: "weapon_sources.jsonl",
    columns: &[
        Column::integer("weapon_id").not_null(),
        Column::integer("source_id").not_null(),
        Column::integer("price"),
        Column::real("drop_chance"),
    ],
    primary_key: &["weapon_id", "source_id"],
    foreign_keys: &[
        ForeignKey::new("weapon_id", "weapons"),
        ForeignKey::new("source_id", "sources"),
    ],
};

pub static SOURCE_LOCATIONS: TableSchema = TableSchema {
    name: "source_locations",
    source_file: "source_locations.jsonl",
    columns: &[
        Column::integer("source_id").not_null(),
        Column::integer("location_id").not_null(),
    ],
    primary_key: &["source_id", "location_id"],
    foreign_keys: &[
        ForeignKey::new("source_id", "sources"),
        ForeignKey::new("location_id", "locations"),
    ],
};

/// All tables, parents listed before children
pub static ALL_TABLES: &[&TableSchema] = &[
    &WEAPONS,
    &SOURCES,
    &LOCATIONS,
    &WEAPON_SCALING,
    &SPECIAL_ABILITIES,
    &SPECIAL_ABILITY_SCALING,
    &WEAPON_SOURCES,
    &SOURCE_LOCATIONS,
];

/// Look up a table schema by name
pub fn get_table(name: &str) -> Option<&'static TableSchema> {
    ALL_TABLES.iter().copied().find(|t| t.name == name)
}

/// Table names in declaration order
pub fn table_names() -> Vec<&'static str> {
    ALL_TABLES.iter().map(|t| t.name).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_fk_targets_a_known_column() {
        for table in ALL_TABLES {
            for fk in table.foreign_keys {
                let parent = get_table(fk.references_table)
                    .unwrap_or_else(|| panic!("{} references unknown {}", table.name, fk.references_table));
                assert!(
                    parent.column_names().contains(&fk.references_column()),
                    "{}.{} -> {}.{}",
                    table.name,
                    fk.column,
                    parent.name,
                    fk.references_column()
                );
            }
        }
    }

    #[test]
    fn test_parents_are_declared_before_children() {
        for (idx, table) in ALL_TABLES.iter().enumerate() {
            for parent in table.dependencies() {
                let parent_idx = ALL_TABLES.iter().position(|t| t.name == parent).unwrap();
                assert!(parent_idx < idx, "{} listed before its parent {}", table.name, parent);
            }
        }
    }

    #[test]
    fn test_primary_keys_are_columns() {
        for table in ALL_TABLES {
            let columns = table.column_names();
            for pk in table.primary_key {
                assert!(columns.contains(pk), "{} missing pk column {}", table.name, pk);
            }
        }
    }
}
