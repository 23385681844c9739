//! Fixture databases shared by the integration tests.

#![allow(dead_code)]

use frontier_armory::writer::create_schema;
use rusqlite::Connection;
use std::path::{Path, PathBuf};

/// Exactly the data of the "Fire Sword" walkthrough, plus two unrelated weapons
pub const SCENARIO_SQL: &str = "
    INSERT INTO weapons (weapon_id, name, image, weapon_type, description, damage)
        VALUES (1, 'Fire Sword', 'Fire_Sword.webp', 'melee', 'A blazing blade', '45');
    INSERT INTO weapons (weapon_id, name, image, weapon_type, description, damage)
        VALUES (2, 'Ice Axe', 'Ice_Axe.webp', 'melee', NULL, '50-60');
    INSERT INTO weapons (weapon_id, name, image, weapon_type, description, damage)
        VALUES (3, 'Hunter''s Bow', 'Hunter%27s_Bow.webp', 'ranged', NULL, NULL);

    INSERT INTO weapon_scaling (weapon_id, class_name, scaling) VALUES (1, 'Mage', 'A');
    INSERT INTO special_abilities (ability_id, weapon_id, name, description)
        VALUES (10, 1, 'Burn', 'Sets foes alight');
    INSERT INTO special_ability_scaling (ability_id, weapon_id, class_name, scaling)
        VALUES (10, 1, 'Mage', 'B');

    INSERT INTO sources (source_id, name) VALUES (100, 'Blacksmith');
    INSERT INTO locations (location_id, name) VALUES (1000, 'Town');
    INSERT INTO weapon_sources (weapon_id, source_id, price, drop_chance) VALUES (1, 100, 100, NULL);
    INSERT INTO source_locations (source_id, location_id) VALUES (100, 1000);
";

/// Scenario data plus multi-ability, multi-source weapons and a stray
/// ability-scaling row that belongs to no Ice Axe ability
pub const RICH_SQL: &str = "
    INSERT INTO weapons (weapon_id, name) VALUES (4, 'Plain Staff');
    INSERT INTO weapons (weapon_id, name, weapon_type) VALUES (5, 'Broadsword', 'melee');

    INSERT INTO weapon_scaling (weapon_id, class_name, scaling) VALUES (2, 'Warrior', 'B');
    INSERT INTO weapon_scaling (weapon_id, class_name, scaling) VALUES (2, 'Mage', 'C');

    INSERT INTO special_abilities (ability_id, weapon_id, name) VALUES (20, 2, 'Frost Bite');
    INSERT INTO special_abilities (ability_id, weapon_id, name) VALUES (21, 2, 'Shatter');
    INSERT INTO special_ability_scaling (ability_id, weapon_id, class_name, scaling)
        VALUES (20, 2, 'Warrior', 'A');
    INSERT INTO special_ability_scaling (ability_id, weapon_id, class_name, scaling)
        VALUES (20, 2, 'Mage', 'D');
    INSERT INTO special_ability_scaling (ability_id, weapon_id, class_name, scaling)
        VALUES (10, 2, 'Mage', 'S');

    INSERT INTO sources (source_id, name) VALUES (101, 'Frost Giant');
    INSERT INTO sources (source_id, name) VALUES (102, 'Merchant');
    INSERT INTO locations (location_id, name) VALUES (1001, 'Glacier');
    INSERT INTO locations (location_id, name) VALUES (1002, 'Cave');
    INSERT INTO weapon_sources (weapon_id, source_id, price, drop_chance) VALUES (2, 101, NULL, 0.05);
    INSERT INTO weapon_sources (weapon_id, source_id, price, drop_chance) VALUES (2, 102, 250, NULL);
    INSERT INTO source_locations (source_id, location_id) VALUES (101, 1001);
    INSERT INTO source_locations (source_id, location_id) VALUES (101, 1002);
    INSERT INTO source_locations (source_id, location_id) VALUES (102, 1000);
";

/// Create the full schema at `dir/weapons.db` and run each seed script
pub fn build_database(dir: &Path, seeds: &[&str]) -> PathBuf {
    let db_path = dir.join("weapons.db");
    create_schema(&db_path).expect("create schema");

    let conn = Connection::open(&db_path).expect("open fixture database");
    conn.execute_batch("PRAGMA foreign_keys = ON;").expect("enable foreign keys");
    for sql in seeds {
        conn.execute_batch(sql).expect("seed fixture database");
    }
    db_path
}
