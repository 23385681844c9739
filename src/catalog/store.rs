use rusqlite::{params, Connection, OpenFlags, OptionalExtension};
use std::path::{Path, PathBuf};
use tracing::debug;

use super::models::{
    AbilityDetail, Location, Scaling, SearchHit, Source, SourceDetail, SpecialAbility, Weapon,
    WeaponDetail,
};
use super::names::detail_path;
use crate::error::AppError;

/// How the detail reader fetches per-ability and per-source children
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum FetchStrategy {
    /// One grouped join per child collection
    #[default]
    Batched,
    /// One query per ability and per source
    Sequential,
}

/// Handle to the weapons database file. Holds no connection itself.
#[derive(Debug, Clone)]
pub struct WeaponStore {
    db_path: PathBuf,
}

impl WeaponStore {
    pub fn new(db_path: impl Into<PathBuf>) -> Self {
        Self {
            db_path: db_path.into(),
        }
    }

    pub fn db_path(&self) -> &Path {
        &self.db_path
    }

    /// Open a read-only connection for one request. It closes when dropped.
    pub fn open(&self) -> Result<Connection, AppError> {
        let unavailable = |source| AppError::DatabaseUnavailable {
            path: self.db_path.clone(),
            source,
        };
        let conn = Connection::open_with_flags(
            &self.db_path,
            OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )
        .map_err(unavailable)?;
        conn.execute_batch("PRAGMA query_only = ON;")
            .map_err(unavailable)?;
        Ok(conn)
    }
}

/// Trimmed search text, or `None` when there is nothing to search for
pub fn normalize_query(raw: &str) -> Option<&str> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}

/// Look up a weapon by display name and assemble its detail view.
pub fn weapon_detail(
    conn: &Connection,
    name: &str,
    strategy: FetchStrategy,
) -> Result<WeaponDetail, AppError> {
    let weapon = conn
        .query_row(
            "SELECT weapon_id, name, image, weapon_type, description, damage
             FROM weapons WHERE name = ?1",
            params![name],
            Weapon::from_row,
        )
        .optional()?
        .ok_or_else(|| AppError::NotFound(name.to_string()))?;

    debug!(weapon_id = weapon.weapon_id, ?strategy, "loading weapon detail");

    let scaling = weapon_scaling(conn, weapon.weapon_id)?;
    let abilities = special_abilities(conn, weapon.weapon_id)?;

    let (abilities, sources) = match strategy {
        FetchStrategy::Batched => (
            batched_ability_scaling(conn, weapon.weapon_id, abilities)?,
            batched_sources(conn, weapon.weapon_id)?,
        ),
        FetchStrategy::Sequential => (
            sequential_ability_scaling(conn, weapon.weapon_id, abilities)?,
            sequential_sources(conn, weapon.weapon_id)?,
        ),
    };

    Ok(WeaponDetail {
        weapon,
        scaling,
        abilities,
        sources,
    })
}

/// Weapons whose name contains `query`, case-insensitively, by name.
pub fn search_weapons(conn: &Connection, query: &str) -> Result<Vec<SearchHit>, AppError> {
    let Some(query) = normalize_query(query) else {
        return Ok(Vec::new());
    };

    let pattern = format!("%{}%", escape_like(query));
    let mut stmt = conn.prepare_cached(
        "SELECT weapon_id, name, image, weapon_type
         FROM weapons
         WHERE name LIKE ?1 ESCAPE '\\'
         ORDER BY name ASC",
    )?;
    let hits = stmt
        .query_map(params![pattern], |row| {
            let name: String = row.get("name")?;
            Ok(SearchHit {
                weapon_id: row.get("weapon_id")?,
                image: row.get("image")?,
                weapon_type: row.get("weapon_type")?,
                detail_path: detail_path(&name),
                name,
            })
        })?
        .collect::<Result<Vec<_>, _>>()?;

    Ok(hits)
}

fn escape_like(query: &str) -> String {
    let mut escaped = String::with_capacity(query.len());
    for c in query.chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

fn weapon_scaling(conn: &Connection, weapon_id: i64) -> rusqlite::Result<Vec<Scaling>> {
    let mut stmt = conn.prepare_cached(
        "SELECT class_name, scaling FROM weapon_scaling
         WHERE weapon_id = ?1 ORDER BY class_name",
    )?;
    let scaling = stmt
        .query_map(params![weapon_id], Scaling::from_row)?
        .collect::<rusqlite::Result<Vec<_>>>()?;
    Ok(scaling)
}

fn special_abilities(conn: &Connection, weapon_id: i64) -> rusqlite::Result<Vec<SpecialAbility>> {
    let mut stmt = conn.prepare_cached(
        "SELECT ability_id, weapon_id, name, description FROM special_abilities
         WHERE weapon_id = ?1 ORDER BY ability_id",
    )?;
    let abilities = stmt
        .query_map(params![weapon_id], SpecialAbility::from_row)?
        .collect::<rusqlite::Result<Vec<_>>>()?;
    Ok(abilities)
}

fn batched_ability_scaling(
    conn: &Connection,
    weapon_id: i64,
    abilities: Vec<SpecialAbility>,
) -> rusqlite::Result<Vec<AbilityDetail>> {
    let mut stmt = conn.prepare_cached(
        "SELECT sas.ability_id, sas.class_name, sas.scaling
         FROM special_ability_scaling sas
         JOIN special_abilities sa
           ON sa.ability_id = sas.ability_id AND sa.weapon_id = sas.weapon_id
         WHERE sas.weapon_id = ?1
         ORDER BY sas.ability_id, sas.class_name",
    )?;
    let rows = stmt
        .query_map(params![weapon_id], |row| {
            Ok((row.get::<_, i64>("ability_id")?, Scaling::from_row(row)?))
        })?
        .collect::<rusqlite::Result<Vec<_>>>()?;

    // The join keeps only ids from `abilities` and both sides are ordered
    // by ability_id, so grouping is a single merge pass
    let mut rows = rows.into_iter().peekable();
    let mut details = Vec::with_capacity(abilities.len());
    for ability in abilities {
        let mut scaling = Vec::new();
        while let Some((_, row)) = rows.next_if(|(id, _)| *id == ability.ability_id) {
            scaling.push(row);
        }
        details.push(AbilityDetail { ability, scaling });
    }

    Ok(details)
}

fn sequential_ability_scaling(
    conn: &Connection,
    weapon_id: i64,
    abilities: Vec<SpecialAbility>,
) -> rusqlite::Result<Vec<AbilityDetail>> {
    let mut stmt = conn.prepare_cached(
        "SELECT class_name, scaling FROM special_ability_scaling
         WHERE ability_id = ?1 AND weapon_id = ?2
         ORDER BY class_name",
    )?;

    let mut details = Vec::with_capacity(abilities.len());
    for ability in abilities {
        let scaling = stmt
            .query_map(params![ability.ability_id, weapon_id], Scaling::from_row)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        details.push(AbilityDetail { ability, scaling });
    }

    Ok(details)
}

fn batched_sources(conn: &Connection, weapon_id: i64) -> rusqlite::Result<Vec<SourceDetail>> {
    let mut stmt = conn.prepare_cached(
        "SELECT s.source_id, s.name AS source_name, ws.price, ws.drop_chance,
                l.location_id, l.name AS location_name
         FROM weapon_sources ws
         JOIN sources s ON s.source_id = ws.source_id
         LEFT JOIN source_locations sl ON sl.source_id = s.source_id
         LEFT JOIN locations l ON l.location_id = sl.location_id
         WHERE ws.weapon_id = ?1
         ORDER BY s.source_id, l.name, l.location_id",
    )?;
    let mut rows = stmt.query(params![weapon_id])?;

    let mut sources: Vec<SourceDetail> = Vec::new();
    while let Some(row) = rows.next()? {
        let source_id: i64 = row.get("source_id")?;
        if sources.last().map(|s| s.source.source_id) != Some(source_id) {
            sources.push(SourceDetail {
                source: Source {
                    source_id,
                    name: row.get("source_name")?,
                },
                price: row.get("price")?,
                drop_chance: row.get("drop_chance")?,
                locations: Vec::new(),
            });
        }

        let location_id: Option<i64> = row.get("location_id")?;
        if let (Some(location_id), Some(current)) = (location_id, sources.last_mut()) {
            if !current.locations.iter().any(|l| l.location_id == location_id) {
                current.locations.push(Location {
                    location_id,
                    name: row.get("location_name")?,
                });
            }
        }
    }

    Ok(sources)
}

fn sequential_sources(conn: &Connection, weapon_id: i64) -> rusqlite::Result<Vec<SourceDetail>> {
    let mut source_stmt = conn.prepare_cached(
        "SELECT s.source_id, s.name, ws.price, ws.drop_chance
         FROM sources s
         JOIN weapon_sources ws ON s.source_id = ws.source_id
         WHERE ws.weapon_id = ?1
         ORDER BY s.source_id",
    )?;
    let mut location_stmt = conn.prepare_cached(
        "SELECT DISTINCT l.location_id, l.name
         FROM locations l
         JOIN source_locations sl ON l.location_id = sl.location_id
         WHERE sl.source_id = ?1
         ORDER BY l.name, l.location_id",
    )?;

    let linked = source_stmt
        .query_map(params![weapon_id], |row| {
            Ok((
                Source {
                    source_id: row.get("source_id")?,
                    name: row.get("name")?,
                },
                row.get::<_, Option<i64>>("price")?,
                row.get::<_, Option<f64>>("drop_chance")?,
            ))
        })?
        .collect::<rusqlite::Result<Vec<_>>>()?;

    let mut sources = Vec::with_capacity(linked.len());
    for (source, price, drop_chance) in linked {
        let locations = location_stmt
            .query_map(params![source.source_id], |row| {
                Ok(Location {
                    location_id: row.get("location_id")?,
                    name: row.get("name")?,
                })
            })?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        sources.push(SourceDetail {
            source,
            price,
            drop_chance,
            locations,
        });
    }

    Ok(sources)
}
