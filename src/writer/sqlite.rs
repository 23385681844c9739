//! Seeds a weapons database: schema first, then one `<table>.jsonl` per table.

use anyhow::{Context, Result};
use rusqlite::{Connection, Transaction};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::{info, warn};

use crate::parser::{parse_record, SqlValue};
use crate::schema::{TableSchema, ALL_TABLES};
use super::schema_gen::{generate_create_table, generate_indexes};

/// Owns the write connection of a freshly created database file
pub struct SeedWriter {
    conn: Connection,
}

impl SeedWriter {
    /// Create `db_path`, replacing any file already there
    pub fn create(db_path: &Path) -> Result<Self> {
        if db_path.exists() {
            std::fs::remove_file(db_path)
                .with_context(|| format!("Failed to remove existing database {:?}", db_path))?;
        }

        let conn = Connection::open(db_path)
            .with_context(|| format!("Failed to create database {:?}", db_path))?;
        conn.execute_batch(
            "PRAGMA foreign_keys = ON;
             PRAGMA journal_mode = WAL;
             PRAGMA synchronous = NORMAL;",
        )?;

        let writer = Self { conn };
        writer.create_tables()?;
        Ok(writer)
    }

    fn create_tables(&self) -> Result<()> {
        for schema in ALL_TABLES {
            let mut ddl = vec![generate_create_table(schema)];
            ddl.extend(generate_indexes(schema));
            for sql in ddl {
                self.conn
                    .execute(&sql, [])
                    .with_context(|| format!("Failed to create {}", schema.name))?;
            }
        }
        info!(count = ALL_TABLES.len(), "schema created");
        Ok(())
    }

    /// Load `<input_dir>/<table>.jsonl` in one transaction. A missing file
    /// leaves the table empty.
    pub fn load_table(&mut self, schema: &TableSchema, input_dir: &Path) -> Result<u64> {
        let file_path = input_dir.join(schema.source_file);
        if !file_path.exists() {
            warn!(table = schema.name, path = ?file_path, "no seed file; table left empty");
            return Ok(0);
        }

        let reader = BufReader::new(
            File::open(&file_path).with_context(|| format!("Failed to open {:?}", file_path))?,
        );

        let tx = self.conn.transaction()?;
        let mut count: u64 = 0;
        for (idx, line) in reader.lines().enumerate() {
            let line = line.with_context(|| format!("Failed to read {:?}", file_path))?;
            if line.trim().is_empty() {
                continue;
            }
            let line_no = idx + 1;

            let row = parse_record(&line, schema)
                .with_context(|| format!("{}:{}", schema.source_file, line_no))?;
            insert_row(&tx, schema, &row.values)
                .with_context(|| format!("{}:{}: insert into {} failed", schema.source_file, line_no, schema.name))?;
            count += 1;
        }
        tx.commit()?;

        info!(table = schema.name, records = count, "loaded");
        Ok(count)
    }

    /// Switch back to rollback journaling so the server can open the file
    /// with read-only flags.
    pub fn finish(self) -> Result<()> {
        self.conn.execute_batch(
            "PRAGMA optimize;
             PRAGMA journal_mode = DELETE;",
        )?;
        Ok(())
    }
}

fn insert_row(
    tx: &Transaction,
    schema: &TableSchema,
    values: &std::collections::HashMap<&'static str, SqlValue>,
) -> Result<()> {
    let columns = schema.column_names();
    let sql = format!(
        "INSERT INTO {} ({}) VALUES ({})",
        schema.name,
        columns.join(", "),
        vec!["?"; columns.len()].join(", ")
    );

    let mut stmt = tx.prepare_cached(&sql)?;
    for (idx, column) in columns.iter().enumerate() {
        values
            .get(column)
            .unwrap_or(&SqlValue::Null)
            .bind_to(idx + 1, &mut stmt)?;
    }
    stmt.raw_execute()?;
    Ok(())
}

/// Create an empty weapons database
pub fn create_schema(output_db: &Path) -> Result<()> {
    SeedWriter::create(output_db)?.finish()
}

/// Create a weapons database from a directory of JSONL seed files,
/// returning the number of records written
pub fn seed_database(input_dir: &Path, output_db: &Path) -> Result<u64> {
    let mut writer = SeedWriter::create(output_db)?;

    let mut total: u64 = 0;
    for schema in ALL_TABLES {
        total += writer.load_table(schema, input_dir)?;
    }

    writer.finish()?;
    Ok(total)
}
