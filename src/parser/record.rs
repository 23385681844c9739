use anyhow::{anyhow, bail, Context, Result};
use serde_json::Value;
use std::collections::HashMap;

use crate::schema::{ColumnType, TableSchema};

/// A parsed row ready for insertion
pub struct ParsedRow {
    pub values: HashMap<&'static str, SqlValue>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SqlValue {
    Null,
    Integer(i64),
    Real(f64),
    Text(String),
}

impl SqlValue {
    pub fn bind_to(&self, idx: usize, stmt: &mut rusqlite::Statement) -> rusqlite::Result<()> {
        match self {
            SqlValue::Null => stmt.raw_bind_parameter(idx, rusqlite::types::Null)?,
            SqlValue::Integer(i) => stmt.raw_bind_parameter(idx, i)?,
            SqlValue::Real(f) => stmt.raw_bind_parameter(idx, f)?,
            SqlValue::Text(s) => stmt.raw_bind_parameter(idx, s.as_str())?,
        }
        Ok(())
    }
}

/// Parse a JSON line into a row for the given table schema.
///
/// Keys are the column names. A value that cannot be stored in its
/// column's type is an error, never a silent NULL.
pub fn parse_record(line: &str, schema: &TableSchema) -> Result<ParsedRow> {
    let json: Value = serde_json::from_str(line)
        .context("Failed to parse JSON")?;

    let mut values = HashMap::new();

    for col in schema.columns {
        let value = convert(json.get(col.name), &col.col_type)
            .with_context(|| format!("Invalid value for column '{}'", col.name))?;
        if !col.nullable && value == SqlValue::Null {
            bail!("Missing required column '{}' in {}", col.name, schema.name);
        }
        values.insert(col.name, value);
    }

    Ok(ParsedRow { values })
}

fn convert(val: Option<&Value>, col_type: &ColumnType) -> Result<SqlValue> {
    let v = match val {
        None | Some(Value::Null) => return Ok(SqlValue::Null),
        Some(v) => v,
    };

    let converted = match (col_type, v) {
        (ColumnType::Integer, Value::Number(n)) => n.as_i64().map(SqlValue::Integer),
        (ColumnType::Integer, Value::String(s)) => s.trim().parse().ok().map(SqlValue::Integer),
        (ColumnType::Real, Value::Number(n)) => n.as_f64().map(SqlValue::Real),
        (ColumnType::Real, Value::String(s)) => s.trim().parse().ok().map(SqlValue::Real),
        (ColumnType::Text, Value::String(s)) => Some(SqlValue::Text(s.clone())),
        // Damage values like 45 arrive as numbers
        (ColumnType::Text, Value::Number(n)) => Some(SqlValue::Text(n.to_string())),
        _ => None,
    };

    converted.ok_or_else(|| anyhow!("expected {}, found {}", col_type.sql_type(), v))
}
