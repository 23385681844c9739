use crate::schema::TableSchema;

/// Generate CREATE TABLE SQL for a table schema
pub fn generate_create_table(schema: &TableSchema) -> String {
    let mut sql = format!("CREATE TABLE {} (\n", schema.name);
    let mut columns = Vec::new();

    for col in schema.columns {
        let null_constraint = if !col.nullable { " NOT NULL" } else { "" };
        let unique = if col.unique { " UNIQUE" } else { "" };

        columns.push(format!(
            "    {} {}{}{}",
            col.name,
            col.col_type.sql_type(),
            null_constraint,
            unique
        ));
    }

    if !schema.primary_key.is_empty() {
        columns.push(format!("    PRIMARY KEY ({})", schema.primary_key.join(", ")));
    }

    for fk in schema.foreign_keys {
        columns.push(format!(
            "    FOREIGN KEY ({}) REFERENCES {}({})",
            fk.column, fk.references_table, fk.references_column()
        ));
    }

    sql.push_str(&columns.join(",\n"));
    sql.push_str("\n)");

    sql
}

/// Generate CREATE INDEX statements for foreign key columns.
/// Columns that lead the primary key are already indexed and skipped.
pub fn generate_indexes(schema: &TableSchema) -> Vec<String> {
    schema
        .foreign_keys
        .iter()
        .filter(|fk| schema.primary_key.first() != Some(&fk.column))
        .map(|fk| {
            format!(
                "CREATE INDEX idx_{}_{} ON {}({})",
                schema.name, fk.column, schema.name, fk.column
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::tables::{SPECIAL_ABILITIES, WEAPONS, WEAPON_SOURCES};

    #[test]
    fn test_generate_create_table() {
        let sql = generate_create_table(&WEAPONS);
        assert!(sql.contains("CREATE TABLE weapons"));
        assert!(sql.contains("weapon_id INTEGER NOT NULL"));
        assert!(sql.contains("name TEXT NOT NULL UNIQUE"));
        assert!(sql.contains("PRIMARY KEY (weapon_id)"));
    }

    #[test]
    fn test_generate_join_table() {
        let sql = generate_create_table(&WEAPON_SOURCES);
        assert!(sql.contains("PRIMARY KEY (weapon_id, source_id)"));
        assert!(sql.contains("price INTEGER,"));
        assert!(sql.contains("FOREIGN KEY (source_id) REFERENCES sources(source_id)"));
    }

    #[test]
    fn test_generate_indexes() {
        let indexes = generate_indexes(&SPECIAL_ABILITIES);
        assert!(indexes.iter().any(|i| i.contains("idx_special_abilities_weapon_id")));

        let join_indexes = generate_indexes(&WEAPON_SOURCES);
        assert_eq!(join_indexes.len(), 1);
        assert!(join_indexes[0].contains("idx_weapon_sources_source_id"));
    }
}
