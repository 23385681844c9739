/// SQLite storage class of a column
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnType {
    Integer,
    Real,
    Text,
}

impl ColumnType {
    pub const fn sql_type(self) -> &'static str {
        match self {
            ColumnType::Integer => "INTEGER",
            ColumnType::Real => "REAL",
            ColumnType::Text => "TEXT",
        }
    }
}

/// One column of a seeded table. Columns start out nullable.
#[derive(Debug, Clone)]
pub struct Column {
    pub name: &'static str,
    pub col_type: ColumnType,
    pub nullable: bool,
    pub unique: bool,
}

impl Column {
    const fn of(name: &'static str, col_type: ColumnType) -> Self {
        Self {
            name,
            col_type,
            nullable: true,
            unique: false,
        }
    }

    pub const fn integer(name: &'static str) -> Self {
        Self::of(name, ColumnType::Integer)
    }

    pub const fn real(name: &'static str) -> Self {
        Self::of(name, ColumnType::Real)
    }

    pub const fn text(name: &'static str) -> Self {
        Self::of(name, ColumnType::Text)
    }

    pub const fn not_null(self) -> Self {
        Self {
            nullable: false,
            ..self
        }
    }

    pub const fn unique(self) -> Self {
        Self {
            unique: true,
            ..self
        }
    }
}

/// `column` references the column of the same name in `references_table`
#[derive(Debug, Clone)]
pub struct ForeignKey {
    pub column: &'static str,
    pub references_table: &'static str,
}

impl ForeignKey {
    pub const fn new(column: &'static str, references_table: &'static str) -> Self {
        Self {
            column,
            references_table,
        }
    }

    pub const fn references_column(&self) -> &'static str {
        self.column
    }
}

/// A table, its seed file, and its keys
#[derive(Debug, Clone)]
pub struct TableSchema {
    pub name: &'static str,
    pub source_file: &'static str,
    pub columns: &'static [Column],
    pub primary_key: &'static [&'static str],
    pub foreign_keys: &'static [ForeignKey],
}

impl TableSchema {
    /// Parent tables named by this table's foreign keys
    pub fn dependencies(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.foreign_keys
            .iter()
            .map(|fk| fk.references_table)
            .filter(move |parent| *parent != self.name)
    }

    pub fn column_names(&self) -> Vec<&'static str> {
        self.columns.iter().map(|c| c.name).collect()
    }
}
