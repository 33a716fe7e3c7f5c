//! Table bindings for persisted records.
//!
//! A record describes how it is stored with a static [`EntityMapping`]; the
//! `db` layer builds its SQL from that description instead of repeating
//! column lists by hand.

/// How a column value is represented in the database.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Encoding {
    Plain,
    /// Enumerations stored as their integer ordinal.
    Ordinal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Column {
    pub field: &'static str,
    pub name: &'static str,
    pub nullable: bool,
    pub encoding: Encoding,
}

impl Column {
    pub const fn required(field: &'static str, name: &'static str) -> Self {
        Self {
            field,
            name,
            nullable: false,
            encoding: Encoding::Plain,
        }
    }

    pub const fn optional(field: &'static str, name: &'static str) -> Self {
        Self {
            field,
            name,
            nullable: true,
            encoding: Encoding::Plain,
        }
    }

    pub const fn ordinal(field: &'static str, name: &'static str) -> Self {
        Self {
            field,
            name,
            nullable: false,
            encoding: Encoding::Ordinal,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Relation {
    /// This table holds a foreign key to `target`.
    ManyToOne {
        field: &'static str,
        column: &'static str,
        target: &'static str,
        optional: bool,
    },
    /// Inverse side: rows of `target` point back here through `mapped_by`.
    OneToMany {
        field: &'static str,
        target: &'static str,
        mapped_by: &'static str,
    },
}

impl Relation {
    pub fn field(&self) -> &'static str {
        match self {
            Relation::ManyToOne { field, .. } | Relation::OneToMany { field, .. } => field,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntityMapping {
    pub table: &'static str,
    pub columns: &'static [Column],
    pub relations: &'static [Relation],
    /// Upper bound on how many parent ids a single relation load may cover.
    pub batch_size: usize,
}

impl EntityMapping {
    pub fn column(&self, field: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.field == field)
    }

    pub fn relation(&self, field: &str) -> Option<&Relation> {
        self.relations.iter().find(|r| r.field() == field)
    }

    /// Comma-separated column names, in declaration order.
    pub fn column_list(&self) -> String {
        self.columns
            .iter()
            .map(|c| c.name)
            .collect::<Vec<_>>()
            .join(", ")
    }

    pub fn select_by_id(&self) -> String {
        format!(
            "SELECT {} FROM {} WHERE id = $1",
            self.column_list(),
            self.table
        )
    }

    /// Inserts every mapped column, bound as `$1..$n` in declaration order.
    pub fn insert(&self) -> String {
        let placeholders = (1..=self.columns.len())
            .map(|i| format!("${i}"))
            .collect::<Vec<_>>()
            .join(", ");
        let columns = self.column_list();
        format!(
            "INSERT INTO {} ({columns}) VALUES ({placeholders}) RETURNING {columns}",
            self.table
        )
    }

    /// `SELECT ... WHERE <column> = $1 ORDER BY <order_by>`.
    pub fn select_where(&self, column: &str, order_by: &str) -> String {
        format!(
            "SELECT {} FROM {} WHERE {column} = $1 ORDER BY {order_by}",
            self.column_list(),
            self.table
        )
    }

    /// Query for the rows on the far side of a one-to-many relation, taking an
    /// array of parent ids as `$1`. Returns `None` for unknown or many-to-one
    /// fields.
    pub fn select_related(&self, field: &str, order_by: &str) -> Option<String> {
        match self.relation(field)? {
            Relation::OneToMany {
                target, mapped_by, ..
            } => Some(format!(
                "SELECT * FROM {target} WHERE {mapped_by} = ANY($1) ORDER BY {order_by}"
            )),
            Relation::ManyToOne { .. } => None,
        }
    }
}

/// Implemented by records that carry a persistence description.
pub trait Mapped {
    const MAPPING: EntityMapping;
}
