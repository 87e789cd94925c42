//! The catalog boundary.
//!
//! A [`Catalog`] answers the four read-only metadata queries introspection
//! needs. Each query is drained fully before the next one is issued. Rows
//! are returned in whatever order the catalog produces them.

use crate::{type_map::Nullability, Result};

/// A base table column with its nullability and raw catalog type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnRow {
    pub table: String,
    pub column: String,
    pub nullability: Nullability,
    pub data_type: String,
}

/// A referential constraint resolved to the table it references.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReferentialRow {
    pub constraint: String,
    pub parent_table: String,
}

/// A non primary key constraint and the table/column that owns it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyConstraintRow {
    pub table: String,
    pub column: String,
    pub constraint: String,
    pub constraint_kind: String,
}

/// A parent/child pair joined through a constraint on the child.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelationRow {
    pub parent: String,
    pub child: String,
    pub child_foreign_key: String,
    pub constraint_kind: String,
}

pub trait Catalog {
    /// Enumerates base table columns in ordinal order.
    fn columns(&mut self) -> Result<Vec<ColumnRow>>;

    /// Resolves each referential constraint to its referenced table.
    fn referential_constraints(&mut self) -> Result<Vec<ReferentialRow>>;

    /// Enumerates constraint owners, excluding primary keys.
    fn key_constraints(&mut self) -> Result<Vec<KeyConstraintRow>>;

    /// Enumerates parent/child relations, excluding self references.
    fn relations(&mut self) -> Result<Vec<RelationRow>>;
}

impl<T: Catalog + ?Sized> Catalog for &mut T {
    fn columns(&mut self) -> Result<Vec<ColumnRow>> {
        (**self).columns()
    }

    fn referential_constraints(&mut self) -> Result<Vec<ReferentialRow>> {
        (**self).referential_constraints()
    }

    fn key_constraints(&mut self) -> Result<Vec<KeyConstraintRow>> {
        (**self).key_constraints()
    }

    fn relations(&mut self) -> Result<Vec<RelationRow>> {
        (**self).relations()
    }
}

impl<T: Catalog + ?Sized> Catalog for Box<T> {
    fn columns(&mut self) -> Result<Vec<ColumnRow>> {
        (**self).columns()
    }

    fn referential_constraints(&mut self) -> Result<Vec<ReferentialRow>> {
        (**self).referential_constraints()
    }

    fn key_constraints(&mut self) -> Result<Vec<KeyConstraintRow>> {
        (**self).key_constraints()
    }

    fn relations(&mut self) -> Result<Vec<RelationRow>> {
        (**self).relations()
    }
}
