//! Relationship classification.
//!
//! Turns the raw constraint tuples produced by introspection into one
//! deduplicated association list per table. Two passes run in order:
//!
//! 1. **Belongs-to**: every foreign key owned by a table becomes a
//!    `belongsTo` association named after the referenced table. Two foreign
//!    keys to the same parent collapse into one association.
//!
//! 2. **Has-relation**: every parent/child pair becomes a `hasMany`
//!    association on the parent, unless the parent already has a column
//!    whose singular form matches the child's. When the same child is seen
//!    again through a different constraint kind (a foreign key also covered
//!    by a unique constraint), the association is upgraded to `hasOne`.
//!
//! Output order follows input order and is not otherwise meaningful; only
//! the set of `(name, kind)` pairs per table is stable for a fixed schema.

mod associations;
pub use associations::{Associations, Upsert};

use crate::{schema::Association, Namer};

use indexmap::IndexMap;

/// A foreign key owned by `table` referencing `parent`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BelongsToConstraint {
    pub table: String,
    pub column: String,
    pub constraint: String,
    pub parent: String,
    pub constraint_kind: String,
}

/// A constraint on `child` whose referenced columns belong to `parent`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HasRelationConstraint {
    pub parent: String,
    pub child: String,
    pub child_foreign_key: String,
    pub constraint_kind: String,
}

#[derive(Debug)]
pub struct Classifier<N> {
    namer: N,
}

impl<N: Namer> Classifier<N> {
    pub fn new(namer: N) -> Self {
        Self { namer }
    }

    /// `columns` holds every catalog column name per table, including
    /// columns whose type could not be resolved.
    pub fn classify(
        &self,
        columns: &IndexMap<String, Vec<String>>,
        belongs_to: &[BelongsToConstraint],
        has_relations: &[HasRelationConstraint],
    ) -> Associations {
        let mut associations = Associations::new();

        for constraint in belongs_to {
            let association = Association::belongs_to(&constraint.parent)
                .with_constraint_kind(&constraint.constraint_kind);

            let upsert = associations.upsert(&constraint.table, association);
            tracing::debug!(
                table = %constraint.table,
                parent = %constraint.parent,
                constraint = %constraint.constraint,
                ?upsert,
                "belongs-to"
            );
        }

        for constraint in has_relations {
            if constraint.parent == constraint.child {
                continue;
            }

            if self.has_matching_column(columns, &constraint.parent, &constraint.child) {
                tracing::debug!(
                    parent = %constraint.parent,
                    child = %constraint.child,
                    "has-relation skipped; parent already has a matching column"
                );
                continue;
            }

            let association = Association::has_many(&constraint.child)
                .with_constraint_kind(&constraint.constraint_kind);

            let upsert = associations.upsert(&constraint.parent, association);
            if upsert.replaced() {
                tracing::debug!(
                    parent = %constraint.parent,
                    child = %constraint.child,
                    constraint_kind = %constraint.constraint_kind,
                    "has-relation upgraded to hasOne"
                );
            } else {
                tracing::debug!(
                    parent = %constraint.parent,
                    child = %constraint.child,
                    constraint_kind = %constraint.constraint_kind,
                    ?upsert,
                    "has-relation"
                );
            }
        }

        associations
    }

    /// Returns `true` if `parent` has a column whose singular name matches
    /// the singular name of `child`.
    ///
    /// This is a plain name comparison and can skip a relation whose name
    /// merely happens to collide with a column.
    fn has_matching_column(
        &self,
        columns: &IndexMap<String, Vec<String>>,
        parent: &str,
        child: &str,
    ) -> bool {
        let Some(names) = columns.get(parent) else {
            return false;
        };

        let child = self.namer.singularize(child);
        names
            .iter()
            .any(|name| self.namer.singularize(name) == child)
    }
}
