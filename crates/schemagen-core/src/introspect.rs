use crate::{
    catalog::Catalog,
    relation::{BelongsToConstraint, HasRelationConstraint},
    schema::Column,
    Error, Result, TypeMap,
};

use indexmap::IndexMap;

/// Raw introspection output: resolved columns per table and the constraint
/// tuples classification consumes.
#[derive(Debug, Default)]
pub struct Introspection {
    /// Resolved columns keyed by table name, in catalog order. Tables with no
    /// resolvable column are absent.
    pub tables: IndexMap<String, Vec<Column>>,

    /// Every catalog column name keyed by table, resolvable or not.
    pub column_names: IndexMap<String, Vec<String>>,

    pub belongs_to: Vec<BelongsToConstraint>,

    pub has_relations: Vec<HasRelationConstraint>,

    /// Non-fatal problems, one [`Error::unmapped_type`] per dropped column.
    pub warnings: Vec<Error>,
}

#[derive(Debug)]
pub struct Introspector<'a> {
    type_map: &'a TypeMap,
}

impl<'a> Introspector<'a> {
    pub fn new(type_map: &'a TypeMap) -> Self {
        Self { type_map }
    }

    /// Queries the catalog and resolves column types.
    ///
    /// Any catalog failure aborts introspection. Unmapped column types do
    /// not; they are collected in [`Introspection::warnings`].
    pub fn introspect(&self, mut catalog: impl Catalog) -> Result<Introspection> {
        let mut out = Introspection::default();

        for row in catalog.columns()? {
            out.column_names
                .entry(row.table.clone())
                .or_default()
                .push(row.column.clone());

            match self
                .type_map
                .resolve(&row.table, &row.column, row.nullability, &row.data_type)
            {
                Ok(column) => out.tables.entry(row.table).or_default().push(column),
                Err(err) => {
                    tracing::warn!("{err}; column skipped");
                    out.warnings.push(err);
                }
            }
        }

        // First resolution wins if a constraint name shows up twice.
        let mut parents = IndexMap::<String, String>::new();
        for row in catalog.referential_constraints()? {
            parents.entry(row.constraint).or_insert(row.parent_table);
        }

        for row in catalog.key_constraints()? {
            let Some(parent) = parents.get(&row.constraint) else {
                continue;
            };

            out.belongs_to.push(BelongsToConstraint {
                table: row.table,
                column: row.column,
                constraint: row.constraint,
                parent: parent.clone(),
                constraint_kind: row.constraint_kind,
            });
        }

        for row in catalog.relations()? {
            if row.parent == row.child {
                continue;
            }

            out.has_relations.push(HasRelationConstraint {
                parent: row.parent,
                child: row.child,
                child_foreign_key: row.child_foreign_key,
                constraint_kind: row.constraint_kind,
            });
        }

        tracing::info!(
            tables = out.tables.len(),
            belongs_to = out.belongs_to.len(),
            has_relations = out.has_relations.len(),
            unmapped = out.warnings.len(),
            "catalog introspected"
        );

        Ok(out)
    }
}
