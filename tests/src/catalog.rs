use schemagen_core::{
    catalog::{Catalog, ColumnRow, KeyConstraintRow, ReferentialRow, RelationRow},
    Error, Nullability, Result,
};

/// An in-memory catalog built up table by table.
///
/// Foreign keys are recorded in all three constraint streams the way
/// `information_schema` reports them, so tests only describe the schema.
#[derive(Debug, Default, Clone)]
pub struct FakeCatalog {
    columns: Vec<ColumnRow>,
    referential: Vec<ReferentialRow>,
    key_constraints: Vec<KeyConstraintRow>,
    relations: Vec<RelationRow>,
    unavailable: bool,
    failing: Option<&'static str>,

    /// Names of the queries issued so far, in order.
    pub queries: Vec<&'static str>,
}

impl FakeCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a table; columns are `(name, raw data type, nullable)`.
    pub fn table(mut self, name: &str, columns: &[(&str, &str, bool)]) -> Self {
        for (column, data_type, nullable) in columns {
            self.columns.push(ColumnRow {
                table: name.to_string(),
                column: column.to_string(),
                nullability: Nullability::from(*nullable),
                data_type: data_type.to_string(),
            });
        }
        self
    }

    /// Adds a foreign key `table.column → parent`.
    pub fn foreign_key(mut self, table: &str, column: &str, parent: &str) -> Self {
        let constraint = format!("{table}_{column}_fkey");

        self.referential.push(ReferentialRow {
            constraint: constraint.clone(),
            parent_table: parent.to_string(),
        });
        self.key_constraints.push(KeyConstraintRow {
            table: table.to_string(),
            column: column.to_string(),
            constraint,
            constraint_kind: "FOREIGN KEY".to_string(),
        });
        self.relation(parent, table, column, "FOREIGN KEY")
    }

    /// Marks the foreign key `table.column → parent` as also unique.
    pub fn unique_foreign_key(mut self, table: &str, column: &str, parent: &str) -> Self {
        self = self.foreign_key(table, column, parent);
        self.key_constraints.push(KeyConstraintRow {
            table: table.to_string(),
            column: column.to_string(),
            constraint: format!("{table}_{column}_key"),
            constraint_kind: "UNIQUE".to_string(),
        });
        self.relation(parent, table, column, "UNIQUE")
    }

    /// Adds a raw parent/child relation row.
    pub fn relation(mut self, parent: &str, child: &str, column: &str, kind: &str) -> Self {
        self.relations.push(RelationRow {
            parent: parent.to_string(),
            child: child.to_string(),
            child_foreign_key: column.to_string(),
            constraint_kind: kind.to_string(),
        });
        self
    }

    /// Reverses the row order of every stream.
    pub fn reversed(mut self) -> Self {
        self.referential.reverse();
        self.key_constraints.reverse();
        self.relations.reverse();
        self
    }

    /// Fails every query as if the connection were refused.
    pub fn unavailable(mut self) -> Self {
        self.unavailable = true;
        self
    }

    /// Fails the named query.
    pub fn failing(mut self, query: &'static str) -> Self {
        self.failing = Some(query);
        self
    }

    fn issue(&mut self, query: &'static str) -> Result<()> {
        self.queries.push(query);

        if self.unavailable {
            return Err(Error::catalog_unavailable(std::io::Error::new(
                std::io::ErrorKind::ConnectionRefused,
                "connection refused",
            )));
        }

        if self.failing == Some(query) {
            return Err(Error::catalog_query_failed(query, "malformed result"));
        }

        Ok(())
    }
}

impl Catalog for FakeCatalog {
    fn columns(&mut self) -> Result<Vec<ColumnRow>> {
        self.issue("columns")?;
        Ok(self.columns.clone())
    }

    fn referential_constraints(&mut self) -> Result<Vec<ReferentialRow>> {
        self.issue("referential_constraints")?;
        Ok(self.referential.clone())
    }

    fn key_constraints(&mut self) -> Result<Vec<KeyConstraintRow>> {
        self.issue("key_constraints")?;
        Ok(self.key_constraints.clone())
    }

    fn relations(&mut self) -> Result<Vec<RelationRow>> {
        self.issue("relations")?;
        Ok(self.relations.clone())
    }
}
