mod config;
pub use config::{ConnectionConfig, DEFAULT_SCHEMA};

mod sql;

use postgres::{Client, NoTls, Row};
use schemagen_core::{
    catalog::{Catalog, ColumnRow, KeyConstraintRow, ReferentialRow, RelationRow},
    Error, Nullability, Result,
};

/// A PostgreSQL catalog read through `information_schema`.
pub struct PostgreSQL {
    client: Client,

    /// Schema whose tables are introspected.
    schema: String,
}

impl PostgreSQL {
    /// Wraps an already connected client.
    pub fn new(client: Client, schema: impl Into<String>) -> Self {
        Self {
            client,
            schema: schema.into(),
        }
    }

    /// Connects using explicit settings. TLS is not negotiated.
    pub fn connect_with_config(config: &ConnectionConfig) -> Result<Self> {
        tracing::debug!(host = %config.host, dbname = %config.dbname, "connecting to catalog");

        let client = config
            .to_postgres()
            .connect(NoTls)
            .map_err(Error::catalog_unavailable)?;

        Ok(Self::new(client, &config.schema))
    }

    fn query(&mut self, name: &'static str, sql: &str) -> Result<Vec<Row>> {
        let rows = self
            .client
            .query(sql, &[&self.schema])
            .map_err(|err| query_error(name, err))?;

        tracing::debug!(query = name, rows = rows.len(), "catalog query drained");
        Ok(rows)
    }
}

impl std::fmt::Debug for PostgreSQL {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PostgreSQL")
            .field("schema", &self.schema)
            .finish_non_exhaustive()
    }
}

impl Catalog for PostgreSQL {
    fn columns(&mut self) -> Result<Vec<ColumnRow>> {
        let rows = self.query("columns", sql::COLUMNS)?;
        let mut out = Vec::with_capacity(rows.len());

        for row in &rows {
            let table = required(row, "columns", 0)?;
            // Tables without columns come back as one row of NULLs.
            let Some(column) = optional(row, "columns", 1)? else {
                continue;
            };
            let is_nullable = required(row, "columns", 2)?;
            let data_type = required(row, "columns", 3)?;

            out.push(ColumnRow {
                table,
                column,
                nullability: Nullability::from_is_nullable(&is_nullable),
                data_type,
            });
        }

        Ok(out)
    }

    fn referential_constraints(&mut self) -> Result<Vec<ReferentialRow>> {
        let rows = self.query("referential_constraints", sql::REFERENTIAL_CONSTRAINTS)?;
        let mut out = Vec::with_capacity(rows.len());

        for row in &rows {
            let constraint = required(row, "referential_constraints", 0)?;
            // Constraints referencing tables outside the schema have no match.
            let Some(parent_table) = optional(row, "referential_constraints", 1)? else {
                continue;
            };

            out.push(ReferentialRow {
                constraint,
                parent_table,
            });
        }

        Ok(out)
    }

    fn key_constraints(&mut self) -> Result<Vec<KeyConstraintRow>> {
        let rows = self.query("key_constraints", sql::KEY_CONSTRAINTS)?;

        rows.iter()
            .map(|row| {
                Ok(KeyConstraintRow {
                    table: required(row, "key_constraints", 0)?,
                    column: required(row, "key_constraints", 1)?,
                    constraint: required(row, "key_constraints", 2)?,
                    constraint_kind: required(row, "key_constraints", 3)?,
                })
            })
            .collect()
    }

    fn relations(&mut self) -> Result<Vec<RelationRow>> {
        let rows = self.query("relations", sql::RELATIONS)?;

        rows.iter()
            .map(|row| {
                Ok(RelationRow {
                    parent: required(row, "relations", 0)?,
                    child: required(row, "relations", 1)?,
                    child_foreign_key: required(row, "relations", 2)?,
                    constraint_kind: required(row, "relations", 3)?,
                })
            })
            .collect()
    }
}

fn query_error(name: &'static str, err: postgres::Error) -> Error {
    if err.is_closed() {
        Error::catalog_unavailable(err)
    } else {
        Error::catalog_query_failed(name, err.to_string())
    }
}

fn optional(row: &Row, query: &'static str, idx: usize) -> Result<Option<String>> {
    row.try_get::<_, Option<String>>(idx)
        .map_err(|err| Error::catalog_query_failed(query, format!("column {idx}: {err}")))
}

fn required(row: &Row, query: &'static str, idx: usize) -> Result<String> {
    optional(row, query, idx)?.ok_or_else(|| {
        Error::catalog_query_failed(query, format!("unexpected NULL in column {idx}"))
    })
}
