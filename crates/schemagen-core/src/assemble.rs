use crate::{
    catalog::Catalog,
    relation::{Associations, Classifier},
    schema::{Column, Model, ModelFile},
    Error, Introspector, Namer, Result, TypeMap,
};

use indexmap::IndexMap;

/// The intermediate model description for a catalog, plus the non-fatal
/// warnings raised while building it.
#[derive(Debug)]
pub struct Description {
    pub models: ModelFile,
    pub warnings: Vec<Error>,
}

/// Joins each table's columns with its associations, one [`Model`] per
/// table, ordered by table name.
///
/// Tables without any column are skipped, and so are associations recorded
/// against them.
pub fn assemble(tables: IndexMap<String, Vec<Column>>, mut associations: Associations) -> Vec<Model> {
    let mut models: Vec<_> = tables
        .into_iter()
        .filter(|(_, fields)| !fields.is_empty())
        .map(|(name, fields)| {
            let associations = associations.take(&name);
            Model {
                name,
                fields,
                associations,
            }
        })
        .collect();

    for table in associations.tables() {
        tracing::debug!(
            %table,
            dropped = associations.get(table).len(),
            "associations dropped; table has no resolvable columns"
        );
    }

    models.sort_by(|a, b| a.name.cmp(&b.name));
    models
}

/// Introspects `catalog`, classifies its relationships and assembles the
/// model description.
///
/// Fails as a whole on any catalog error; nothing partial is returned.
pub fn describe(catalog: impl Catalog, type_map: &TypeMap, namer: impl Namer) -> Result<Description> {
    let introspection = Introspector::new(type_map).introspect(catalog)?;

    let associations = Classifier::new(namer).classify(
        &introspection.column_names,
        &introspection.belongs_to,
        &introspection.has_relations,
    );

    let models = assemble(introspection.tables, associations);
    tracing::info!(models = models.len(), "models assembled");

    Ok(Description {
        models: ModelFile::new(models),
        warnings: introspection.warnings,
    })
}
