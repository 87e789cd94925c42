//! Field/association merging.
//!
//! Produces the field list of one generated declaration: direct columns
//! first, in catalog order, then one field per association that is not
//! already represented by a column.

use crate::{
    schema::Model,
    Error, Namer, Result,
};

use std::{collections::HashSet, fmt};

/// One member of a generated declaration.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MergedField {
    pub name: String,
    pub ty: FieldType,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum FieldType {
    /// A column's semantic type tag, used verbatim.
    Scalar(String),

    /// An optional single reference to another declaration: `*T`.
    Reference(String),

    /// An ordered collection of references: `[]*T`.
    References(String),
}

impl MergedField {
    pub fn new(name: impl Into<String>, ty: FieldType) -> Self {
        Self {
            name: name.into(),
            ty,
        }
    }
}

impl FieldType {
    /// The type expression as written in the declaration.
    pub fn type_expr(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldType::Scalar(ty) => f.write_str(ty),
            FieldType::Reference(ty) => write!(f, "*{ty}"),
            FieldType::References(ty) => write!(f, "[]*{ty}"),
        }
    }
}

#[derive(Debug)]
pub struct Merger<N> {
    namer: N,
}

impl<N: Namer> Merger<N> {
    pub fn new(namer: N) -> Self {
        Self { namer }
    }

    /// Merges a model's columns and associations into a collision-free field
    /// list.
    ///
    /// An association is dropped when its singular or plural field name is
    /// already taken, since a column (usually the foreign key) already
    /// represents it. Fails with [`Error::name_collision_unresolved`] when
    /// two columns case to the same field name.
    pub fn merge(&self, model: &Model) -> Result<Vec<MergedField>> {
        let mut fields = Vec::with_capacity(model.fields.len() + model.associations.len());
        let mut names = HashSet::new();

        for column in &model.fields {
            let name = self.namer.field_name(&column.name);
            if !names.insert(name.clone()) {
                return Err(Error::name_collision_unresolved(&model.name, name));
            }
            fields.push(MergedField::new(name, FieldType::Scalar(column.ty.clone())));
        }

        for association in &model.associations {
            let singular = self
                .namer
                .to_identifier_case(&self.namer.singularize(&association.name));
            let plural = self.namer.pluralize(&singular);

            if names.contains(&singular) || names.contains(&plural) {
                tracing::debug!(
                    model = %model.name,
                    association = %association.name,
                    "association already represented by a field"
                );
                continue;
            }

            let field = if association.is_single() {
                MergedField::new(singular.clone(), FieldType::Reference(singular))
            } else {
                MergedField::new(plural, FieldType::References(singular))
            };

            if !names.insert(field.name.clone()) {
                return Err(Error::name_collision_unresolved(&model.name, field.name));
            }
            fields.push(field);
        }

        Ok(fields)
    }
}
