use crate::{
    ast::{Field, File, Ident, TypeDecl, TypeExpr},
    imports,
};
use schemagen_core::{Error, MergedField, Model, Namer, Result};

/// Builds the declaration file for `model` from its merged fields.
///
/// Fails with [`Error::render`] when the model, package or any field name is
/// not a valid identifier, or a type expression is empty.
pub fn model(
    model: &Model,
    fields: &[MergedField],
    namer: &impl Namer,
    package: &str,
) -> Result<File> {
    if model.name.trim().is_empty() {
        return Err(Error::render(&model.name, "empty model name"));
    }

    let package = Ident::new(package)
        .ok_or_else(|| Error::render(&model.name, format!("invalid package name `{package}`")))?;

    let type_name = namer.type_name(&model.name);
    let name = Ident::new(type_name.as_str()).ok_or_else(|| {
        Error::render(&model.name, format!("invalid type name `{type_name}`"))
    })?;

    let imports = imports::detect(fields);
    let fields = fields
        .iter()
        .map(|field| expand_field(model, field))
        .collect::<Result<Vec<_>>>()?;

    Ok(File {
        package,
        imports,
        decls: vec![TypeDecl { name, fields }],
    })
}

fn expand_field(model: &Model, field: &MergedField) -> Result<Field> {
    let name = Ident::new(field.name.as_str()).ok_or_else(|| {
        Error::render(&model.name, format!("invalid field name `{}`", field.name))
    })?;

    let expr = field.ty.type_expr();
    let ty = TypeExpr::new(expr.as_str()).ok_or_else(|| {
        Error::render(
            &model.name,
            format!("invalid type `{expr}` for field `{}`", field.name),
        )
    })?;

    Ok(Field { name, ty })
}
