//! Renders a [`File`] the way `gofmt` lays it out: tab indentation, imports
//! in one sorted block, struct members aligned in a type column.

use crate::ast::{File, TypeDecl};
use std::fmt::{self, Write};

impl fmt::Display for File {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "package {}", self.package)?;

        match &self.imports[..] {
            [] => {}
            [import] => {
                writeln!(f)?;
                writeln!(f, "import {:?}", import.path)?;
            }
            imports => {
                writeln!(f)?;
                writeln!(f, "import (")?;
                for import in imports {
                    writeln!(f, "\t{:?}", import.path)?;
                }
                writeln!(f, ")")?;
            }
        }

        for decl in &self.decls {
            writeln!(f)?;
            write_type_decl(f, decl)?;
        }

        Ok(())
    }
}

fn write_type_decl(f: &mut impl Write, decl: &TypeDecl) -> fmt::Result {
    if decl.fields.is_empty() {
        return writeln!(f, "type {} struct{{}}", decl.name);
    }

    let width = decl
        .fields
        .iter()
        .map(|field| field.name.as_str().chars().count())
        .max()
        .unwrap_or(0);

    writeln!(f, "type {} struct {{", decl.name)?;
    for field in &decl.fields {
        writeln!(f, "\t{:<width$} {}", field.name.as_str(), field.ty)?;
    }
    writeln!(f, "}}")
}
