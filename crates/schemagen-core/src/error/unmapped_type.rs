use super::Error;

/// A column whose raw catalog type has no entry in the type map.
///
/// Introspection reports these as warnings and drops the column.
#[derive(Debug)]
pub(super) struct UnmappedTypeError {
    table: Box<str>,
    column: Box<str>,
    data_type: Box<str>,
    nullable: bool,
}

impl std::error::Error for UnmappedTypeError {}

impl core::fmt::Display for UnmappedTypeError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "unmapped type `{}` ({}) for column `{}.{}`",
            self.data_type,
            if self.nullable { "nullable" } else { "not null" },
            self.table,
            self.column,
        )
    }
}

impl Error {
    pub fn unmapped_type(
        table: impl Into<String>,
        column: impl Into<String>,
        data_type: impl Into<String>,
        nullable: bool,
    ) -> Error {
        Error::from(super::ErrorKind::UnmappedType(UnmappedTypeError {
            table: table.into().into(),
            column: column.into().into(),
            data_type: data_type.into().into(),
            nullable,
        }))
    }

    pub fn is_unmapped_type(&self) -> bool {
        self.any(|kind| matches!(kind, super::ErrorKind::UnmappedType(_)))
    }
}
