use super::Error;

/// Error when a merged field name cannot be placed without colliding with a
/// field already in the model.
#[derive(Debug)]
pub(super) struct NameCollisionError {
    model: Box<str>,
    field: Box<str>,
}

impl std::error::Error for NameCollisionError {}

impl core::fmt::Display for NameCollisionError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "field name `{}` collides in model `{}`",
            self.field, self.model
        )
    }
}

impl Error {
    pub fn name_collision_unresolved(model: impl Into<String>, field: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::NameCollision(NameCollisionError {
            model: model.into().into(),
            field: field.into().into(),
        }))
    }

    pub fn is_name_collision_unresolved(&self) -> bool {
        self.any(|kind| matches!(kind, super::ErrorKind::NameCollision(_)))
    }
}
