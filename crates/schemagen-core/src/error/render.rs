use super::Error;

/// Error when a model's merged fields cannot be rendered into a declaration.
#[derive(Debug)]
pub(super) struct RenderError {
    model: Box<str>,
    message: Box<str>,
}

impl std::error::Error for RenderError {}

impl core::fmt::Display for RenderError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "cannot render model `{}`: {}", self.model, self.message)
    }
}

impl Error {
    pub fn render(model: impl Into<String>, message: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::Render(RenderError {
            model: model.into().into(),
            message: message.into().into(),
        }))
    }

    pub fn is_render(&self) -> bool {
        self.any(|kind| matches!(kind, super::ErrorKind::Render(_)))
    }
}
