use super::Error;

/// Error when a catalog query fails or returns rows of an unexpected shape.
#[derive(Debug)]
pub(super) struct CatalogQueryFailedError {
    query: Box<str>,
    message: Box<str>,
}

impl std::error::Error for CatalogQueryFailedError {}

impl core::fmt::Display for CatalogQueryFailedError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "catalog query `{}` failed: {}", self.query, self.message)
    }
}

impl Error {
    /// Creates a catalog query failure for the named query.
    pub fn catalog_query_failed(query: impl Into<String>, message: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::CatalogQueryFailed(CatalogQueryFailedError {
            query: query.into().into(),
            message: message.into().into(),
        }))
    }

    /// Returns `true` if this error, or any error it wraps, is a catalog
    /// query failure.
    pub fn is_catalog_query_failed(&self) -> bool {
        self.any(|kind| matches!(kind, super::ErrorKind::CatalogQueryFailed(_)))
    }
}
