use super::Error;

/// Error when the metadata catalog cannot be reached.
///
/// This is fatal for an introspection run: nothing is written when it occurs.
#[derive(Debug)]
pub(super) struct CatalogUnavailableError {
    inner: Box<dyn std::error::Error + Send + Sync>,
}

impl std::error::Error for CatalogUnavailableError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(self.inner.as_ref())
    }
}

impl core::fmt::Display for CatalogUnavailableError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "catalog unavailable: {}", self.inner)?;
        let mut source = self.inner.source();
        while let Some(err) = source {
            write!(f, ": {}", err)?;
            source = err.source();
        }
        Ok(())
    }
}

impl Error {
    /// Creates a catalog unavailable error from the driver's connection error.
    pub fn catalog_unavailable(err: impl std::error::Error + Send + Sync + 'static) -> Error {
        Error::from(super::ErrorKind::CatalogUnavailable(CatalogUnavailableError {
            inner: Box::new(err),
        }))
    }

    /// Returns `true` if this error, or any error it wraps, is a catalog
    /// unavailable error.
    pub fn is_catalog_unavailable(&self) -> bool {
        self.any(|kind| matches!(kind, super::ErrorKind::CatalogUnavailable(_)))
    }
}
