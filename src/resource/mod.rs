//! # Resolución de recursos
//! src/resource/mod.rs
//!
//! Interfaz angosta entre el protocolo y el origen de los bytes:
//!
//! ```text
//! Request target ("/docs/index.html") → Resolve → bytes | NotFound | Failure
//! ```
//!
//! El servidor usa [`DocumentRoot`] (archivos bajo un directorio). Cualquier
//! closure `Fn(&str) -> Result<Vec<u8>, ResolveError>` también sirve, lo que
//! simplifica los tests.

pub mod fs;

pub use fs::DocumentRoot;

use crate::http::HttpError;
use std::io;
use thiserror::Error;

/// Resultado negativo de una resolución
#[derive(Debug, Error)]
pub enum ResolveError {
    /// El recurso no existe
    #[error("resource not found")]
    NotFound,

    /// El recurso existe (o podría existir) pero no se pudo leer
    #[error("resource could not be read: {0}")]
    Failure(#[from] io::Error),
}

impl From<ResolveError> for HttpError {
    fn from(err: ResolveError) -> Self {
        match err {
            ResolveError::NotFound => HttpError::NotFound,
            ResolveError::Failure(_) => HttpError::InternalServerError,
        }
    }
}

/// Traduce un path de request a los bytes de la respuesta
pub trait Resolve: Send + Sync {
    fn resolve(&self, path: &str) -> Result<Vec<u8>, ResolveError>;
}

impl<F> Resolve for F
where
    F: Fn(&str) -> Result<Vec<u8>, ResolveError> + Send + Sync,
{
    fn resolve(&self, path: &str) -> Result<Vec<u8>, ResolveError> {
        self(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_closure_resolver() {
        let resolver = |path: &str| match path {
            "/hello" => Ok(b"hi".to_vec()),
            _ => Err(ResolveError::NotFound),
        };

        assert_eq!(resolver.resolve("/hello").unwrap(), b"hi");
        assert!(matches!(resolver.resolve("/nope"), Err(ResolveError::NotFound)));
    }

    #[test]
    fn test_error_mapping() {
        assert_eq!(HttpError::from(ResolveError::NotFound), HttpError::NotFound);

        let denied = io::Error::from(io::ErrorKind::PermissionDenied);
        assert_eq!(
            HttpError::from(ResolveError::from(denied)),
            HttpError::InternalServerError
        );
    }
}
