//! # Document root
//! src/resource/fs.rs
//!
//! Sirve archivos desde un directorio del sistema de archivos.
//!
//! ## Reglas
//!
//! - El path se decodifica (`%20` → espacio) antes de tocar el disco
//! - Cualquier segmento `..` se trata como inexistente
//! - Un directorio se resuelve a su `index.html`
//! - `NotFound` del SO → [`ResolveError::NotFound`]; otro error de I/O → `Failure`

use super::{Resolve, ResolveError};
use percent_encoding::percent_decode_str;
use std::fs;
use std::io;
use std::path::PathBuf;

/// Archivo que se sirve cuando el target es un directorio
pub const INDEX_FILE: &str = "index.html";

/// Resolver de archivos bajo un directorio raíz
#[derive(Debug, Clone)]
pub struct DocumentRoot {
    root: PathBuf,
}

impl DocumentRoot {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Traduce un target a un path dentro del root
    ///
    /// Retorna `None` si el target no se puede decodificar o intenta salir
    /// del root.
    fn local_path(&self, target: &str) -> Option<PathBuf> {
        let decoded = percent_decode_str(target).decode_utf8().ok()?;

        let mut path = self.root.clone();
        for segment in decoded.split('/') {
            match segment {
                "" | "." => continue,
                ".." => return None,
                // Un `\` o NUL decodificado no debe convertirse en separador
                s if s.contains(&['\\', '\0'][..]) => return None,
                s => path.push(s),
            }
        }

        Some(path)
    }
}

impl Resolve for DocumentRoot {
    fn resolve(&self, target: &str) -> Result<Vec<u8>, ResolveError> {
        let mut path = self.local_path(target).ok_or(ResolveError::NotFound)?;

        let metadata = fs::metadata(&path).map_err(from_io)?;
        if metadata.is_dir() {
            path.push(INDEX_FILE);
        }

        tracing::debug!(path = %path.display(), "leyendo recurso");
        fs::read(&path).map_err(from_io)
    }
}

fn from_io(err: io::Error) -> ResolveError {
    match err.kind() {
        io::ErrorKind::NotFound => ResolveError::NotFound,
        _ => ResolveError::Failure(err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn fixture() -> TempDir {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("hello.txt"), "Hello from test").unwrap();
        fs::write(dir.path().join("with space.txt"), "spaced").unwrap();
        fs::create_dir(dir.path().join("docs")).unwrap();
        fs::write(dir.path().join("docs").join(INDEX_FILE), "<h1>docs</h1>").unwrap();
        fs::create_dir(dir.path().join("empty")).unwrap();
        dir
    }

    #[test]
    fn test_resolve_file() {
        let dir = fixture();
        let root = DocumentRoot::new(dir.path());

        assert_eq!(root.resolve("/hello.txt").unwrap(), b"Hello from test");
    }

    #[test]
    fn test_resolve_directory_index() {
        let dir = fixture();
        let root = DocumentRoot::new(dir.path());

        assert_eq!(root.resolve("/docs").unwrap(), b"<h1>docs</h1>");
        assert_eq!(root.resolve("/docs/").unwrap(), b"<h1>docs</h1>");
    }

    #[test]
    fn test_directory_without_index() {
        let dir = fixture();
        let root = DocumentRoot::new(dir.path());

        assert!(matches!(root.resolve("/empty/"), Err(ResolveError::NotFound)));
    }

    #[test]
    fn test_missing_file() {
        let dir = fixture();
        let root = DocumentRoot::new(dir.path());

        assert!(matches!(
            root.resolve("/pub/WWW/TheProject.html"),
            Err(ResolveError::NotFound)
        ));
    }

    #[test]
    fn test_percent_decoding() {
        let dir = fixture();
        let root = DocumentRoot::new(dir.path());

        assert_eq!(root.resolve("/with%20space.txt").unwrap(), b"spaced");
    }

    #[test]
    fn test_parent_segments_never_escape() {
        let dir = fixture();
        let inner = dir.path().join("docs");
        let root = DocumentRoot::new(&inner);

        assert!(matches!(root.resolve("/../hello.txt"), Err(ResolveError::NotFound)));
        assert!(matches!(root.resolve("/%2e%2e/hello.txt"), Err(ResolveError::NotFound)));
        assert!(matches!(root.resolve("/..%2fhello.txt"), Err(ResolveError::NotFound)));
    }

    #[test]
    fn test_invalid_utf8_is_not_found() {
        let dir = fixture();
        let root = DocumentRoot::new(dir.path());

        assert!(matches!(root.resolve("/%ff"), Err(ResolveError::NotFound)));
    }
}
