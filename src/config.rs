//! # Configuración del Servidor
//! src/config.rs
//!
//! Este módulo define la configuración del servidor HTTP con soporte completo
//! para argumentos CLI y variables de entorno. Se arma una sola vez al
//! arrancar y después es de solo lectura.
//!
//! ## Ejemplos de uso
//!
//! ### CLI
//! ```bash
//! ./httpd --port 8080 --document-root ./public --head-body suppress
//! ```
//!
//! ### Variables de entorno
//! ```bash
//! HTTP_PORT=8080 DOCUMENT_ROOT=./public ./httpd
//! ```

use crate::handler::HeadPolicy;
use clap::Parser;
use std::path::PathBuf;
use thiserror::Error;

/// Configuración del servidor HTTP/1.1
#[derive(Debug, Clone, Parser)]
#[command(name = "httpd")]
#[command(about = "Servidor HTTP/1.1 minimo que sirve archivos desde un document root")]
#[command(version)]
pub struct Config {
    /// Puerto en el que escucha el servidor
    #[arg(short, long, default_value = "8080", env = "HTTP_PORT")]
    pub port: u16,

    /// Host/IP en el que escucha (por defecto todas las interfaces)
    #[arg(long, default_value = "0.0.0.0", env = "HTTP_HOST")]
    pub host: String,

    /// Directorio desde el que se sirven los archivos
    #[arg(short, long = "document-root", default_value = ".", env = "DOCUMENT_ROOT")]
    pub document_root: PathBuf,

    /// Body en respuestas a HEAD: `send` (igual que GET) o `suppress`
    #[arg(long = "head-body", value_enum, default_value_t = HeadPolicy::Send, env = "HEAD_BODY")]
    pub head_policy: HeadPolicy,
}

/// Errores de validación de la configuración
#[derive(Debug, Error)]
pub enum ConfigError {
    /// El document root no existe o no se puede leer
    #[error("document root {path:?} is not accessible: {source}")]
    DocumentRootUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// El document root existe pero no es un directorio
    #[error("document root {0:?} is not a directory")]
    DocumentRootNotDirectory(PathBuf),
}

impl Config {
    /// Crea una nueva configuración parseando argumentos CLI
    pub fn new() -> Self {
        Config::parse()
    }

    /// Obtiene la dirección completa para bind (host:port)
    ///
    /// # Ejemplo
    /// ```rust
    /// use httpd::config::Config;
    ///
    /// let config = Config::default();
    /// assert_eq!(config.address(), "0.0.0.0:8080");
    /// ```
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Valida la configuración
    ///
    /// El document root tiene que existir y ser un directorio.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let metadata = std::fs::metadata(&self.document_root).map_err(|source| {
            ConfigError::DocumentRootUnavailable {
                path: self.document_root.clone(),
                source,
            }
        })?;

        if !metadata.is_dir() {
            return Err(ConfigError::DocumentRootNotDirectory(self.document_root.clone()));
        }

        Ok(())
    }

    /// Registra un resumen de la configuración
    pub fn log_summary(&self) {
        tracing::info!(
            address = %self.address(),
            document_root = %self.document_root.display(),
            head_policy = ?self.head_policy,
            "configuración cargada"
        );
    }
}

impl Default for Config {
    /// Configuración por defecto (mismos valores que la CLI)
    fn default() -> Self {
        Self {
            port: 8080,
            host: "0.0.0.0".to_string(),
            document_root: PathBuf::from("."),
            head_policy: HeadPolicy::Send,
        }
    }
}
