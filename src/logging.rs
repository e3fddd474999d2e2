//! # Logging estructurado
//! src/logging.rs
//!
//! Inicializa `tracing`. El nivel se controla con `RUST_LOG`
//! (ej: `RUST_LOG=httpd=debug`); sin la variable se usa `httpd=info`.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Filtro usado cuando `RUST_LOG` no está definido
pub const DEFAULT_FILTER: &str = "httpd=info";

/// Instala el subscriber global
///
/// Llamarla más de una vez no falla: las llamadas siguientes no hacen nada.
pub fn init() {
    // Si ya hay un subscriber global (otra llamada, o un test), no se hace nada
    let _ = tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| DEFAULT_FILTER.into()))
        .with(tracing_subscriber::fmt::layer())
        .try_init();
}
