//! # httpd - Entry Point
//! src/main.rs
//!
//! Punto de entrada del servidor HTTP/1.1: parsea la CLI, valida el
//! document root y se queda aceptando conexiones.

use httpd::config::Config;
use httpd::server::Server;

fn main() {
    httpd::logging::init();
    tracing::info!("httpd v{} iniciando", env!("CARGO_PKG_VERSION"));

    // Crear configuración (CLI o variables de entorno)
    let config = Config::new();
    config.log_summary();

    if let Err(e) = config.validate() {
        tracing::error!(error = %e, "configuración inválida");
        std::process::exit(1);
    }

    let server = match Server::bind(&config) {
        Ok(server) => server,
        Err(e) => {
            tracing::error!(address = %config.address(), error = %e, "no se pudo hacer bind");
            std::process::exit(1);
        }
    };

    // Iniciar el servidor (esto bloqueará el thread)
    if let Err(e) = server.run() {
        tracing::error!(error = %e, "error fatal");
        std::process::exit(1);
    }
}
