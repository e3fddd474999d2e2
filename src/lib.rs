//! # httpd
//! src/lib.rs
//!
//! Servidor HTTP/1.1 mínimo implementado desde cero: acepta conexiones TCP,
//! parsea requests, los resuelve contra un document root y escribe la
//! respuesta. Cada conexión vive en su propio thread y admite keep-alive.
//!
//! ## Arquitectura
//!
//! ```text
//! bytes → http::Request::parse → handler::ResponseBuilder → resource::Resolve
//!                                          │
//!                          http::write_response → socket
//! ```
//!
//! El servidor está dividido en módulos especializados:
//! - `http`: Parsing y serialización del protocolo HTTP/1.1
//! - `resource`: Resolución de paths a bytes (document root)
//! - `handler`: Construcción de la respuesta para un request válido
//! - `server`: Listener TCP y loop por conexión
//! - `config`: Opciones de CLI / variables de entorno
//! - `logging`: Inicialización de `tracing`
//!
//! ## Ejemplo de uso
//!
//! ```no_run
//! use httpd::config::Config;
//! use httpd::server::Server;
//!
//! let config = Config::default();
//! config.validate().expect("document root inválido");
//! let server = Server::bind(&config).expect("Error al hacer bind");
//! server.run().expect("Error al iniciar servidor");
//! ```

pub mod config;
pub mod handler;
pub mod http;
pub mod logging;
pub mod resource;
pub mod server;
