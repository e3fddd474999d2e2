//! # Módulo HTTP
//!
//! Este módulo implementa la capa de protocolo HTTP/1.1 desde cero, sin usar
//! librerías de alto nivel. Incluye:
//!
//! - Headers como multi-mapa ordenado
//! - Parsing de requests (request line, headers, body por `Content-Length`)
//! - Construcción y serialización de responses
//! - Tabla fija de status codes y errores clasificados
//!
//! ### Formato de Request
//!
//! ```text
//! GET /path HTTP/1.1\r\n
//! Host: example.com\r\n
//! Accept-Encoding: gzip, deflate\r\n
//! \r\n
//! ```
//!
//! ### Formato de Response
//!
//! ```text
//! HTTP/1.1 200 OK\r\n
//! Content-Length: 15\r\n
//! \r\n
//! Hello from test
//! ```
//!
//! No se soporta chunked transfer-encoding, TLS ni HTTP/2.

pub mod error;     // Errores clasificados y de parsing
pub mod headers;   // Multi-mapa de headers
pub mod request;   // Parsing de HTTP requests
pub mod response;  // Construcción de HTTP responses
pub mod status;    // Códigos de estado HTTP

// Re-exportamos los tipos principales para facilitar su uso
// Esto permite usar `http::Request` en vez de `http::request::Request`
pub use error::{HttpError, ParseError};
pub use headers::Headers;
pub use request::{Method, Request};
pub use response::{write_response, Response};
pub use status::StatusCode;
