//! # Construcción y escritura de Respuestas HTTP
//! src/http/response.rs
//!
//! Este módulo define la respuesta HTTP y su serialización a bytes.
//!
//! ## Formato de una respuesta exitosa
//!
//! ```text
//! HTTP/1.1 200 OK\r\n
//! Content-Length: 15\r\n
//! \r\n
//! Hello from test
//! ```
//!
//! ## Formato de una respuesta de error
//!
//! Sin body y siempre con la versión literal `HTTP/1.1`, sin importar la
//! versión que anunció el cliente:
//!
//! ```text
//! HTTP/1.1 404 Not Found\r\n
//! Content-Length: 0\r\n
//! \r\n
//! ```

use super::{Headers, HttpError, StatusCode};
use std::io::{self, Write};

/// Versión usada en respuestas nuevas y en todas las respuestas de error
pub const HTTP_VERSION: &str = "HTTP/1.1";

/// Representa una respuesta HTTP completa
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    /// Versión HTTP de la status line
    version: String,

    /// Código de estado (define también el reason phrase)
    status: StatusCode,

    /// Headers en orden de inserción
    headers: Headers,

    /// Cuerpo de la respuesta (puede ser vacío)
    body: Vec<u8>,
}

impl Response {
    /// Crea una nueva respuesta `HTTP/1.1` sin headers ni body
    ///
    /// # Ejemplo
    /// ```
    /// use httpd::http::{Response, StatusCode};
    ///
    /// let response = Response::new(StatusCode::Ok)
    ///     .with_header("Content-Length", "5")
    ///     .with_body(b"Hello".to_vec());
    ///
    /// assert_eq!(response.to_bytes(), b"HTTP/1.1 200 OK\r\nContent-Length: 5\r\n\r\nHello");
    /// ```
    pub fn new(status: StatusCode) -> Self {
        Self {
            version: HTTP_VERSION.to_string(),
            status,
            headers: Headers::new(),
            body: Vec::new(),
        }
    }

    /// `200 OK` con el body dado y su `Content-Length` exacto
    pub fn ok(body: Vec<u8>) -> Self {
        let length = body.len().to_string();
        Self::new(StatusCode::Ok)
            .with_header("Content-Length", &length)
            .with_body(body)
    }

    /// Agrega un header a la respuesta
    ///
    /// Si el header ya existe, el valor se agrega al final (no se sobrescribe).
    pub fn with_header(mut self, name: &str, value: &str) -> Self {
        self.headers.add(name, value);
        self
    }

    /// Reemplaza el body. No toca `Content-Length`.
    pub fn with_body(mut self, body: Vec<u8>) -> Self {
        self.body = body;
        self
    }

    /// Descarta el body y conserva los headers (incluido `Content-Length`)
    pub fn without_body(mut self) -> Self {
        self.body.clear();
        self
    }

    /// Convierte la respuesta a bytes listos para enviar por el socket
    ///
    /// - Status line: `<Version> <Code> <Reason>\r\n`
    /// - Headers: `Name: v1, v2\r\n`
    /// - Línea vacía: `\r\n`
    /// - Body: tal cual, sin framing extra
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut result = Vec::with_capacity(128 + self.body.len());

        let status_line = format!(
            "{} {} {}\r\n",
            self.version,
            self.status.as_u16(),
            self.status.reason_phrase()
        );
        result.extend_from_slice(status_line.as_bytes());

        for (name, values) in self.headers.iter() {
            let header_line = format!("{}: {}\r\n", name, values.join(", "));
            result.extend_from_slice(header_line.as_bytes());
        }

        result.extend_from_slice(b"\r\n");
        result.extend_from_slice(&self.body);

        result
    }

    /// Bytes de la respuesta fija para un error clasificado
    pub fn error_bytes(error: HttpError) -> Vec<u8> {
        let status = error.status();
        format!(
            "{} {} {}\r\nContent-Length: 0\r\n\r\n",
            HTTP_VERSION,
            status.as_u16(),
            status.reason_phrase()
        )
        .into_bytes()
    }

    /// Obtiene el código de estado de la respuesta
    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// Obtiene la versión de la status line
    pub fn version(&self) -> &str {
        &self.version
    }

    /// Obtiene una referencia a los headers
    pub fn headers(&self) -> &Headers {
        &self.headers
    }

    /// Obtiene una referencia al body
    pub fn body(&self) -> &[u8] {
        &self.body
    }
}

/// Escribe el resultado de un ciclo request/response en `sink`
///
/// Con `Ok` se serializa la respuesta; con `Err` se escribe la respuesta de
/// error fija. Todo se arma en un solo buffer antes de escribir, así nunca
/// queda una respuesta a medias en el socket.
pub fn write_response<W: Write>(sink: &mut W, outcome: Result<&Response, HttpError>) -> io::Result<()> {
    let bytes = match outcome {
        Ok(response) => response.to_bytes(),
        Err(error) => Response::error_bytes(error),
    };

    sink.write_all(&bytes)?;
    sink.flush()
}
