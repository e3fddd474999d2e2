//! # Errores del protocolo
//! src/http/error.rs
//!
//! Dos niveles de error:
//!
//! - [`HttpError`]: resultados clasificados que terminan en una respuesta
//!   de error fija (400, 404, 500, 501).
//! - [`ParseError`]: todo lo que puede fallar al leer un request del socket.
//!   Algunas variantes se clasifican como [`HttpError`]; otras (fin de
//!   stream, fallas de transporte) cierran la conexión sin responder.

use super::StatusCode;
use std::io;
use std::num::ParseIntError;
use thiserror::Error;

/// Error clasificado: se traduce 1:1 a un código de estado
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum HttpError {
    /// Request line o header malformado, o falta `Host`
    #[error("invalid request")]
    InvalidRequest,

    /// El resolver no encontró el recurso
    #[error("not found")]
    NotFound,

    /// Falla interna no relacionada con el input del cliente
    #[error("internal server error")]
    InternalServerError,

    /// Método fuera del conjunto soportado
    #[error("method not implemented")]
    MethodNotImplemented,
}

impl HttpError {
    /// Código de estado asociado según la tabla fija
    ///
    /// # Ejemplo
    /// ```
    /// use httpd::http::{HttpError, StatusCode};
    /// assert_eq!(HttpError::MethodNotImplemented.status(), StatusCode::NotImplemented);
    /// ```
    pub fn status(&self) -> StatusCode {
        match self {
            HttpError::InvalidRequest => StatusCode::BadRequest,
            HttpError::NotFound => StatusCode::NotFound,
            HttpError::InternalServerError => StatusCode::InternalServerError,
            HttpError::MethodNotImplemented => StatusCode::NotImplemented,
        }
    }
}

/// Errores que pueden ocurrir durante el parsing de un request
#[derive(Debug, Error)]
pub enum ParseError {
    /// El peer cerró la conexión antes de enviar un solo byte del request
    #[error("end of stream")]
    EndOfStream,

    /// Error clasificado detectado por el parser
    #[error(transparent)]
    Http(#[from] HttpError),

    /// El request target no es una URL válida
    #[error("invalid request target: {0}")]
    InvalidTarget(#[from] url::ParseError),

    /// `Content-Length` no es un entero no negativo
    #[error("invalid Content-Length: {0}")]
    InvalidContentLength(#[from] ParseIntError),

    /// Falla de transporte (incluye EOF a mitad de una línea o del body)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl ParseError {
    /// Traduce el error al [`HttpError`] que se le responde al cliente
    ///
    /// Retorna `None` cuando no corresponde escribir ninguna respuesta:
    /// fin de stream y fallas de transporte.
    pub fn classify(&self) -> Option<HttpError> {
        match self {
            ParseError::Http(err) => Some(*err),
            ParseError::InvalidTarget(_) | ParseError::InvalidContentLength(_) => {
                Some(HttpError::InvalidRequest)
            }
            ParseError::EndOfStream | ParseError::Io(_) => None,
        }
    }

    /// Indica si el peer cerró la conexión limpiamente
    pub fn is_end_of_stream(&self) -> bool {
        matches!(self, ParseError::EndOfStream)
    }
}
