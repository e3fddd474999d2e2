//! # Códigos de Estado HTTP
//! src/http/status.rs
//!
//! Tabla fija de códigos de estado que usa el servidor. Es de solo lectura
//! y se comparte entre todos los threads sin sincronización.
//!
//! | Código | Reason phrase         |
//! |--------|-----------------------|
//! | 200    | `OK`                  |
//! | 400    | `Bad Request`         |
//! | 404    | `Not Found`           |
//! | 500    | `InternalServerError` |
//! | 501    | `Not Implemented`     |

/// Representa los códigos de estado HTTP que soporta nuestro servidor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusCode {
    /// 200 OK - La petición fue exitosa
    Ok = 200,

    /// 400 Bad Request - Request line o headers malformados, o falta `Host`
    BadRequest = 400,

    /// 404 Not Found - El recurso no existe bajo el document root
    NotFound = 404,

    /// 500 Internal Server Error - Fallo del resolver no atribuible al cliente
    InternalServerError = 500,

    /// 501 Not Implemented - Método fuera de {HEAD, GET, POST}
    NotImplemented = 501,
}

impl StatusCode {
    /// Convierte el código a su valor numérico
    ///
    /// # Ejemplo
    /// ```
    /// use httpd::http::StatusCode;
    /// assert_eq!(StatusCode::Ok.as_u16(), 200);
    /// ```
    pub fn as_u16(&self) -> u16 {
        *self as u16
    }

    /// Retorna el texto de razón (reason phrase) asociado al código
    ///
    /// Ojo: el 500 se escribe `InternalServerError`, sin espacios. Los
    /// clientes existentes dependen de ese texto exacto.
    ///
    /// # Ejemplo
    /// ```
    /// use httpd::http::StatusCode;
    /// assert_eq!(StatusCode::NotFound.reason_phrase(), "Not Found");
    /// assert_eq!(StatusCode::InternalServerError.reason_phrase(), "InternalServerError");
    /// ```
    pub fn reason_phrase(&self) -> &'static str {
        match self {
            StatusCode::Ok => "OK",
            StatusCode::BadRequest => "Bad Request",
            StatusCode::NotFound => "Not Found",
            StatusCode::InternalServerError => "InternalServerError",
            StatusCode::NotImplemented => "Not Implemented",
        }
    }
}

impl std::fmt::Display for StatusCode {
    /// Formato: "200 OK"
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.as_u16(), self.reason_phrase())
    }
}
