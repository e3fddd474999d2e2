//! # Parsing de Requests HTTP/1.1
//! src/http/request.rs
//!
//! Este módulo implementa el parser de mensajes HTTP/1.1 desde cero,
//! leyendo directamente de un stream con buffer ([`BufRead`]).
//!
//! ## Formato de un Request
//!
//! ```text
//! POST /submit HTTP/1.1\r\n
//! Host: localhost:8080\r\n
//! Content-Length: 5\r\n
//! \r\n
//! hello
//! ```
//!
//! ## Componentes
//!
//! 1. **Request Line**: `METHOD TARGET VERSION`, separados por un espacio
//! 2. **Headers**: Pares `Name: Value` (uno por línea)
//! 3. **Empty Line**: `\r\n` que separa headers del body
//! 4. **Body**: Exactamente `Content-Length` bytes, si el header existe
//!
//! Las líneas de continuación (header que empieza con espacio) se rechazan
//! en lugar de plegarse. RFC 7230 §3 permite cualquiera de las dos opciones.

use super::{Headers, HttpError, ParseError};
use std::io::{self, BufRead, Read};
use std::str::FromStr;
use url::Url;

/// Largo máximo de una línea (request line o header), incluyendo el `\n`
pub const MAX_LINE_LENGTH: u64 = 8192;

/// Métodos HTTP soportados
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    /// HEAD - Como GET; el body depende de la política configurada
    HEAD,

    /// GET - Obtener un recurso
    GET,

    /// POST - Enviar datos a un recurso
    POST,
}

impl Method {
    /// Convierte el método a string
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::HEAD => "HEAD",
            Method::GET => "GET",
            Method::POST => "POST",
        }
    }
}

impl FromStr for Method {
    type Err = HttpError;

    /// Comparación exacta y case-sensitive: `get` no es `GET`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "HEAD" => Ok(Method::HEAD),
            "GET" => Ok(Method::GET),
            "POST" => Ok(Method::POST),
            _ => Err(HttpError::MethodNotImplemented),
        }
    }
}

impl std::fmt::Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Representa un request HTTP parseado
///
/// Solo lo construye [`Request::parse`] y no cambia después.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    /// Método HTTP (HEAD, GET, POST)
    method: Method,

    /// Solo el path del target; scheme y host se descartan en absolute-form
    target: String,

    /// Versión tal como llegó (ej: "HTTP/1.1")
    version: String,

    /// Headers en orden de llegada
    headers: Headers,

    /// Body (vacío si no hay `Content-Length`)
    body: Vec<u8>,
}

impl Request {
    /// Parsea un request HTTP desde un stream
    ///
    /// Consume exactamente los bytes del request: lo que venga después queda
    /// en el reader para el siguiente ciclo de la conexión.
    ///
    /// # Retorna
    ///
    /// * `Ok(Request)` - Request parseado exitosamente
    /// * `Err(ParseError::EndOfStream)` - El peer cerró antes de enviar nada
    /// * `Err(ParseError)` - Cualquier otro error (ver [`ParseError::classify`])
    ///
    /// # Ejemplo
    ///
    /// ```
    /// use httpd::http::Request;
    ///
    /// let mut raw: &[u8] = b"GET http://example.com/index.html HTTP/1.1\r\nHost: example.com\r\n\r\n";
    /// let request = Request::parse(&mut raw).unwrap();
    ///
    /// assert_eq!(request.target(), "/index.html");
    /// assert_eq!(request.header("Host"), Some("example.com"));
    /// ```
    pub fn parse<R: BufRead>(reader: &mut R) -> Result<Self, ParseError> {
        // 1. Request line. Sin bytes = el peer terminó, no es un error de formato
        let line = read_line(reader)?.ok_or(ParseError::EndOfStream)?;
        let (method, target, version) = Self::parse_request_line(&line)?;

        // 2. Headers hasta la línea vacía
        let headers = Self::parse_headers(reader)?;

        // 3. Body
        let body = Self::parse_body(reader, &headers)?;

        Ok(Request {
            method,
            target,
            version,
            headers,
            body,
        })
    }

    /// Parsea la request line
    ///
    /// El orden de validación importa: primero la cantidad de tokens, luego
    /// el método y recién después el target.
    fn parse_request_line(line: &str) -> Result<(Method, String, String), ParseError> {
        let parts: Vec<&str> = line.split(' ').collect();

        // Debe tener exactamente 3 partes: METHOD TARGET VERSION
        if parts.len() != 3 {
            return Err(HttpError::InvalidRequest.into());
        }

        let method: Method = parts[0].parse()?;
        let target = Self::parse_target(parts[1])?;
        let version = parts[2].to_string();

        Ok((method, target, version))
    }

    /// Extrae el path del target
    ///
    /// Acepta origin-form (`/path`) y absolute-form (`http://host/path`).
    /// El query string no forma parte del path.
    fn parse_target(raw: &str) -> Result<String, ParseError> {
        // origin-form: el path pasa sin normalizar ni re-codificar
        if raw.starts_with('/') {
            let end = raw.find(&['?', '#'][..]).unwrap_or(raw.len());
            return Ok(raw[..end].to_string());
        }

        // absolute-form: se descartan scheme y host
        let url = Url::parse(raw)?;
        Ok(url.path().to_string())
    }

    /// Parsea los headers HTTP
    ///
    /// Cada header tiene formato: "Name: Value". Se divide en el primer `:`
    /// y solo el valor se recorta de espacios.
    fn parse_headers<R: BufRead>(reader: &mut R) -> Result<Headers, ParseError> {
        let mut headers = Headers::new();

        loop {
            let line = read_line(reader)?
                .ok_or_else(|| io::Error::from(io::ErrorKind::UnexpectedEof))?;

            // La línea vacía marca el fin de los headers
            if line.is_empty() {
                break;
            }

            let (name, value) = line.split_once(':').ok_or(HttpError::InvalidRequest)?;

            // Un nombre con espacios delata una línea plegada: se rechaza
            if name.is_empty() || name.contains(&[' ', '\t'][..]) {
                return Err(HttpError::InvalidRequest.into());
            }

            headers.add(name, value.trim_matches(' '));
        }

        // HTTP/1.1 exige Host
        match headers.get("Host") {
            Some(host) if !host.is_empty() => Ok(headers),
            _ => Err(HttpError::InvalidRequest.into()),
        }
    }

    /// Lee el body según `Content-Length`
    fn parse_body<R: BufRead>(reader: &mut R, headers: &Headers) -> Result<Vec<u8>, ParseError> {
        let Some(raw_length) = headers.get("Content-Length") else {
            if headers.contains("Transfer-Encoding") {
                // chunked no se decodifica (RFC 7230 §4.1 fuera de alcance)
                tracing::debug!("Transfer-Encoding sin Content-Length: body vacío");
            }
            return Ok(Vec::new());
        };

        let length: u64 = raw_length.parse()?;

        // `take` acumula varias lecturas hasta llegar a `length` o al EOF
        let mut body = Vec::new();
        reader.by_ref().take(length).read_to_end(&mut body)?;

        if (body.len() as u64) < length {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                format!("body truncado: {} de {} bytes", body.len(), length),
            )
            .into());
        }

        Ok(body)
    }

    // === Métodos públicos para acceder a los campos ===

    /// Obtiene el método HTTP del request
    pub fn method(&self) -> Method {
        self.method
    }

    /// Obtiene el path del request
    pub fn target(&self) -> &str {
        &self.target
    }

    /// Obtiene la versión HTTP
    pub fn version(&self) -> &str {
        &self.version
    }

    /// Obtiene todos los headers
    pub fn headers(&self) -> &Headers {
        &self.headers
    }

    /// Obtiene el primer valor de un header
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name)
    }

    /// Obtiene el body del request
    pub fn body(&self) -> &[u8] {
        &self.body
    }

    /// `true` si el cliente pidió `Connection: close` (sin importar mayúsculas)
    pub fn wants_close(&self) -> bool {
        self.header("Connection")
            .is_some_and(|value| value.eq_ignore_ascii_case("close"))
    }
}

/// Lee una línea terminada en `\n` y le quita los `\r`/`\n` finales
///
/// Retorna `Ok(None)` si el stream terminó sin ningún byte.
fn read_line<R: BufRead>(reader: &mut R) -> Result<Option<String>, ParseError> {
    let mut buf = Vec::new();
    let read = reader
        .by_ref()
        .take(MAX_LINE_LENGTH)
        .read_until(b'\n', &mut buf)?;

    if read == 0 {
        return Ok(None);
    }

    if buf.last() != Some(&b'\n') {
        if read as u64 >= MAX_LINE_LENGTH {
            return Err(HttpError::InvalidRequest.into());
        }
        // Línea cortada por el cierre del peer
        return Err(io::Error::from(io::ErrorKind::UnexpectedEof).into());
    }

    let line = String::from_utf8(buf).map_err(|_| HttpError::InvalidRequest)?;
    Ok(Some(line.trim_end_matches(&['\r', '\n'][..]).to_string()))
}
