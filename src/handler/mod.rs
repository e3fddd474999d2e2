//! # Construcción de respuestas
//! src/handler/mod.rs
//!
//! Convierte un request ya parseado en una respuesta consultando el resolver.
//!
//! ```text
//! Request → ResponseBuilder → Resolve(target) → Response | HttpError
//! ```
//!
//! Solo se invoca cuando el parsing tuvo éxito; los errores de parsing se
//! responden directamente desde el loop de conexión.

use crate::http::{HttpError, Method, Request, Response};
use crate::resource::Resolve;
use clap::ValueEnum;

/// Qué hacer con el body en respuestas a `HEAD`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum HeadPolicy {
    /// Responder igual que a `GET`
    #[default]
    Send,

    /// Mantener `Content-Length` con el tamaño real pero no enviar el body
    Suppress,
}

/// Construye la respuesta de cada request exitoso
#[derive(Debug, Clone)]
pub struct ResponseBuilder<R> {
    resolver: R,
    head_policy: HeadPolicy,
}

impl<R: Resolve> ResponseBuilder<R> {
    /// Crea un builder con la política `HEAD` por defecto ([`HeadPolicy::Send`])
    pub fn new(resolver: R) -> Self {
        Self {
            resolver,
            head_policy: HeadPolicy::default(),
        }
    }

    pub fn with_head_policy(mut self, head_policy: HeadPolicy) -> Self {
        self.head_policy = head_policy;
        self
    }

    /// Resuelve el target y arma la respuesta
    ///
    /// - Recurso encontrado → `200 OK` con `Content-Length` exacto
    /// - `NotFound` del resolver → [`HttpError::NotFound`]
    /// - Falla del resolver → [`HttpError::InternalServerError`]
    ///
    /// # Ejemplo
    /// ```
    /// use httpd::handler::ResponseBuilder;
    /// use httpd::http::{Request, StatusCode};
    /// use httpd::resource::ResolveError;
    ///
    /// let builder = ResponseBuilder::new(|_: &str| Ok::<_, ResolveError>(b"hi".to_vec()));
    ///
    /// let mut raw: &[u8] = b"GET / HTTP/1.1\r\nHost: a\r\n\r\n";
    /// let request = Request::parse(&mut raw).unwrap();
    /// let response = builder.build(&request).unwrap();
    ///
    /// assert_eq!(response.status(), StatusCode::Ok);
    /// assert_eq!(response.headers().get("Content-Length"), Some("2"));
    /// ```
    pub fn build(&self, request: &Request) -> Result<Response, HttpError> {
        let content = self.resolver.resolve(request.target()).map_err(|err| {
            tracing::debug!(target_path = request.target(), error = %err, "resolución fallida");
            HttpError::from(err)
        })?;

        let response = Response::ok(content);

        if request.method() == Method::HEAD && self.head_policy == HeadPolicy::Suppress {
            return Ok(response.without_body());
        }

        Ok(response)
    }

    pub fn head_policy(&self) -> HeadPolicy {
        self.head_policy
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::StatusCode;
    use crate::resource::ResolveError;
    use std::io;

    fn request(raw: &[u8]) -> Request {
        let mut reader = raw;
        Request::parse(&mut reader).unwrap()
    }

    fn site(path: &str) -> Result<Vec<u8>, ResolveError> {
        match path {
            "/" => Ok(b"Hello from test".to_vec()),
            "/secret" => Err(io::Error::from(io::ErrorKind::PermissionDenied).into()),
            _ => Err(ResolveError::NotFound),
        }
    }

    #[test]
    fn test_build_found() {
        let builder = ResponseBuilder::new(site);
        let response = builder
            .build(&request(b"GET / HTTP/1.1\r\nHost: a\r\n\r\n"))
            .unwrap();

        assert_eq!(response.status(), StatusCode::Ok);
        assert_eq!(response.headers().get("Content-Length"), Some("15"));
        assert_eq!(response.body(), b"Hello from test");
        assert_eq!(
            response.to_bytes(),
            b"HTTP/1.1 200 OK\r\nContent-Length: 15\r\n\r\nHello from test"
        );
    }

    #[test]
    fn test_build_not_found() {
        let builder = ResponseBuilder::new(site);
        let result = builder.build(&request(
            b"GET /pub/WWW/TheProject.html HTTP/1.1\r\nHost: www.w3.org\r\n\r\n",
        ));

        assert_eq!(result.unwrap_err(), HttpError::NotFound);
    }

    #[test]
    fn test_build_resolver_failure() {
        let builder = ResponseBuilder::new(site);
        let result = builder.build(&request(b"GET /secret HTTP/1.1\r\nHost: a\r\n\r\n"));

        assert_eq!(result.unwrap_err(), HttpError::InternalServerError);
    }

    #[test]
    fn test_post_is_resolved_like_get() {
        let builder = ResponseBuilder::new(site);
        let response = builder
            .build(&request(b"POST / HTTP/1.1\r\nHost: a\r\nContent-Length: 2\r\n\r\nhi"))
            .unwrap();

        assert_eq!(response.body(), b"Hello from test");
    }

    #[test]
    fn test_head_send_policy() {
        let builder = ResponseBuilder::new(site);
        assert_eq!(builder.head_policy(), HeadPolicy::Send);

        let response = builder
            .build(&request(b"HEAD / HTTP/1.1\r\nHost: a\r\n\r\n"))
            .unwrap();

        assert_eq!(response.body(), b"Hello from test");
        assert_eq!(response.headers().get("Content-Length"), Some("15"));
    }

    #[test]
    fn test_head_suppress_policy() {
        let builder = ResponseBuilder::new(site).with_head_policy(HeadPolicy::Suppress);
        let response = builder
            .build(&request(b"HEAD / HTTP/1.1\r\nHost: a\r\n\r\n"))
            .unwrap();

        assert!(response.body().is_empty());
        assert_eq!(response.headers().get("Content-Length"), Some("15"));
        assert_eq!(response.to_bytes(), b"HTTP/1.1 200 OK\r\nContent-Length: 15\r\n\r\n");
    }

    #[test]
    fn test_suppress_policy_leaves_get_alone() {
        let builder = ResponseBuilder::new(site).with_head_policy(HeadPolicy::Suppress);
        let response = builder
            .build(&request(b"GET / HTTP/1.1\r\nHost: a\r\n\r\n"))
            .unwrap();

        assert_eq!(response.body(), b"Hello from test");
    }

    #[test]
    fn test_head_not_found_is_unaffected_by_policy() {
        let builder = ResponseBuilder::new(site).with_head_policy(HeadPolicy::Suppress);
        let result = builder.build(&request(b"HEAD /missing HTTP/1.1\r\nHost: a\r\n\r\n"));

        assert_eq!(result.unwrap_err(), HttpError::NotFound);
    }
}
