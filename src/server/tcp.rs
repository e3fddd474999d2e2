//! # Servidor TCP Concurrente
//! src/server/tcp.rs
//!
//! Acepta conexiones y lanza un thread por cada una. Los threads no
//! comparten estado mutable: solo un `Arc` con el builder de respuestas,
//! que es de solo lectura.

use super::connection::{self, ConnectionId};
use crate::config::Config;
use crate::handler::ResponseBuilder;
use crate::resource::DocumentRoot;
use std::io;
use std::net::{SocketAddr, TcpListener, TcpStream};
use std::sync::Arc;
use std::thread;

/// Servidor HTTP/1.1 concurrente
pub struct Server {
    listener: TcpListener,
    builder: Arc<ResponseBuilder<DocumentRoot>>,
}

impl Server {
    /// Hace bind en la dirección configurada
    ///
    /// Con `port = 0` el SO elige un puerto libre (ver [`Server::local_addr`]).
    pub fn bind(config: &Config) -> io::Result<Self> {
        let listener = TcpListener::bind(config.address())?;
        let builder = ResponseBuilder::new(DocumentRoot::new(&config.document_root))
            .with_head_policy(config.head_policy);

        Ok(Self {
            listener,
            builder: Arc::new(builder),
        })
    }

    /// Dirección real en la que escucha
    pub fn local_addr(&self) -> io::Result<SocketAddr> {
        self.listener.local_addr()
    }

    /// Loop de accept. Bloquea el thread actual indefinidamente.
    pub fn run(self) -> io::Result<()> {
        tracing::info!(address = %self.local_addr()?, "servidor escuchando (un thread por conexión)");

        for stream in self.listener.incoming() {
            match stream {
                Ok(stream) => self.dispatch(stream),
                Err(e) => tracing::error!(error = %e, "error al aceptar conexión"),
            }
        }

        Ok(())
    }

    fn dispatch(&self, stream: TcpStream) {
        let builder = Arc::clone(&self.builder);
        let id = ConnectionId::next();
        let peer = stream
            .peer_addr()
            .map(|addr| addr.to_string())
            .unwrap_or_else(|_| "unknown".to_string());

        let spawned = thread::Builder::new()
            .name(id.to_string())
            .spawn(move || {
                let span = tracing::info_span!("connection", id = id.as_u64(), peer = %peer);
                let _enter = span.enter();

                tracing::debug!("conexión aceptada");
                let summary = connection::serve(stream, &*builder);
                tracing::debug!(
                    responses = summary.responses,
                    reason = ?summary.reason,
                    "conexión cerrada"
                );
            });

        if let Err(e) = spawned {
            tracing::error!(connection = %id, error = %e, "no se pudo lanzar el thread");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::io::{Read, Write};
    use std::net::Shutdown;
    use std::time::Duration;

    /// Levanta un servidor en un puerto efímero sirviendo `root`
    fn spawn_server(root: &std::path::Path) -> SocketAddr {
        let config = Config {
            port: 0,
            host: "127.0.0.1".to_string(),
            document_root: root.to_path_buf(),
            ..Config::default()
        };
        let server = Server::bind(&config).expect("bind");
        let addr = server.local_addr().unwrap();
        thread::spawn(move || server.run());
        addr
    }

    fn connect(addr: SocketAddr) -> TcpStream {
        let stream = TcpStream::connect(addr).unwrap();
        stream.set_read_timeout(Some(Duration::from_secs(5))).unwrap();
        stream
    }

    #[test]
    fn test_serves_file_and_closes_on_request() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("hello.txt"), "Hello from test").unwrap();
        let addr = spawn_server(dir.path());

        let mut client = connect(addr);
        client
            .write_all(b"GET /hello.txt HTTP/1.1\r\nHost: localhost\r\nConnection: close\r\n\r\n")
            .unwrap();

        let mut buf = Vec::new();
        client.read_to_end(&mut buf).unwrap();

        assert_eq!(buf, b"HTTP/1.1 200 OK\r\nContent-Length: 15\r\n\r\nHello from test");
    }

    #[test]
    fn test_parse_error_over_socket() {
        let dir = tempfile::tempdir().unwrap();
        let addr = spawn_server(dir.path());

        // Bytes no-HTTP para disparar el error de parseo
        let mut client = connect(addr);
        client.write_all(b"\x00\x01\x02\x03garbage\r\n").unwrap();

        let mut buf = Vec::new();
        client.read_to_end(&mut buf).unwrap();

        assert_eq!(buf, b"HTTP/1.1 400 Bad Request\r\nContent-Length: 0\r\n\r\n");
    }

    #[test]
    fn test_peer_closed_immediately() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("index.html"), "ok").unwrap();
        let addr = spawn_server(dir.path());

        // Cliente que conecta y cierra sin mandar datos
        drop(connect(addr));

        // El servidor sigue aceptando conexiones
        let mut client = connect(addr);
        client
            .write_all(b"GET / HTTP/1.1\r\nHost: localhost\r\nConnection: close\r\n\r\n")
            .unwrap();

        let mut buf = Vec::new();
        client.read_to_end(&mut buf).unwrap();
        assert!(buf.ends_with(b"\r\n\r\nok"));
    }

    #[test]
    fn test_idle_client_does_not_block_others() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("index.html"), "fast").unwrap();
        let addr = spawn_server(dir.path());

        // Este cliente manda media request line y se queda esperando
        let mut slow = connect(addr);
        slow.write_all(b"GET / HT").unwrap();

        let mut fast = connect(addr);
        fast.write_all(b"GET / HTTP/1.1\r\nHost: localhost\r\nConnection: close\r\n\r\n")
            .unwrap();

        let mut buf = Vec::new();
        fast.read_to_end(&mut buf).unwrap();
        assert!(buf.ends_with(b"\r\n\r\nfast"));

        // Al cerrar, la línea incompleta es una falla de transporte: sin respuesta
        slow.shutdown(Shutdown::Write).unwrap();
        let mut rest = Vec::new();
        slow.read_to_end(&mut rest).unwrap();
        assert!(rest.is_empty());
    }
}
