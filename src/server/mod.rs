//! # Módulo del Servidor HTTP
//! src/server/mod.rs
//!
//! Este módulo implementa el servidor TCP que:
//! 1. Escucha en un puerto
//! 2. Acepta conexiones entrantes (un thread por conexión)
//! 3. Lee y parsea requests HTTP, uno a la vez por conexión
//! 4. Genera y envía responses HTTP
//! 5. Decide si la conexión sigue abierta (keep-alive) o se cierra

pub mod connection;
pub mod tcp;

// Re-exportar para facilitar el uso
pub use connection::{serve, CloseReason, ConnectionId, ConnectionSummary};
pub use tcp::Server;
