//! # Loop de conexión
//! src/server/connection.rs
//!
//! Atiende una conexión aceptada de principio a fin como una máquina de
//! estados:
//!
//! ```text
//!                 ┌──────────────────────────────┐
//!                 ▼                              │ keep-alive
//!         AwaitingRequest ──parse──▶ Responding ─┘
//!                 │                      │
//!      EOF / falla de transporte         │ error clasificado, Connection: close,
//!                 │                      │ falla al escribir
//!                 ▼                      ▼
//!               Closed ◀─────────────────┘
//! ```
//!
//! Un solo request en vuelo por conexión: el siguiente recién se parsea
//! cuando la respuesta anterior se escribió completa.

use crate::handler::ResponseBuilder;
use crate::http::{write_response, HttpError, Request};
use crate::resource::Resolve;
use std::io::{BufReader, Read, Write};
use std::sync::atomic::{AtomicU64, Ordering};

/// Contador global de conexiones; solo importa que los ids sean únicos
static CONNECTION_ID_COUNTER: AtomicU64 = AtomicU64::new(1);

/// Identificador único de una conexión (para los logs)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ConnectionId(u64);

impl ConnectionId {
    /// Genera el siguiente id
    pub fn next() -> Self {
        Self(CONNECTION_ID_COUNTER.fetch_add(1, Ordering::Relaxed))
    }

    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for ConnectionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "conn-{}", self.0)
    }
}

/// Por qué terminó una conexión
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseReason {
    /// El peer cerró entre dos requests
    EndOfStream,

    /// El cliente mandó `Connection: close`
    ClientRequested,

    /// Se respondió un error clasificado (siempre cierra)
    ErrorResponse(HttpError),

    /// Falla de lectura o escritura; no se escribió nada más
    TransportFault,
}

/// Resultado de atender una conexión completa
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConnectionSummary {
    /// Respuestas escritas por completo
    pub responses: u64,

    pub reason: CloseReason,
}

/// Lo que se va a responder en el ciclo actual
#[derive(Debug)]
enum Exchange {
    Parsed(Request),
    Rejected(HttpError),
}

#[derive(Debug)]
enum State {
    AwaitingRequest,
    Responding(Exchange),
    Closed(CloseReason),
}

/// Atiende `stream` hasta que la conexión se cierra
///
/// El stream se consume: se libera (drop) en cualquier camino de salida.
pub fn serve<S, R>(stream: S, builder: &ResponseBuilder<R>) -> ConnectionSummary
where
    S: Read + Write,
    R: Resolve,
{
    // Un solo buffer por conexión: lo que sobra de un request es el inicio del siguiente
    let mut reader = BufReader::new(stream);
    let mut responses = 0;
    let mut state = State::AwaitingRequest;

    loop {
        state = match state {
            State::AwaitingRequest => await_request(&mut reader),
            State::Responding(exchange) => {
                let next = respond(reader.get_mut(), builder, exchange);
                if !matches!(next, State::Closed(CloseReason::TransportFault)) {
                    responses += 1;
                }
                next
            }
            State::Closed(reason) => return ConnectionSummary { responses, reason },
        };
    }
}

fn await_request<S: Read>(reader: &mut BufReader<S>) -> State {
    match Request::parse(reader) {
        Ok(request) => {
            tracing::info!(
                method = %request.method(),
                target_path = request.target(),
                version = request.version(),
                "request"
            );
            State::Responding(Exchange::Parsed(request))
        }
        Err(err) => match err.classify() {
            Some(error) => {
                tracing::warn!(error = %err, "request rechazado");
                State::Responding(Exchange::Rejected(error))
            }
            None if err.is_end_of_stream() => State::Closed(CloseReason::EndOfStream),
            None => {
                tracing::debug!(error = %err, "falla de transporte leyendo el request");
                State::Closed(CloseReason::TransportFault)
            }
        },
    }
}

fn respond<W, R>(sink: &mut W, builder: &ResponseBuilder<R>, exchange: Exchange) -> State
where
    W: Write,
    R: Resolve,
{
    let (outcome, client_close) = match exchange {
        Exchange::Parsed(request) => (builder.build(&request), request.wants_close()),
        Exchange::Rejected(error) => (Err(error), false),
    };

    if let Err(err) = write_response(sink, outcome.as_ref().map_err(|e| *e)) {
        tracing::warn!(error = %err, "no se pudo escribir la respuesta");
        return State::Closed(CloseReason::TransportFault);
    }

    match outcome {
        Err(error) => {
            tracing::info!(status = %error.status(), "respuesta de error, cerrando conexión");
            State::Closed(CloseReason::ErrorResponse(error))
        }
        Ok(response) => {
            tracing::info!(status = %response.status(), bytes = response.body().len(), "respuesta");
            if client_close {
                State::Closed(CloseReason::ClientRequested)
            } else {
                State::AwaitingRequest
            }
        }
    }
}
