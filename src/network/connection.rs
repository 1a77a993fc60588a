//! Connection Handler
//!
//! Handles individual client connections.
//!
//! ## Lifecycle
//! ```text
//!   accept ──► OPEN ──(frame, dispatch, reply)──► OPEN
//!                │
//!                └──(EOF | bad frame | bad message | I/O error)──► CLOSED
//! ```
//! Nothing is retried. Any failure ends the connection without a reply and
//! the client is expected to reconnect.

use std::io::{BufWriter, Read, Write};
use std::net::{Shutdown, TcpStream};
use std::time::Duration;

use crate::config::Config;
use crate::dispatch::Dispatcher;
use crate::error::Result;
use crate::protocol::{read_message, write_message, FrameReader};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ConnectionState {
    Open,
    Closed,
}

/// Handles a single client connection
pub struct Connection {
    /// Framed input side
    reader: FrameReader<TcpStream>,

    /// Buffered output side
    writer: BufWriter<TcpStream>,

    /// Routes requests to storage
    dispatcher: Dispatcher,

    /// Peer address for logging
    peer_addr: String,

    state: ConnectionState,
}

impl Connection {
    /// Create a new connection handler
    ///
    /// Sets up framed/buffered I/O and configures timeouts
    pub fn new(stream: TcpStream, dispatcher: Dispatcher, config: &Config) -> Result<Self> {
        let peer_addr = stream
            .peer_addr()
            .map(|a| a.to_string())
            .unwrap_or_else(|_| "unknown".to_string());

        // Disable Nagle's algorithm for low latency
        stream.set_nodelay(true)?;

        if config.read_timeout_ms > 0 {
            stream.set_read_timeout(Some(Duration::from_millis(config.read_timeout_ms)))?;
        }
        if config.write_timeout_ms > 0 {
            stream.set_write_timeout(Some(Duration::from_millis(config.write_timeout_ms)))?;
        }

        let read_stream = stream.try_clone()?;
        let write_stream = stream;

        Ok(Self {
            reader: FrameReader::with_config(read_stream, config),
            writer: BufWriter::new(write_stream),
            dispatcher,
            peer_addr,
            state: ConnectionState::Open,
        })
    }

    /// Serve the connection until it ends, then release the socket
    ///
    /// Returns `Ok(())` when the peer closed the stream and an error for
    /// protocol violations, storage failures and transport errors.
    pub fn serve(mut self) -> Result<()> {
        tracing::debug!("Connection established from {}", self.peer_addr);

        let result = exchange(
            &mut self.reader,
            &mut self.writer,
            &self.dispatcher,
            &self.peer_addr,
        );

        match &result {
            Ok(()) => tracing::debug!("Client {} disconnected", self.peer_addr),
            Err(e) if e.is_disconnect() => {
                tracing::debug!("Client {} dropped the connection: {}", self.peer_addr, e)
            }
            Err(e) => tracing::warn!("Closing connection to {}: {}", self.peer_addr, e),
        }

        self.close();

        match result {
            Err(e) if e.is_disconnect() => Ok(()),
            other => other,
        }
    }

    /// Tear down both socket halves, logging but not propagating failures
    fn close(&mut self) {
        if self.state == ConnectionState::Closed {
            return;
        }
        self.state = ConnectionState::Closed;

        if let Err(e) = self.reader.get_ref().shutdown(Shutdown::Read) {
            tracing::debug!("Failed to close input of {}: {}", self.peer_addr, e);
        }
        if let Err(e) = self.writer.get_ref().shutdown(Shutdown::Write) {
            tracing::debug!("Failed to close output of {}: {}", self.peer_addr, e);
        }
    }

    /// Get the peer address string
    pub fn peer_addr(&self) -> &str {
        &self.peer_addr
    }
}

/// Request/response loop over any framed input and output
///
/// Strictly one response per request, in arrival order. Returns once the
/// input ends cleanly or on the first error. `peer` only labels log lines.
pub fn exchange<R: Read, W: Write>(
    reader: &mut FrameReader<R>,
    writer: &mut W,
    dispatcher: &Dispatcher,
    peer: &str,
) -> Result<()> {
    while let Some(request) = read_message(reader)? {
        tracing::trace!("Received request from {}: {:?}", peer, request);

        let response = dispatcher.dispatch(&request)?;
        write_message(writer, &response)?;

        tracing::trace!("Sent response to {}: {:?}", peer, response);
    }
    Ok(())
}
