//! TCP Server
//!
//! Accepts connections and hands each one to its own handler thread.

use std::net::{SocketAddr, TcpListener, TcpStream};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;
use std::thread;

use crate::config::Config;
use crate::dispatch::Dispatcher;
use crate::error::Result;
use crate::storage::Storage;

use super::Connection;

/// TCP server for jsonkv
pub struct Server {
    config: Config,
    dispatcher: Dispatcher,
    listener: TcpListener,
    local_addr: SocketAddr,
    shutdown: Arc<AtomicBool>,
    active: Arc<AtomicUsize>,
}

impl Server {
    /// Validate the config and bind the listening socket
    pub fn bind(config: Config, storage: Arc<dyn Storage>) -> Result<Self> {
        config.validate()?;

        let listener = TcpListener::bind(&config.listen_addr)?;
        let local_addr = listener.local_addr()?;
        tracing::info!("Server listening on {}", local_addr);

        Ok(Self {
            config,
            dispatcher: Dispatcher::new(storage),
            listener,
            local_addr,
            shutdown: Arc::new(AtomicBool::new(false)),
            active: Arc::new(AtomicUsize::new(0)),
        })
    }

    /// Address the server is actually bound to
    pub fn local_addr(&self) -> SocketAddr {
        self.local_addr
    }

    /// Number of connections currently being served
    pub fn active_connections(&self) -> usize {
        self.active.load(Ordering::Acquire)
    }

    /// Handle that can stop the accept loop from another thread
    pub fn shutdown_handle(&self) -> ShutdownHandle {
        ShutdownHandle {
            flag: Arc::clone(&self.shutdown),
            addr: self.local_addr,
        }
    }

    /// Run the accept loop (blocking)
    ///
    /// Returns once a [`ShutdownHandle`] fires. Connections already being
    /// served keep running until their peers disconnect.
    pub fn run(&self) -> Result<()> {
        for stream in self.listener.incoming() {
            if self.shutdown.load(Ordering::Acquire) {
                break;
            }

            match stream {
                Ok(stream) => self.accept(stream),
                Err(e) => tracing::error!("Unable to establish connection: {}", e),
            }
        }

        tracing::info!("Server stopped");
        Ok(())
    }

    fn accept(&self, stream: TcpStream) {
        let peer = stream
            .peer_addr()
            .map(|a| a.to_string())
            .unwrap_or_else(|_| "unknown".to_string());

        if self.active.load(Ordering::Acquire) >= self.config.max_connections {
            tracing::warn!(
                "Rejecting {}: {} connections already open",
                peer,
                self.config.max_connections
            );
            return;
        }

        let connection = match Connection::new(stream, self.dispatcher.clone(), &self.config) {
            Ok(c) => c,
            Err(e) => {
                tracing::warn!("Failed to set up connection from {}: {}", peer, e);
                return;
            }
        };

        let guard = ActiveGuard::new(Arc::clone(&self.active));
        let spawned = thread::Builder::new()
            .name(format!("conn-{}", peer))
            .spawn(move || {
                let _guard = guard;
                if let Err(e) = connection.serve() {
                    tracing::debug!("Connection ended with error: {}", e);
                }
            });

        match spawned {
            Ok(_) => tracing::info!("Connected to {}", peer),
            Err(e) => tracing::error!("Failed to spawn handler for {}: {}", peer, e),
        }
    }
}

/// Stops a running [`Server`]
#[derive(Debug, Clone)]
pub struct ShutdownHandle {
    flag: Arc<AtomicBool>,
    addr: SocketAddr,
}

impl ShutdownHandle {
    /// Stop accepting connections
    pub fn shutdown(&self) {
        if self.flag.swap(true, Ordering::AcqRel) {
            return;
        }
        // Wake the blocking accept so the loop observes the flag.
        if let Err(e) = TcpStream::connect(self.addr) {
            tracing::debug!("Wake-up connect to {} failed: {}", self.addr, e);
        }
    }

    /// Whether shutdown has been requested
    pub fn is_shutdown(&self) -> bool {
        self.flag.load(Ordering::Acquire)
    }
}

/// Counts a connection as active for as long as it lives
struct ActiveGuard(Arc<AtomicUsize>);

impl ActiveGuard {
    fn new(counter: Arc<AtomicUsize>) -> Self {
        counter.fetch_add(1, Ordering::AcqRel);
        Self(counter)
    }
}

impl Drop for ActiveGuard {
    fn drop(&mut self) {
        self.0.fetch_sub(1, Ordering::AcqRel);
    }
}

