//! Network Module
//!
//! TCP server and client handling.
//!
//! ## Architecture
//! - Single acceptor thread
//! - One blocking handler thread per connection
//! - Requests routed through the Dispatcher onto shared storage

mod server;
mod connection;

pub use server::{Server, ShutdownHandle};
pub use connection::{exchange, Connection};
