//! jsonkv Server Binary
//!
//! Starts the TCP server for jsonkv.

use std::sync::Arc;

use clap::Parser;
use jsonkv::network::Server;
use jsonkv::{Config, MemStore, OversizePolicy};
use tracing_subscriber::{fmt, EnvFilter};

/// jsonkv Server
#[derive(Parser, Debug)]
#[command(name = "jsonkv-server")]
#[command(about = "Key-value store speaking framed JSON over TCP")]
#[command(version)]
struct Args {
    /// Listen address (host:port)
    #[arg(short, long, default_value = "127.0.0.1:50000")]
    listen: String,

    /// Maximum concurrent connections
    #[arg(short, long, default_value = "1024")]
    max_connections: usize,

    /// Maximum size of a single frame in bytes
    #[arg(long, default_value = "131072")]
    max_frame_size: usize,

    /// Close connections that send oversized frames instead of truncating
    #[arg(long)]
    reject_oversize: bool,

    /// Log filter used when RUST_LOG is not set
    #[arg(long, default_value = "info,jsonkv=debug")]
    log_level: String,
}

fn main() {
    let args = Args::parse();

    // Initialize tracing/logging
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&args.log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(true)
        .init();

    tracing::info!("jsonkv Server v{}", jsonkv::VERSION);
    tracing::info!("Listen address: {}", args.listen);

    let policy = if args.reject_oversize {
        OversizePolicy::Reject
    } else {
        OversizePolicy::Truncate
    };

    let config = Config::builder()
        .listen_addr(&args.listen)
        .max_connections(args.max_connections)
        .max_frame_size(args.max_frame_size)
        .oversize_policy(policy)
        .build();

    let server = match Server::bind(config, Arc::new(MemStore::new())) {
        Ok(s) => s,
        Err(e) => {
            tracing::error!("Cannot open server socket: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = server.run() {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}
