//! jsonkv CLI Client
//!
//! Command-line interface for interacting with jsonkv.

use clap::{Parser, Subcommand};
use jsonkv::KvClient;

/// jsonkv CLI
#[derive(Parser, Debug)]
#[command(name = "jsonkv-cli")]
#[command(about = "CLI for the jsonkv key-value store")]
struct Args {
    /// Server address
    #[arg(short, long, default_value = "127.0.0.1:50000")]
    server: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Get a value by key
    Get {
        /// The key to get
        key: String,
    },

    /// Set a key-value pair
    Put {
        /// The key to set
        key: String,

        /// The value to set
        value: String,
    },

    /// Delete a key
    Del {
        /// The key to delete
        key: String,
    },
}

fn main() {
    let args = Args::parse();

    let mut client = match KvClient::connect(&args.server) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to connect to {}: {}", args.server, e);
            std::process::exit(1);
        }
    };

    let response = match &args.command {
        Commands::Get { key } => client.get(key),
        Commands::Put { key, value } => client.put(key, value),
        Commands::Del { key } => client.delete(key),
    };

    match response {
        Ok(message) => println!("{} {} {}", message.status, message.key, message.value),
        Err(e) => {
            eprintln!("Request failed: {}", e);
            std::process::exit(1);
        }
    }

    let _ = client.disconnect();
}
