//! County Happiness Index Service - Main Entry Point
//!
//! A read-only statistics service over a fixed dataset mapping zip codes
//! to county happiness indices. On startup it:
//! 1. Loads runtime settings from service.toml and the environment
//! 2. Ingests the JSON seed file into the in-memory record store
//! 3. Serves the query API over HTTP until the process is stopped
//!
//! The dataset is loaded exactly once, before the listener accepts its
//! first request. Every query after that is a lock-free read; nothing
//! mutates the store while the service is up.
//!
//! Usage:
//!   cargo run --release                          # service.toml / defaults
//!   cargo run --release -- --port 8080           # override the port
//!   cargo run --release -- --seed ./data.json    # override the seed file
//!
//! Environment:
//!   HINDEX_BIND_ADDRESS, HINDEX_PORT, HINDEX_SEED_PATH, HINDEX_WORKERS
//!   (a local .env file is honored)

use std::env;
use std::path::Path;
use std::process;
use std::sync::Arc;

use hindex_service::config;
use hindex_service::endpoint::{self, ServiceInfo};
use hindex_service::ingest::seed;
use hindex_service::query::QueryHandler;
use hindex_service::store::RecordStore;

fn main() {
    println!("📊 County Happiness Index Service");
    println!("==================================\n");

    // Parse command-line arguments
    let args: Vec<String> = env::args().collect();
    let mut port_override: Option<u16> = None;
    let mut seed_override: Option<String> = None;
    let mut bind_override: Option<String> = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--port" => {
                if i + 1 < args.len() {
                    match args[i + 1].parse() {
                        Ok(port) => port_override = Some(port),
                        Err(_) => {
                            eprintln!("Error: --port requires a port number, got \"{}\"", args[i + 1]);
                            process::exit(1);
                        }
                    }
                    i += 2;
                } else {
                    eprintln!("Error: --port requires a port number");
                    process::exit(1);
                }
            }
            "--seed" => {
                if i + 1 < args.len() {
                    seed_override = Some(args[i + 1].clone());
                    i += 2;
                } else {
                    eprintln!("Error: --seed requires a file path");
                    process::exit(1);
                }
            }
            "--bind" => {
                if i + 1 < args.len() {
                    bind_override = Some(args[i + 1].clone());
                    i += 2;
                } else {
                    eprintln!("Error: --bind requires an address");
                    process::exit(1);
                }
            }
            _ => {
                eprintln!("Unknown argument: {}", args[i]);
                eprintln!("Usage: {} [--port PORT] [--seed PATH] [--bind ADDRESS]", args[0]);
                process::exit(1);
            }
        }
    }

    // Load configuration; command-line flags win over file and environment
    let mut config = match config::load_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("\n❌ Configuration error: {}\n", e);
            process::exit(1);
        }
    };
    if let Some(port) = port_override {
        config.port = port;
    }
    if let Some(seed_path) = seed_override {
        config.seed_path = seed_path;
    }
    if let Some(bind_address) = bind_override {
        config.bind_address = bind_address;
    }

    // Phase one: load the dataset. The store must be fully populated
    // before the endpoint accepts its first request.
    println!("📥 Loading seed data from {}...", config.seed_path);
    let entries = match seed::load_seed_file(Path::new(&config.seed_path)) {
        Ok(entries) => entries,
        Err(e) => {
            eprintln!("\n❌ Seed load failed: {}\n", e);
            process::exit(1);
        }
    };

    let mut store = RecordStore::new();
    let outcome = store.load(&entries);
    match &outcome.aborted_on {
        None => println!("✓ Loaded {} counties\n", outcome.inserted),
        Some(zip) => println!(
            "✓ Loaded {} counties (stopped at already-present zip {})\n",
            outcome.inserted, zip
        ),
    }

    // Phase two: serve. The store is read-only from here on.
    let handler = QueryHandler::new(Arc::new(store));
    let info = ServiceInfo::starting_now();

    println!("🚀 Starting HTTP endpoint...");
    println!(
        "   Serving {} counties with {} workers",
        handler.count_all(),
        config.workers
    );
    println!("   Press Ctrl+C to stop\n");

    let bind = format!("{}:{}", config.bind_address, config.port);
    if let Err(e) = endpoint::start_endpoint_server(&bind, config.workers, handler, info) {
        eprintln!("\n❌ Endpoint server error: {}\n", e);
        process::exit(1);
    }
}
