//! `cga_ik`: answers one JSON kinematics request.
//!
//! Reads the request from the file given as the first argument, or from stdin,
//! and writes the JSON response to stdout. Logs go to stderr, filtered by
//! `RUST_LOG` (default `info`).

use std::fs::File;
use std::io::{self, BufReader};
use std::process::ExitCode;

use cga_kinematics::{run_request, KinematicsError, Request};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn read_request() -> Result<Request, KinematicsError> {
    match std::env::args().nth(1) {
        Some(path) => {
            info!("Reading request from {}", path);
            Request::from_reader(BufReader::new(File::open(&path)?))
        }
        None => Request::from_reader(io::stdin().lock()),
    }
}

fn run() -> Result<(), KinematicsError> {
    let request = read_request()?;
    let response = run_request(&request)?;
    println!("{}", serde_json::to_string_pretty(&response)?);
    Ok(())
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(io::stderr)
        .init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
