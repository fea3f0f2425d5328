//! Kodegen Deployer - contract deployment and bundle configuration tooling.
//!
//! This binary inspects and prepares bundle configurations declared in TOML
//! or in a crate's `[package.metadata.bundle]` table.

use std::process;

#[tokio::main]
async fn main() {
    // Initialize logging
    env_logger::init();

    // Run CLI and get exit code
    let exit_code = match kodegen_deployer::cli::run().await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {}", e);
            1
        }
    };

    process::exit(exit_code);
}
