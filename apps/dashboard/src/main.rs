//! # Shelf Dashboard Entry Point
//!
//! The setup lives in `lib.rs`; this only maps its result to an exit code.

use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    match shelf_dashboard::run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("shelf-dashboard: {}", e);
            ExitCode::FAILURE
        }
    }
}
