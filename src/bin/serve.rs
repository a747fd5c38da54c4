//! Advisor Server Binary
//!
//! Runs the HTTP server for equity estimation and action advice.

use railbird::*;

#[tokio::main]
async fn main() {
    log();
    api::Server::run().await.unwrap();
}
