//! Stockroom server binary.
//!
//! Initializes logging, installs the interrupt handler, and runs the
//! HTTP server until shutdown.

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    stockroom_core::log();
    stockroom_core::kys();
    stockroom_server::run().await?;
    Ok(())
}
