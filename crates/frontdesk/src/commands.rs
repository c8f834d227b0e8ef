//! CLI command implementations.

use std::path::PathBuf;

use color_eyre::eyre::Result;

/// Start the backend server.
pub async fn serve(host: String, port: u16, dist: Option<PathBuf>) -> Result<()> {
    use frontdesk_server::{Server, ServerConfig};

    tracing::info!("Starting frontdesk server...");

    let addr = format!("{}:{}", host, port).parse()?;
    let config = ServerConfig {
        addr,
        cors: true,
        dist_dir: dist,
    };

    let server = Server::new(config);
    server.run().await?;

    Ok(())
}

/// Display version information.
pub fn version() {
    println!("Frontdesk {}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("Components:");
    println!("  frontdesk-core    - Transform API types and logic");
    println!("  frontdesk-server  - HTTP server and frontend mounting");
}
