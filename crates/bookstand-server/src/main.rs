use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

use bookstand_server::{BookstandServer, ServerConfig};

#[derive(Parser)]
#[command(
    name = "bookstand-server",
    about = "Bookstand — book marketplace HTTP server",
    version,
)]
struct Args {
    /// Address to listen on
    #[arg(long, default_value = "127.0.0.1:4000")]
    bind: SocketAddr,

    /// Root directory for uploaded assets
    #[arg(long, default_value = "uploads")]
    uploads_dir: PathBuf,

    /// Browser origin allowed to send credentialed requests
    #[arg(long)]
    cors_origin: Option<String>,

    /// Session cookie name
    #[arg(long, default_value = "bookstand.sid")]
    cookie_name: String,

    /// Absolute session lifetime in seconds
    #[arg(long, default_value_t = 86_400)]
    session_ttl_secs: u64,

    /// Maximum request body size in bytes
    #[arg(long, default_value_t = 10 * 1024 * 1024)]
    max_body_bytes: usize,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();
    let args = Args::parse();

    let config = ServerConfig {
        bind_addr: args.bind,
        uploads_root: args.uploads_dir,
        cors_origin: args.cors_origin,
        cookie_name: args.cookie_name,
        session_ttl: Duration::from_secs(args.session_ttl_secs),
        max_body_bytes: args.max_body_bytes,
    };

    let server = BookstandServer::open(config)?;
    server.serve().await
}
