use tokio::net::TcpListener;

use crate::config::ServerConfig;
use crate::router::build_router;
use crate::state::AppState;

/// Bookstand HTTP server.
pub struct BookstandServer {
    state: AppState,
}

impl BookstandServer {
    /// Serve against the filesystem asset store rooted at the configured
    /// uploads directory.
    pub fn open(config: ServerConfig) -> anyhow::Result<Self> {
        Ok(Self {
            state: AppState::open(config)?,
        })
    }

    /// Serve entirely from memory. For tests and demos.
    pub fn in_memory(config: ServerConfig) -> Self {
        Self {
            state: AppState::in_memory(config),
        }
    }

    pub fn config(&self) -> &ServerConfig {
        &self.state.config
    }

    /// Build the router (useful for testing).
    pub fn router(&self) -> axum::Router {
        build_router(self.state.clone())
    }

    /// Start serving requests.
    pub async fn serve(self) -> anyhow::Result<()> {
        let bind_addr = self.state.config.bind_addr;
        let app = self.router();
        let listener = TcpListener::bind(&bind_addr).await?;
        tracing::info!("bookstand server listening on {bind_addr}");
        axum::serve(listener, app).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_construction() {
        let server = BookstandServer::in_memory(ServerConfig::default());
        assert_eq!(server.config().bind_addr, "127.0.0.1:4000".parse().unwrap());
    }

    #[test]
    fn router_builds() {
        let server = BookstandServer::in_memory(ServerConfig::default());
        let _router = server.router();
    }
}
