use crate::application::server::{bind, serve};
use crate::config::Settings;
use crate::http::MiddlewareStack;
use crate::infrastructure::log_messages::application as messages;
use crate::source::{self, EventStreamSource, StreamConnections};
use crate::Result;
use axum::Router;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio_util::sync::CancellationToken;
use tracing::{info, instrument};

/// The event source HTTP server
pub struct EventServer {
    listener: TcpListener,
    router: Router,
    shutdown: CancellationToken,
    connections: StreamConnections,
}

impl EventServer {
    #[instrument(skip(settings), fields(address = %settings.server.bind_address()))]
    pub async fn build(settings: &Settings) -> Result<Self> {
        info!(
            tick_interval_ms = settings.server.tick_interval_ms,
            "{}",
            messages::STARTING_EVENT_SERVER
        );

        let source = Arc::new(EventStreamSource::new(settings.server.tick_interval()));
        let shutdown = CancellationToken::new();
        let connections = StreamConnections::new();
        let routes = source::router(source, shutdown.clone(), connections.clone());
        let router = MiddlewareStack::from_settings(&settings.logging).apply_to_router(routes);
        let listener = bind(&settings.server.bind_address()).await?;

        Ok(Self {
            listener,
            router,
            shutdown,
            connections,
        })
    }

    pub fn local_addr(&self) -> Result<SocketAddr> {
        Ok(self.listener.local_addr()?)
    }

    /// Event streams currently open
    pub fn active_streams(&self) -> StreamConnections {
        self.connections.clone()
    }

    /// Cancelling this token ends open streams and stops the server
    pub fn shutdown_token(&self) -> CancellationToken {
        self.shutdown.clone()
    }

    pub async fn run(self) -> Result<()> {
        serve(self.listener, self.router, self.shutdown).await
    }
}
