use crate::application::server::{bind, serve};
use crate::config::{Settings, StorageBackend};
use crate::domain::CorrelationId;
use crate::greeting::{self, GreetingService};
use crate::http::headers::paths;
use crate::http::MiddlewareStack;
use crate::infrastructure::log_messages::{application as messages, database as db_messages};
use crate::infrastructure::Database;
use crate::reservation::{
    self, InMemoryReservationRepository, PgReservationRepository, ReservationRepository,
    ReservationService, SampleDataInitializer,
};
use crate::Result;
use axum::{extract::State, routing::get, Router};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio_util::sync::CancellationToken;
use tracing::{info, instrument};

/// Reservation REST endpoints plus the greeting WebSocket
pub struct ReservationServer {
    listener: TcpListener,
    router: Router,
    shutdown: CancellationToken,
    service: ReservationService,
}

impl ReservationServer {
    /// Connect the configured storage, seed it and bind the listener
    #[instrument(skip(settings), fields(address = %settings.reservations.bind_address()))]
    pub async fn build(settings: &Settings) -> Result<Self> {
        info!(
            storage = ?settings.reservations.storage,
            "{}",
            messages::STARTING_RESERVATION_SERVER
        );

        match settings.reservations.storage {
            StorageBackend::Postgres => {
                let database =
                    Database::connect(&settings.database_url(), &settings.database).await?;
                database.migrate().await?;
                let repository = Arc::new(PgReservationRepository::new(database.pool().clone()));
                Self::assemble(settings, repository, Some(database)).await
            }
            StorageBackend::Memory => {
                info!("{}", db_messages::USING_IN_MEMORY);
                Self::with_repository(settings, Arc::new(InMemoryReservationRepository::new()))
                    .await
            }
        }
    }

    /// Build on an already constructed repository
    pub async fn with_repository(
        settings: &Settings,
        repository: Arc<dyn ReservationRepository>,
    ) -> Result<Self> {
        Self::assemble(settings, repository, None).await
    }

    async fn assemble(
        settings: &Settings,
        repository: Arc<dyn ReservationRepository>,
        database: Option<Database>,
    ) -> Result<Self> {
        let service = ReservationService::new(repository);
        SampleDataInitializer::new(service.clone())
            .run(CorrelationId::generate())
            .await?;

        let shutdown = CancellationToken::new();
        let greetings = Arc::new(GreetingService::new(
            settings.reservations.greeting_interval(),
        ));

        let routes = reservation::router(service.clone())
            .merge(greeting::router(greetings, shutdown.clone()))
            .merge(health_router(database));
        let router = MiddlewareStack::from_settings(&settings.logging).apply_to_router(routes);
        let listener = bind(&settings.reservations.bind_address()).await?;

        Ok(Self {
            listener,
            router,
            shutdown,
            service,
        })
    }

    pub fn local_addr(&self) -> Result<SocketAddr> {
        Ok(self.listener.local_addr()?)
    }

    pub fn service(&self) -> &ReservationService {
        &self.service
    }

    /// Cancelling this token closes greeting sockets and stops the server
    pub fn shutdown_token(&self) -> CancellationToken {
        self.shutdown.clone()
    }

    pub async fn run(self) -> Result<()> {
        serve(self.listener, self.router, self.shutdown).await
    }
}

fn health_router(database: Option<Database>) -> Router {
    Router::new()
        .route(paths::HEALTH, get(health))
        .with_state(database)
}

async fn health(State(database): State<Option<Database>>) -> Result<&'static str> {
    if let Some(database) = &database {
        database.health_check().await?;
    }
    Ok("OK")
}
