//! Application Startup
//!
//! Wiring of adapters into use cases, application state and server
//! initialization.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use axum::Router;
use sqlx::PgPool;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use crate::application::services::{hash_password, Authenticator, BasicAuthenticator};
use crate::application::use_cases::{
    ChangeDates, ChangeDatesRequest, ChangeSeats, ChangeSeatsRequest, Executable,
    OrganizeConference, OrganizeConferenceRequest, OrganizeConferenceResponse, ReserveSeats,
    ReserveSeatsRequest,
};
use crate::config::{MailerBackend, SeedUser, Settings, StorageBackend};
use crate::domain::{
    BookingRepository, ConferenceRepository, DateGenerator, IdGenerator, Mailer, User,
    UserRepository,
};
use crate::infrastructure::database;
use crate::infrastructure::generators::{CurrentDateGenerator, RandomIdGenerator};
use crate::infrastructure::mailer::{InMemoryMailer, LogMailer};
use crate::infrastructure::repositories::{
    InMemoryBookingRepository, InMemoryConferenceRepository, InMemoryUserRepository,
    PgBookingRepository, PgConferenceRepository, PgUserRepository,
};
use crate::presentation::http::routes;
use crate::presentation::middleware::cors;

/// Repository adapters selected by the storage backend
#[derive(Clone)]
pub struct Repositories {
    pub conferences: Arc<dyn ConferenceRepository>,
    pub bookings: Arc<dyn BookingRepository>,
    pub users: Arc<dyn UserRepository>,
}

impl Repositories {
    /// Process-local repositories, empty at start
    pub fn in_memory() -> Self {
        Self {
            conferences: Arc::new(InMemoryConferenceRepository::new()),
            bookings: Arc::new(InMemoryBookingRepository::new()),
            users: Arc::new(InMemoryUserRepository::new()),
        }
    }

    /// PostgreSQL repositories sharing one pool
    pub fn postgres(pool: PgPool) -> Self {
        Self {
            conferences: Arc::new(PgConferenceRepository::new(pool.clone())),
            bookings: Arc::new(PgBookingRepository::new(pool.clone())),
            users: Arc::new(PgUserRepository::new(pool)),
        }
    }
}

/// Everything the use cases depend on
#[derive(Clone)]
pub struct Dependencies {
    pub repositories: Repositories,
    pub mailer: Arc<dyn Mailer>,
    pub id_generator: Arc<dyn IdGenerator>,
    pub date_generator: Arc<dyn DateGenerator>,
}

impl Dependencies {
    /// Production generators and the mailer selected in settings
    pub fn new(repositories: Repositories, settings: &Settings) -> Self {
        let mailer: Arc<dyn Mailer> = match settings.mailer.backend {
            MailerBackend::Memory => Arc::new(InMemoryMailer::new()),
            MailerBackend::Log => Arc::new(LogMailer),
        };

        Self {
            repositories,
            mailer,
            id_generator: Arc::new(RandomIdGenerator),
            date_generator: Arc::new(CurrentDateGenerator),
        }
    }
}

/// The four business operations, behind their `Executable` contract
#[derive(Clone)]
pub struct UseCases {
    pub organize_conference:
        Arc<dyn Executable<OrganizeConferenceRequest, OrganizeConferenceResponse>>,
    pub reserve_seats: Arc<dyn Executable<ReserveSeatsRequest, ()>>,
    pub change_seats: Arc<dyn Executable<ChangeSeatsRequest, ()>>,
    pub change_dates: Arc<dyn Executable<ChangeDatesRequest, ()>>,
}

impl UseCases {
    pub fn new(deps: &Dependencies, settings: &Settings) -> Self {
        let repos = &deps.repositories;

        let organize_conference = OrganizeConference::new(
            repos.conferences.clone(),
            deps.id_generator.clone(),
            deps.date_generator.clone(),
        );

        let reserve_seats = ReserveSeats::new(
            repos.bookings.clone(),
            repos.users.clone(),
            deps.mailer.clone(),
        )
        .with_notifications(settings.notifications.on_booking)
        .with_sender(settings.mailer.from.clone());

        let change_seats = ChangeSeats::new(repos.conferences.clone(), repos.bookings.clone());

        let change_dates = ChangeDates::new(
            repos.conferences.clone(),
            deps.date_generator.clone(),
            repos.bookings.clone(),
            deps.mailer.clone(),
            repos.users.clone(),
        )
        .with_sender(settings.mailer.from.clone());

        Self {
            organize_conference: Arc::new(organize_conference),
            reserve_seats: Arc::new(reserve_seats),
            change_seats: Arc::new(change_seats),
            change_dates: Arc::new(change_dates),
        }
    }
}

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub conferences: Arc<dyn ConferenceRepository>,
    pub use_cases: UseCases,
    pub authenticator: Arc<dyn Authenticator>,
    pub settings: Arc<Settings>,
}

impl AppState {
    pub fn new(settings: Settings, deps: Dependencies) -> Self {
        let use_cases = UseCases::new(&deps, &settings);
        let authenticator = Arc::new(BasicAuthenticator::new(deps.repositories.users.clone()));

        Self {
            conferences: deps.repositories.conferences,
            use_cases,
            authenticator,
            settings: Arc::new(settings),
        }
    }
}

/// Build the HTTP router with tracing and CORS layers
pub fn build_router(state: AppState) -> Router {
    let cors = cors::create_cors_layer(&state.settings.cors);

    routes::create_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}

/// Insert the configured accounts that do not exist yet
pub async fn seed_users(users: &dyn UserRepository, seeds: &[SeedUser]) -> Result<()> {
    for seed in seeds {
        if users
            .find_by_email_address(&seed.email_address)
            .await?
            .is_some()
        {
            tracing::debug!(email_address = %seed.email_address, "Seed user already present");
            continue;
        }

        let password = hash_password(&seed.password)?;
        users
            .create(&User::new(
                seed.id.clone(),
                seed.email_address.clone(),
                password,
            ))
            .await?;
        tracing::info!(user_id = %seed.id, "Seed user created");
    }

    Ok(())
}

/// Application instance
pub struct Application {
    listener: TcpListener,
    router: Router,
}

impl Application {
    /// Build the application from settings
    pub async fn build(settings: Settings) -> Result<Self> {
        let repositories = match settings.storage.backend {
            StorageBackend::Memory => {
                tracing::info!("Using in-memory storage");
                Repositories::in_memory()
            }
            StorageBackend::Postgres => {
                let pool = database::create_pool(&settings.database)
                    .await
                    .context("failed to connect to the database")?;
                tracing::info!("Database connection pool created");

                if settings.database.run_migrations {
                    database::run_migrations(&pool).await?;
                    tracing::info!("Database migrations applied");
                }

                Repositories::postgres(pool)
            }
        };

        seed_users(repositories.users.as_ref(), &settings.seed.users).await?;

        let addr = settings.server_addr();
        let deps = Dependencies::new(repositories, &settings);
        let router = build_router(AppState::new(settings, deps));

        let listener = TcpListener::bind(&addr)
            .await
            .with_context(|| format!("failed to bind {}", addr))?;
        tracing::info!("Listening on {}", addr);

        Ok(Self { listener, router })
    }

    /// Run the server until stopped
    pub async fn run_until_stopped(self) -> Result<()> {
        axum::serve(self.listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;
        Ok(())
    }

    /// Get the bound address
    pub fn local_addr(&self) -> std::io::Result<SocketAddr> {
        self.listener.local_addr()
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
