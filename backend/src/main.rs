use std::sync::Arc;
use anyhow::Context;
use tokio::signal;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};
use events_server::application::ports::{EventRepository, RegistrationRepository, UserRepository};
use events_server::infrastructure::config::{DatabaseSettings, Settings};
use events_server::infrastructure::driven::persistence::{
    self, InMemoryStore, PostgresEventRepository, PostgresRegistrationRepository,
    PostgresUserRepository,
};
use events_server::infrastructure::driven::Pbkdf2PasswordHasher;
use events_server::infrastructure::driving::router;
use events_server::infrastructure::telemetry::init_tracing;
use events_server::infrastructure::AppState;

type Stores = (
    Arc<dyn UserRepository>,
    Arc<dyn EventRepository>,
    Arc<dyn RegistrationRepository>,
);

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let settings = Settings::load().context("loading configuration")?;
    init_tracing(&settings.log)?;

    info!(
        host = %settings.server.host,
        port = settings.server.port,
        persistent = settings.database.url.is_some(),
        "configuration loaded"
    );

    let (users, events, registrations) = open_stores(&settings.database).await?;
    let state = AppState::new(
        users,
        events,
        registrations,
        Arc::new(Pbkdf2PasswordHasher::new()),
        &settings.security,
    );
    let app = router(state, settings.server.request_timeout());

    let addr = settings.server.bind_address()?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("binding {addr}"))?;
    info!(%addr, "listening");

    let shutdown = CancellationToken::new();
    tokio::spawn(watch_signals(shutdown.clone()));

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown.cancelled_owned())
        .await
        .context("serving http")?;

    info!("server stopped");
    Ok(())
}

async fn open_stores(database: &DatabaseSettings) -> anyhow::Result<Stores> {
    let Some(url) = database.url.as_deref() else {
        warn!("no database url configured, data lives in memory only");
        let store = Arc::new(InMemoryStore::new());
        let users: Arc<dyn UserRepository> = store.clone();
        let events: Arc<dyn EventRepository> = store.clone();
        let registrations: Arc<dyn RegistrationRepository> = store;
        return Ok((users, events, registrations));
    };

    let pool = persistence::connect(url, database)
        .await
        .context("connecting to database")?;
    if database.run_migrations {
        persistence::migrate(&pool).await.context("running migrations")?;
        info!("migrations applied");
    }

    let users: Arc<dyn UserRepository> = Arc::new(PostgresUserRepository::new(pool.clone()));
    let events: Arc<dyn EventRepository> = Arc::new(PostgresEventRepository::new(pool.clone()));
    let registrations: Arc<dyn RegistrationRepository> =
        Arc::new(PostgresRegistrationRepository::new(pool));
    Ok((users, events, registrations))
}

async fn watch_signals(shutdown: CancellationToken) {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            warn!(error = %e, "ctrl-c handler unavailable");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                warn!(error = %e, "SIGTERM handler unavailable");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("ctrl-c received, shutting down"),
        _ = terminate => info!("SIGTERM received, shutting down"),
    }
    shutdown.cancel();
}
