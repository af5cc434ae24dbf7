use dotenvy::dotenv;
use anyhow::Context;
use axum::{
    routing::{get, post},
    Router,
};
use axum::http::HeaderValue;
use diesel::prelude::*;
use diesel::r2d2::{self, ConnectionManager};
use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};
use tower_http::cors::{CorsLayer, Any};
use tower_http::trace::{TraceLayer, DefaultMakeSpan, DefaultOnResponse};
use tracing::Level;
use tracing_subscriber::EnvFilter;
use std::sync::Arc;

mod handlers {
    pub mod contact_handlers;
}
mod api {
    pub mod google_forms;
}
mod config {
    pub mod contact_options;
    pub mod google_forms;
    pub mod server;
}
mod models {
    pub mod contact_models;
}
mod repositories {
    pub mod contact_repository;
}
mod utils {
    pub mod lead_intake;
    pub mod lead_validation;
}
mod schema;

use api::google_forms::GoogleFormsClient;
use config::google_forms::{GOOGLE_FORM_ACTION_URL, GOOGLE_FORM_FIELDS};
use config::server::ServerConfig;
use handlers::contact_handlers;
use repositories::contact_repository::ContactRepository;
use utils::lead_intake::LeadIntake;

type DbPool = r2d2::Pool<ConnectionManager<SqliteConnection>>;

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

async fn health_check() -> &'static str {
    "OK"
}

pub struct AppState {
    lead_intake: LeadIntake,
}

pub fn app(state: Arc<AppState>, frontend_url: Option<&str>) -> Router {
    let cors = CorsLayer::new()
        .allow_methods([
            axum::http::Method::GET,
            axum::http::Method::POST,
            axum::http::Method::OPTIONS,
        ])
        .allow_headers([axum::http::header::CONTENT_TYPE])
        .expose_headers([axum::http::header::CONTENT_TYPE]);
    let cors = match frontend_url.and_then(|url| HeaderValue::from_str(url).ok()) {
        Some(origin) => cors.allow_origin(origin),
        None => cors.allow_origin(Any),
    };

    Router::new()
        .route("/api/health", get(health_check))
        .route("/api/contact/options", get(contact_handlers::get_contact_options))
        .route("/api/contact", post(contact_handlers::submit_contact))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO))
        )
        .layer(cors)
        .with_state(state)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    let config = ServerConfig::from_env()?;

    let _guard = config.sentry_dsn.as_deref().map(|dsn| {
        sentry::init((dsn, sentry::ClientOptions {
            release: sentry::release_name!(),
            ..Default::default()
        }))
    });

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // Set up database connection pool
    let manager = ConnectionManager::<SqliteConnection>::new(&config.database_url);
    let pool = r2d2::Pool::builder()
        .build(manager)
        .context("Failed to create pool")?;
    pool.get()
        .context("Failed to get DB connection")?
        .run_pending_migrations(MIGRATIONS)
        .map_err(|e| anyhow::anyhow!("Failed to run migrations: {}", e))?;

    let contact_repository = Arc::new(ContactRepository::new(pool));
    let google_forms = Arc::new(GoogleFormsClient::new(GOOGLE_FORM_ACTION_URL, GOOGLE_FORM_FIELDS));
    if !google_forms.is_enabled() {
        tracing::warn!("Google Forms forwarding is disabled");
    }

    let state = Arc::new(AppState {
        lead_intake: LeadIntake::new(contact_repository, google_forms),
    });

    let app = app(state, config.frontend_url.as_deref());

    use tokio::net::TcpListener;

    let listener = TcpListener::bind(config.bind_address)
        .await
        .with_context(|| format!("Failed to bind {}", config.bind_address))?;
    tracing::info!("Listening on {}", config.bind_address);
    axum::serve(listener, app.into_make_service()).await?;
    Ok(())
}
