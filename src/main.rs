use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use axum::extract::{DefaultBodyLimit, MatchedPath};
use dotenvy::dotenv;
use http::HeaderValue;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::info;

use portfolio_api::bootstrap::app_context::{AppContext, AppServices};
use portfolio_api::bootstrap::config::Config;
use portfolio_api::bootstrap::default_content::DefaultContent;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[derive(OpenApi)]
#[openapi(
        paths(
            portfolio_api::presentation::http::auth::current_user,
            portfolio_api::presentation::http::profile::get_profile,
            portfolio_api::presentation::http::profile::get_my_profile,
            portfolio_api::presentation::http::profile::update_profile,
            portfolio_api::presentation::http::profile::upload_photo,
            portfolio_api::presentation::http::projects::list_projects,
            portfolio_api::presentation::http::projects::list_my_projects,
            portfolio_api::presentation::http::projects::create_project,
            portfolio_api::presentation::http::projects::update_project,
            portfolio_api::presentation::http::projects::delete_project,
            portfolio_api::presentation::http::contact::submit,
            portfolio_api::presentation::http::health::health,
        ),
        components(schemas(
            portfolio_api::presentation::http::auth::UserResponse,
            portfolio_api::presentation::http::profile::ProfileResponse,
            portfolio_api::presentation::http::profile::UpdateProfileRequest,
            portfolio_api::presentation::http::profile::PhotoUploadResponse,
            portfolio_api::presentation::http::projects::ProjectResponse,
            portfolio_api::presentation::http::projects::DeleteResponse,
            portfolio_api::presentation::http::contact::ContactRequest,
            portfolio_api::presentation::http::contact::ContactResponse,
            portfolio_api::presentation::http::error::ErrorBody,
            portfolio_api::presentation::http::health::HealthResp,
        )),
        tags(
            (name = "Auth", description = "Caller identity"),
            (name = "Profile", description = "Portfolio profile"),
            (name = "Projects", description = "Portfolio projects"),
            (name = "Contact", description = "Contact form"),
            (name = "Health", description = "System health checks")
        )
    )]
struct ApiDoc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            std::env::var("RUST_LOG")
                .unwrap_or_else(|_| "portfolio_api=debug,axum=info,tower_http=info".into()),
        )
        .init();

    let cfg = Config::from_env()?;
    info!(
        port = cfg.api_port,
        production = cfg.is_production,
        uploads_dir = %cfg.uploads_dir,
        "Starting portfolio backend"
    );

    // Database
    let pool = portfolio_api::infrastructure::db::connect_pool(&cfg.database_url).await?;
    portfolio_api::infrastructure::db::migrate(&pool).await?;

    // Uploads root is created up front; a missing storage root is a
    // startup failure, not a first-upload surprise.
    let uploads_root = std::path::PathBuf::from(&cfg.uploads_dir);
    portfolio_api::infrastructure::storage::ensure_uploads_root(&uploads_root).await?;

    let default_content = DefaultContent::load(cfg.default_content_path.as_deref())?;

    let user_repo = Arc::new(
        portfolio_api::infrastructure::db::repositories::user_repository_sqlx::SqlxUserRepository::new(
            pool.clone(),
        ),
    );
    let profile_repo = Arc::new(
        portfolio_api::infrastructure::db::repositories::profile_repository_sqlx::SqlxProfileRepository::new(
            pool.clone(),
        ),
    );
    let project_repo = Arc::new(
        portfolio_api::infrastructure::db::repositories::project_repository_sqlx::SqlxProjectRepository::new(
            pool.clone(),
        ),
    );
    let storage_port = Arc::new(portfolio_api::infrastructure::storage::FsStoragePort {
        uploads_root: uploads_root.clone(),
    });

    let services = AppServices::new(user_repo, profile_repo, project_repo, storage_port);
    let ctx = AppContext::new(cfg.clone(), default_content, services);

    // Build CORS
    let cors = if let Some(origin) = cfg.frontend_url.clone() {
        match HeaderValue::from_str(&origin) {
            Ok(v) => cors_layer().allow_origin(v).allow_credentials(true),
            Err(_) => cors_layer()
                .allow_origin(AllowOrigin::mirror_request())
                .allow_credentials(true),
        }
    } else if cfg.is_production {
        // FRONTEND_URL is mandatory in production (enforced earlier);
        // fall back to deny-all if we somehow get here.
        cors_layer().allow_origin(AllowOrigin::exact(HeaderValue::from_static("http://invalid")))
    } else {
        // Development convenience
        cors_layer()
            .allow_origin(AllowOrigin::mirror_request())
            .allow_credentials(true)
    };

    let app = Router::new()
        .nest(
            "/api",
            portfolio_api::presentation::http::health::routes(pool.clone()),
        )
        .nest(
            "/api/auth",
            portfolio_api::presentation::http::auth::routes(ctx.clone()),
        )
        .nest(
            "/api",
            portfolio_api::presentation::http::profile::routes(ctx.clone()),
        )
        .nest(
            "/api",
            portfolio_api::presentation::http::projects::routes(ctx.clone()),
        )
        .nest(
            "/api",
            portfolio_api::presentation::http::contact::routes(ctx.clone()),
        )
        .nest_service("/uploads", ServeDir::new(&uploads_root))
        .merge(SwaggerUi::new("/api/docs").url("/api/openapi.json", ApiDoc::openapi()))
        .layer(cors)
        .layer(DefaultBodyLimit::max(cfg.body_limit_bytes()))
        .layer(
            TraceLayer::new_for_http().make_span_with(|req: &http::Request<_>| {
                let method = req.method().clone();
                let uri = req.uri().clone();
                let matched = req
                    .extensions()
                    .get::<MatchedPath>()
                    .map(|p| p.as_str().to_string())
                    .unwrap_or_default();
                tracing::info_span!("http", %method, %uri, matched_path = %matched)
            }),
        );

    let api_addr = SocketAddr::from(([0, 0, 0, 0], cfg.api_port));
    info!(%api_addr, "HTTP API listening");
    let listener = tokio::net::TcpListener::bind(api_addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
        })
        .await?;
    Ok(())
}

fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_methods([
            http::Method::GET,
            http::Method::POST,
            http::Method::PUT,
            http::Method::DELETE,
            http::Method::OPTIONS,
        ])
        .allow_headers([http::header::CONTENT_TYPE, http::header::AUTHORIZATION])
}
