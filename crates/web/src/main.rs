use anyhow::Context;
use axum::Router;
use storage::Studio;
use tower_http::cors::{Any, CorsLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

mod config;
mod error;
mod features;

use config::Config;

#[derive(OpenApi)]
#[openapi(
    paths(
        features::schedule::handlers::get_day_schedule,
        features::bookings::handlers::book_class,
        features::bookings::handlers::cancel_booking,
        features::bookings::handlers::list_booked_classes,
        features::workouts::handlers::create_workout_log,
        features::workouts::handlers::list_workout_logs,
        features::leaderboard::handlers::get_leaderboard,
        features::auth::handlers::login,
        features::auth::handlers::logout,
        features::auth::handlers::current_user,
        features::admin::handlers::list_coaches,
        features::admin::handlers::create_coach,
        features::admin::handlers::delete_coach,
        features::admin::handlers::list_members,
        features::admin::handlers::create_member,
        features::admin::handlers::delete_member,
        features::admin::handlers::list_templates,
        features::admin::handlers::create_template,
        features::admin::handlers::delete_template,
    ),
    components(
        schemas(
            storage::dto::schedule::ClassSessionResponse,
            storage::dto::booking::LoggableWorkout,
            storage::dto::workout_log::CreateWorkoutLogRequest,
            storage::dto::leaderboard::Leaderboard,
            storage::dto::leaderboard::LeaderboardEntry,
            storage::dto::auth::LoginRequest,
            storage::dto::admin::CreateCoachRequest,
            storage::dto::admin::CreateMemberRequest,
            storage::dto::admin::CreateWorkoutTemplateRequest,
            storage::models::ClassKind,
            storage::models::WorkoutModality,
            storage::models::ScaleTier,
            storage::models::Performance,
            storage::models::WorkoutLogEntry,
            storage::models::User,
            storage::models::Role,
            storage::models::Coach,
            storage::models::Member,
            storage::models::WorkoutTemplate,
        )
    ),
    tags(
        (name = "schedule", description = "Daily class schedule"),
        (name = "bookings", description = "Seat reservations for the session user"),
        (name = "workouts", description = "Workout result logging"),
        (name = "leaderboard", description = "Ranked results per workout"),
        (name = "auth", description = "Session sign-in (any credentials accepted)"),
        (name = "admin", description = "Coach, member and template registries"),
    )
)]
struct ApiDoc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .init();

    tracing::info!("Starting Resiliente studio API");

    let config = Config::from_env().context("Failed to load API configuration")?;
    tracing::info!("Configuration loaded successfully");

    let studio = Studio::seeded();
    tracing::info!("Studio state seeded with the weekly schedule");

    let bind_address = format!("{}:{}", config.host, config.port);
    tracing::info!("Starting server at http://{}", bind_address);
    tracing::info!(
        "Swagger UI available at http://{}/swagger-ui/",
        bind_address
    );

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api = Router::new()
        .nest("/api/schedule", features::schedule::routes())
        .nest("/api/bookings", features::bookings::routes())
        .nest("/api/workouts", features::workouts::routes())
        .nest("/api/leaderboard", features::leaderboard::routes())
        .nest("/api/auth", features::auth::routes())
        .nest("/api/admin", features::admin::routes())
        .with_state(studio);

    let app = Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .merge(api)
        .layer(cors);

    let listener = tokio::net::TcpListener::bind(&bind_address)
        .await
        .with_context(|| format!("Failed to bind {bind_address}"))?;

    axum::serve(listener, app).await?;

    Ok(())
}
