//! HTTP routing and OpenAPI documentation configuration.
//!
//! This module defines the application's HTTP routes and generates OpenAPI documentation
//! using utoipa. All API endpoints are registered here with their OpenAPI specifications,
//! and Swagger UI is configured to provide interactive API documentation at `/api/docs`.

use axum::{extract::DefaultBodyLimit, routing::get, Router};
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{controller, model::app::AppState};

/// Builds the application's HTTP router with all API endpoints and Swagger UI documentation.
///
/// # Registered Endpoints
/// - `GET /api/championships/stats`, `GET /api/championships/tiers` - Championship records
/// - `GET /api/seasons`, `GET /api/seasons/{year}` - Season results
/// - `GET /api/seasons/{year}/draft-positions`, `GET /api/draft-positions`,
///   `GET /api/teams/{id}/draft-positions` - Draft order
/// - `GET|POST /api/seasons/{year}/photos`, `DELETE /api/photos/{id}`,
///   `POST /api/photos/urls` - Draft photos
/// - `GET /api/draft-locations` - Draft locations with years
/// - `GET /api/teams`, `GET /api/teams/stats`, `GET /api/teams/{id}` - Teams
/// - `GET /api/team-aliases`, `GET /api/team-aliases/{alias}` - Historical team names
/// - `POST /api/auth/validate` - Approved owner email check
/// - `PUT /api/admin/teams/{id}`, `POST /api/admin/team-aliases`,
///   `DELETE /api/admin/team-aliases/{id}` - Admin edits
/// - `GET /media/{*key}` - Stored photo objects (not part of the OpenAPI document)
///
/// The OpenAPI specification is available at `/api/docs/openapi.json` and Swagger UI is
/// served at `/api/docs`.
///
/// # Example
/// ```ignore
/// let app_state = AppState { db, storage, token_verifier };
/// let router = routes().with_state(app_state);
/// ```
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(info(title = "Almanac", description = "League history API"), tags(
        (name = controller::championship::CHAMPIONSHIP_TAG, description = "Championship statistics and tiers"),
        (name = controller::season::SEASON_TAG, description = "Season results and draft locations"),
        (name = controller::draft::DRAFT_TAG, description = "Draft order"),
        (name = controller::team::TEAM_TAG, description = "Teams and historical team names"),
        (name = controller::photo::PHOTO_TAG, description = "Draft photos"),
        (name = controller::auth::AUTH_TAG, description = "Approved owner validation"),
        (name = controller::admin::ADMIN_TAG, description = "Admin team management"),
    ))]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(controller::championship::get_championship_stats))
        .routes(routes!(controller::championship::get_championship_tiers))
        .routes(routes!(controller::season::get_seasons))
        .routes(routes!(controller::season::get_season))
        .routes(routes!(controller::season::get_draft_locations))
        .routes(routes!(controller::draft::get_draft_positions))
        .routes(routes!(controller::draft::get_season_draft_positions))
        .routes(routes!(controller::draft::get_team_draft_positions))
        .routes(routes!(
            controller::photo::get_season_photos,
            controller::photo::upload_photo
        ))
        .routes(routes!(controller::photo::delete_photo))
        .routes(routes!(controller::photo::get_view_urls))
        .routes(routes!(controller::team::get_teams))
        .routes(routes!(controller::team::get_teams_with_stats))
        .routes(routes!(controller::team::get_team))
        .routes(routes!(controller::team::get_team_aliases))
        .routes(routes!(controller::team::get_team_by_alias))
        .routes(routes!(controller::auth::validate_email))
        .routes(routes!(controller::admin::update_team))
        .routes(routes!(controller::admin::create_team_alias))
        .routes(routes!(controller::admin::delete_team_alias))
        .split_for_parts();

    routes
        .route("/media/{*key}", get(controller::media::get_media))
        .layer(DefaultBodyLimit::max(controller::photo::MAX_PHOTO_BYTES))
        .merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
}
