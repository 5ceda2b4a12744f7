use axum::{
    http::{header, HeaderValue, Method},
    Router,
};
use tower_governor::{
    governor::GovernorConfigBuilder, key_extractor::SmartIpKeyExtractor, GovernorLayer,
};
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{
        auction::{self, AUCTION_TAG},
        auth::{self, AUTH_TAG},
        event::{self, EVENT_TAG},
        member::{self, MEMBER_TAG},
        news::{self, NEWS_TAG},
        participation::{self, PARTICIPATION_TAG},
    },
    error::AppError,
    state::AppState,
};

/// Sustained requests per second allowed per client IP.
const RATE_LIMIT_PER_SECOND: u64 = 10;
const RATE_LIMIT_BURST: u32 = 30;

#[derive(OpenApi)]
#[openapi(
    info(title = "Guildhall API", description = "Guild events, DKP ledger and auctions"),
    tags(
        (name = AUTH_TAG, description = "Discord login and session"),
        (name = MEMBER_TAG, description = "Member profile, balances and leaderboard"),
        (name = EVENT_TAG, description = "Event types and events"),
        (name = PARTICIPATION_TAG, description = "Rosters and attendance"),
        (name = AUCTION_TAG, description = "Auctions, bids and settlement"),
        (name = NEWS_TAG, description = "Game news feed"),
    )
)]
struct ApiDoc;

/// Builds the API routes and the Swagger UI at `/api/docs`.
pub fn router() -> Router<AppState> {
    let (router, api) = OpenApiRouter::<AppState>::with_openapi(ApiDoc::openapi())
        .routes(routes!(auth::login))
        .routes(routes!(auth::callback))
        .routes(routes!(auth::logout))
        .routes(routes!(auth::get_user))
        .routes(routes!(member::update_profile))
        .routes(routes!(member::get_my_ledger))
        .routes(routes!(member::get_balance))
        .routes(routes!(member::get_leaderboard))
        .routes(routes!(event::get_event_types))
        .routes(routes!(event::get_events, event::create_event))
        .routes(routes!(event::get_event))
        .routes(routes!(event::get_event_by_slug))
        .routes(routes!(
            participation::get_participants,
            participation::sign_up,
            participation::withdraw
        ))
        .routes(routes!(participation::update_attendance))
        .routes(routes!(auction::get_auctions, auction::create_auction))
        .routes(routes!(auction::get_auction))
        .routes(routes!(auction::place_bid))
        .routes(routes!(auction::close_auction))
        .routes(routes!(news::get_news_feed))
        .split_for_parts();

    router.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
}

/// Adds per-IP rate limiting and, when a frontend origin is configured, CORS with
/// credentials for that origin.
///
/// # Returns
/// - `Ok(Router)` - Router with the layers applied
/// - `Err(AppError::InternalError)` - Invalid rate limit settings or origin
pub fn apply_layers(
    router: Router<AppState>,
    app_url: Option<&str>,
) -> Result<Router<AppState>, AppError> {
    let governor_config = GovernorConfigBuilder::default()
        .per_second(RATE_LIMIT_PER_SECOND)
        .burst_size(RATE_LIMIT_BURST)
        .key_extractor(SmartIpKeyExtractor)
        .finish()
        .ok_or_else(|| AppError::InternalError("Invalid rate limit configuration".to_string()))?;

    let mut router = router;

    if let Some(app_url) = app_url {
        let origin = HeaderValue::from_str(app_url.trim_end_matches('/')).map_err(|e| {
            AppError::InternalError(format!("Invalid APP_URL for CORS '{}': {}", app_url, e))
        })?;

        router = router.layer(
            CorsLayer::new()
                .allow_origin(origin)
                .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
                .allow_headers([header::CONTENT_TYPE, header::ACCEPT])
                .allow_credentials(true),
        );
    }

    Ok(router.layer(GovernorLayer::new(governor_config)))
}
