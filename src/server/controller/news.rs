use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{api::ErrorDto, news::NewsFeedDto},
    server::{error::AppError, service::news::NewsService, state::AppState},
};

/// Tag for grouping news endpoints in OpenAPI documentation
pub static NEWS_TAG: &str = "news";

/// Get the game's news feed.
///
/// Fetched from the configured RSS URL on every request.
#[utoipa::path(
    get,
    path = "/api/news/feed",
    tag = NEWS_TAG,
    responses(
        (status = 200, description = "News items in feed order", body = NewsFeedDto),
        (status = 502, description = "Feed could not be fetched or parsed", body = ErrorDto)
    ),
)]
pub async fn get_news_feed(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let items = NewsService::new(&state.http_client, &state.news_feed_url)
        .fetch()
        .await?;

    Ok((
        StatusCode::OK,
        Json(NewsFeedDto {
            items: items.into_iter().map(|item| item.into_dto()).collect(),
        }),
    ))
}
