use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        auction::{
            AuctionBidDto, AuctionItemDetailDto, AuctionItemDto, CloseAuctionDto,
            CreateAuctionItemDto, PlaceBidDto,
        },
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::auction::{AuctionItem, CreateAuctionItemParam},
        service::auction::AuctionService,
        state::AppState,
    },
};

/// Tag for grouping auction endpoints in OpenAPI documentation
pub static AUCTION_TAG: &str = "auction";

#[derive(Deserialize)]
pub struct ListParams {
    /// Only list items that are still open.
    #[serde(default)]
    pub active: bool,
}

#[utoipa::path(
    get,
    path = "/api/auctions",
    tag = AUCTION_TAG,
    params(
        ("active" = Option<bool>, Query, description = "Only open items (default: false)")
    ),
    responses(
        (status = 200, description = "Auction items", body = Vec<AuctionItemDto>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_auctions(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<ListParams>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let items: Vec<AuctionItemDto> = AuctionService::new(&state.db)
        .list_items(params.active)
        .await?
        .into_iter()
        .map(AuctionItem::into_dto)
        .collect();

    Ok((StatusCode::OK, Json(items)))
}

/// Open an auction for an item.
///
/// # Access Control
/// - `Admin` - Only admins can create auctions
#[utoipa::path(
    post,
    path = "/api/auctions",
    tag = AUCTION_TAG,
    request_body = CreateAuctionItemDto,
    responses(
        (status = 201, description = "Auction opened", body = AuctionItemDto),
        (status = 400, description = "Blank name or negative reserve", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_auction(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateAuctionItemDto>,
) -> Result<impl IntoResponse, AppError> {
    let admin = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let item = AuctionService::new(&state.db)
        .create_item(CreateAuctionItemParam::from_dto(payload, admin.id))
        .await?;

    Ok((StatusCode::CREATED, Json(item.into_dto())))
}

/// Get an item with its bids and, once closed, its order.
#[utoipa::path(
    get,
    path = "/api/auctions/{item_id}",
    tag = AUCTION_TAG,
    params(
        ("item_id" = i32, Path, description = "Auction item id")
    ),
    responses(
        (status = 200, description = "Auction detail", body = AuctionItemDetailDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Auction not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_auction(
    State(state): State<AppState>,
    session: Session,
    Path(item_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let detail = AuctionService::new(&state.db).get_item(item_id).await?;

    Ok((StatusCode::OK, Json(detail.into_dto())))
}

/// Bid on an open item as the logged in member.
///
/// # Returns
/// - `201 Created` - The bid is now winning
/// - `400 Bad Request` - Amount is not positive
/// - `409 Conflict` - Bid too low or auction closed
/// - `422 Unprocessable Entity` - Not enough unreserved points
#[utoipa::path(
    post,
    path = "/api/auctions/{item_id}/bids",
    tag = AUCTION_TAG,
    params(
        ("item_id" = i32, Path, description = "Auction item id")
    ),
    request_body = PlaceBidDto,
    responses(
        (status = 201, description = "Bid accepted", body = AuctionBidDto),
        (status = 400, description = "Invalid amount", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Auction not found", body = ErrorDto),
        (status = 409, description = "Bid too low or auction closed", body = ErrorDto),
        (status = 422, description = "Insufficient balance", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn place_bid(
    State(state): State<AppState>,
    session: Session,
    Path(item_id): Path<i32>,
    Json(payload): Json<PlaceBidDto>,
) -> Result<impl IntoResponse, AppError> {
    let member = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let bid = AuctionService::new(&state.db)
        .place_bid(item_id, member.id, payload.amount)
        .await?;

    Ok((StatusCode::CREATED, Json(bid.into_dto())))
}

/// Close an auction and settle it.
///
/// Closing an already closed auction returns its existing order with
/// `already_closed` set.
///
/// # Access Control
/// - `Admin` - Only admins can close auctions
#[utoipa::path(
    post,
    path = "/api/auctions/{item_id}/close",
    tag = AUCTION_TAG,
    params(
        ("item_id" = i32, Path, description = "Auction item id")
    ),
    responses(
        (status = 200, description = "The auction's order", body = CloseAuctionDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Auction not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn close_auction(
    State(state): State<AppState>,
    session: Session,
    Path(item_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let outcome = AuctionService::new(&state.db).close_auction(item_id).await?;

    Ok((StatusCode::OK, Json(outcome.into_dto())))
}
