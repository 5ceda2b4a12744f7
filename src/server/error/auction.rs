use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

/// Reasons a bid or auction operation is rejected.
///
/// None of these leave partial state behind; they are detected before any write
/// or cause the write's transaction to roll back.
#[derive(Error, Debug, PartialEq)]
pub enum AuctionError {
    /// Bid amount is zero or negative.
    #[error("Bid amount must be positive, got {0}")]
    InvalidAmount(i64),

    /// The auction item is no longer open for bidding.
    #[error("Auction {0} is closed")]
    AuctionClosed(i32),

    /// Bid does not beat the current bid or reach the reserve.
    ///
    /// `minimum` is the smallest amount that would have been accepted.
    #[error("Bid of {amount} is too low, minimum is {minimum}")]
    BidTooLow { amount: i64, minimum: i64 },

    /// Bidder's balance minus points reserved by their other winning bids is below the bid.
    #[error("Bid of {amount} exceeds available balance of {available}")]
    InsufficientBalance { amount: i64, available: i64 },
}

/// Converts auction errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - For `InvalidAmount`
/// - 409 Conflict - For `AuctionClosed` and `BidTooLow`
/// - 422 Unprocessable Entity - For `InsufficientBalance`
impl IntoResponse for AuctionError {
    fn into_response(self) -> Response {
        let status = match self {
            Self::InvalidAmount(_) => StatusCode::BAD_REQUEST,
            Self::AuctionClosed(_) | Self::BidTooLow { .. } => StatusCode::CONFLICT,
            Self::InsufficientBalance { .. } => StatusCode::UNPROCESSABLE_ENTITY,
        };

        (
            status,
            Json(ErrorDto {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
