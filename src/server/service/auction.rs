//! Auction engine: bidding in ledger points, closing and settlement.
//!
//! An item moves `open -> closed` exactly once. Bids are accepted through a
//! conditional update on the item, and closing is a conditional status transition,
//! so concurrent callers cannot both win a bid race or both settle an item.

use chrono::{DateTime, Utc};
use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    model::auction::OrderStatus,
    server::{
        data::{
            auction::{AuctionBidRepository, AuctionItemRepository, AuctionOrderRepository},
            ledger::LedgerRepository,
            member::MemberRepository,
        },
        error::{auction::AuctionError, AppError},
        model::auction::{
            AuctionBid, AuctionItem, AuctionItemDetail, CloseOutcome, CreateAuctionItemParam,
            CreateOrderParam,
        },
    },
};

pub struct AuctionService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AuctionService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates an open auction item.
    ///
    /// # Returns
    /// - `Ok(AuctionItem)` - The created item
    /// - `Err(AppError::BadRequest)` - Blank name or negative reserve
    pub async fn create_item(&self, param: CreateAuctionItemParam) -> Result<AuctionItem, AppError> {
        if param.name.trim().is_empty() {
            return Err(AppError::BadRequest("Item name is required".to_string()));
        }
        if param.lowest_bid < 0 {
            return Err(AppError::BadRequest(
                "Lowest bid cannot be negative".to_string(),
            ));
        }

        let item = AuctionItemRepository::new(self.db).create(param).await?;
        tracing::info!("Auction {} opened for {}", item.id, item.name);

        Ok(item)
    }

    /// Gets an item with its bids and, once closed, its order.
    ///
    /// # Returns
    /// - `Ok(AuctionItemDetail)` - The item detail
    /// - `Err(AppError::NotFound)` - No item with that id
    pub async fn get_item(&self, item_id: i32) -> Result<AuctionItemDetail, AppError> {
        let item = AuctionItemRepository::new(self.db)
            .find_by_id(item_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Auction {} not found", item_id)))?;
        let bids = AuctionBidRepository::new(self.db).get_by_item(item_id).await?;
        let order = AuctionOrderRepository::new(self.db)
            .find_by_item(item_id)
            .await?;

        Ok(AuctionItemDetail { item, bids, order })
    }

    pub async fn list_items(&self, active_only: bool) -> Result<Vec<AuctionItem>, AppError> {
        AuctionItemRepository::new(self.db).get_all(active_only).await
    }

    /// Places a bid on an open item.
    ///
    /// Checks run in this order inside one transaction: amount positive, item open,
    /// amount above the current bid and at least the reserve, amount within the
    /// bidder's balance minus points reserved by their winning bids on other open
    /// items. The bidder's member row is written first so one member's bids run in
    /// sequence. The previous winning bid on the item stops winning.
    ///
    /// # Arguments
    /// - `item_id` - Item bid on
    /// - `member_id` - Bidder
    /// - `amount` - Points offered
    ///
    /// # Returns
    /// - `Ok(AuctionBid)` - The accepted, now winning bid
    /// - `Err(AuctionError::InvalidAmount)` - Amount is zero or negative
    /// - `Err(AuctionError::AuctionClosed)` - Item is not open
    /// - `Err(AuctionError::BidTooLow)` - Amount does not beat the current bid or reserve
    /// - `Err(AuctionError::InsufficientBalance)` - Not enough unreserved points
    /// - `Err(AppError::NotFound)` - Item or member does not exist
    pub async fn place_bid(
        &self,
        item_id: i32,
        member_id: i32,
        amount: i64,
    ) -> Result<AuctionBid, AppError> {
        if amount <= 0 {
            return Err(AuctionError::InvalidAmount(amount).into());
        }

        let txn = self.db.begin().await?;
        let item_repo = AuctionItemRepository::new(&txn);
        let bid_repo = AuctionBidRepository::new(&txn);

        if !MemberRepository::new(&txn).lock(member_id).await? {
            return Err(AppError::NotFound(format!("Member {} not found", member_id)));
        }

        let item = item_repo
            .find_by_id(item_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Auction {} not found", item_id)))?;

        if !item.is_open() {
            return Err(AuctionError::AuctionClosed(item_id).into());
        }
        if amount < item.minimum_bid() {
            return Err(AuctionError::BidTooLow {
                amount,
                minimum: item.minimum_bid(),
            }
            .into());
        }

        let balance = LedgerRepository::new(&txn).balance(member_id).await?;
        let reserved = bid_repo.reserved_by_member(member_id, item_id).await?;
        let available = balance - reserved;
        if amount > available {
            return Err(AuctionError::InsufficientBalance { amount, available }.into());
        }

        if !item_repo.raise_current_bid(item_id, amount).await? {
            let current = item_repo
                .find_by_id(item_id)
                .await?
                .ok_or_else(|| AppError::NotFound(format!("Auction {} not found", item_id)))?;

            return Err(if current.is_open() {
                AuctionError::BidTooLow {
                    amount,
                    minimum: current.minimum_bid(),
                }
            } else {
                AuctionError::AuctionClosed(item_id)
            }
            .into());
        }

        bid_repo.clear_winning(item_id).await?;
        let bid = bid_repo.create(item_id, member_id, amount, true).await?;

        txn.commit().await?;

        tracing::debug!(
            "Member {} leads auction {} with {}",
            member_id,
            item_id,
            amount
        );

        Ok(bid)
    }

    /// Closes an auction and settles it.
    ///
    /// The caller that performs the `open -> closed` transition creates the order: a
    /// `settled` order with a debit of the final price when a winning bid meets the
    /// reserve, otherwise an `unsold` order with no winner and no debit. Any later
    /// caller gets the existing order back with `already_closed` set and writes
    /// nothing. The transition is the transaction's first statement, so a concurrent
    /// close waits for the settling one to commit.
    ///
    /// # Returns
    /// - `Ok(CloseOutcome)` - The item's order
    /// - `Err(AppError::NotFound)` - No item with that id
    pub async fn close_auction(&self, item_id: i32) -> Result<CloseOutcome, AppError> {
        let txn = self.db.begin().await?;
        let item_repo = AuctionItemRepository::new(&txn);
        let order_repo = AuctionOrderRepository::new(&txn);

        let transitioned = item_repo.mark_closed(item_id).await?;

        let item = item_repo
            .find_by_id(item_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Auction {} not found", item_id)))?;

        if !transitioned {
            let order = order_repo.find_by_item(item_id).await?.ok_or_else(|| {
                AppError::InternalError(format!("Closed auction {} has no order", item_id))
            })?;
            txn.commit().await?;

            return Ok(CloseOutcome {
                order,
                already_closed: true,
            });
        }

        let winning_bid = AuctionBidRepository::new(&txn)
            .find_winning(item_id)
            .await?
            .filter(|bid| bid.bid_amount >= item.lowest_bid);

        let order = match winning_bid {
            Some(bid) => {
                let order = order_repo
                    .create(CreateOrderParam {
                        auction_item_id: item_id,
                        final_price: bid.bid_amount,
                        winner_id: Some(bid.member_id),
                        winning_bid_id: Some(bid.id),
                        status: OrderStatus::Settled,
                    })
                    .await?;
                LedgerRepository::new(&txn)
                    .debit_auction(bid.member_id, order.id, bid.bid_amount)
                    .await?;
                order
            }
            None => {
                order_repo
                    .create(CreateOrderParam {
                        auction_item_id: item_id,
                        final_price: 0,
                        winner_id: None,
                        winning_bid_id: None,
                        status: OrderStatus::Unsold,
                    })
                    .await?
            }
        };

        txn.commit().await?;

        match order.winner_id {
            Some(winner_id) => tracing::info!(
                "Auction {} sold to member {} for {}",
                item_id,
                winner_id,
                order.final_price
            ),
            None => tracing::info!("Auction {} closed unsold", item_id),
        }

        Ok(CloseOutcome {
            order,
            already_closed: false,
        })
    }

    /// Closes every open item whose end time is at or before `now`.
    ///
    /// Failures are logged per item and do not stop the sweep.
    ///
    /// # Returns
    /// - `Ok(Vec<CloseOutcome>)` - Outcomes of the items this call closed
    /// - `Err(AppError)` - The expired items could not be listed
    pub async fn close_expired(&self, now: DateTime<Utc>) -> Result<Vec<CloseOutcome>, AppError> {
        let item_ids = AuctionItemRepository::new(self.db)
            .get_expired_ids(now)
            .await?;

        let mut closed = Vec::with_capacity(item_ids.len());
        for item_id in item_ids {
            match self.close_auction(item_id).await {
                Ok(outcome) if !outcome.already_closed => closed.push(outcome),
                Ok(_) => {}
                Err(err) => tracing::warn!("Failed to close expired auction {}: {}", item_id, err),
            }
        }

        Ok(closed)
    }
}
