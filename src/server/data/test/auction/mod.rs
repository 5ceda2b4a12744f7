use crate::{
    model::auction::AuctionStatus,
    server::{
        data::auction::{AuctionBidRepository, AuctionItemRepository},
        error::AppError,
        model::auction::CreateAuctionItemParam,
    },
};
use chrono::{Duration, Utc};
use test_utils::{builder::TestBuilder, factory};

mod item;
