use crate::{
    model::auction::{AuctionStatus, OrderStatus},
    server::{
        error::{auction::AuctionError, AppError},
        service::{auction::AuctionService, ledger::LedgerService},
    },
};
use test_utils::{builder::TestBuilder, factory};

mod close_auction;
mod close_expired;
