use crate::server::{data::ledger::LedgerRepository, error::AppError};
use test_utils::{builder::TestBuilder, factory};

mod balance;
mod grant;
