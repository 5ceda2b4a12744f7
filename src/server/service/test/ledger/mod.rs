use crate::server::{
    error::AppError, model::participation::AttendanceUpdate, service::ledger::LedgerService,
};
use test_utils::{builder::TestBuilder, factory};

mod batch;
mod leaderboard;
mod set_attendance;
