//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations for each
//! domain in the application. Repositories use SeaORM entity models internally and return
//! domain models so the service layer never sees raw rows or stored enum strings.
//!
//! Repositories are generic over `ConnectionTrait`, so the same repository runs against
//! the shared pool or inside a transaction opened by a service.

pub mod auction;
pub mod event;
pub mod event_type;
pub mod ledger;
pub mod member;
pub mod participation;

#[cfg(test)]
mod test;
