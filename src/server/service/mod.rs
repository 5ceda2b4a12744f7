//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the data (repository) layer. Services are responsible for:
//!
//! - **Business Logic**: Implementing core business rules and validation
//! - **Orchestration**: Coordinating multiple repository calls and external services
//! - **Domain Models**: Working with domain models rather than DTOs or entity models
//! - **Transaction Management**: Opening the transactions the ledger and auction
//!   invariants depend on

pub mod auction;
pub mod auth;
pub mod event;
pub mod identity;
pub mod ledger;
pub mod news;
pub mod roster;

#[cfg(test)]
mod test;
