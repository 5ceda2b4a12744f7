//! Server-side domain models and parameter types.
//!
//! This module contains domain models used throughout the service layer, representing
//! business entities and operation parameters. Domain models are converted from entity
//! models at the repository boundary and transformed to DTOs at the controller boundary.
//! Enum columns stored as text are parsed here, so services only ever see typed values.

pub mod auction;
pub mod event;
pub mod ledger;
pub mod member;
pub mod news;
pub mod participation;
