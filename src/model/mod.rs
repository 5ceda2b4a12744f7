//! Data transfer objects shared by the HTTP API.
//!
//! Everything in here is serialized over the wire. Server-side domain models live in
//! `server::model` and convert into these types at the controller boundary.

pub mod api;
pub mod auction;
pub mod event;
pub mod ledger;
pub mod member;
pub mod news;
pub mod participation;
