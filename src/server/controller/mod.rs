//! HTTP handlers: access control, DTO conversion and service calls.

pub mod auction;
pub mod auth;
pub mod event;
pub mod member;
pub mod news;
pub mod participation;
