//! Inbound adapters - the HTTP surface of the service.

pub mod auth;
pub mod health;
pub mod http;
pub mod swagger;
