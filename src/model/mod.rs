//! Domain models shared across the data, service, and bot layers.

pub mod action;
pub mod config;
pub mod embed;
pub mod user;
pub mod warning;
