//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! gateway (bot) layer and the data (repository) layer. Services are responsible for:
//!
//! - **Business Logic**: Implementing moderation log rules and fallbacks
//! - **Orchestration**: Coordinating repository calls and Discord messaging
//! - **Domain Models**: Working with domain models rather than entity models

pub mod modlog;
