use crate::data::moderation_config::ModerationConfigRepository;
use crate::model::config::ModerationConfig;
use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

mod get;
mod save;
