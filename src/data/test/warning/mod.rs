use crate::data::warning::WarningRepository;
use crate::model::warning::CreateWarningParam;
use chrono::{Duration, Utc};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod get_by_user_paginated;
