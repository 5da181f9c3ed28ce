use crate::server::{
    data::log::LogRepository,
    model::log::{CreateLogParams, UpdateLogParams},
};
use chrono::{Duration, TimeZone, Utc};
use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod get_by_user_ids;
mod update;
