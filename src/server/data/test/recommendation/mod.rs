use crate::server::{
    data::recommendation::RecommendationRepository,
    model::recommendation::{CreateRecommendationParams, UpdateRecommendationParams},
};
use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod exists;
mod get_by_city_id;
mod update;
