use crate::server::{data::upvote::UpvoteRepository, model::upvote::CreateUpvoteParams};
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};

mod count_by_recommendation_ids;
mod delete;
