//! User data repository for database operations.
//!
//! This module provides the `UserRepository` for managing traveler profiles. It handles
//! user creation, lookups by id and email, batch lookups used when joining users onto
//! city views, and in-place profile updates.

use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr,
    EntityTrait, QueryFilter, QueryOrder,
};

use crate::server::model::user::{CreateUserParams, UpdateUserParams, User};

/// Repository providing database operations for users.
pub struct UserRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserRepository<'a> {
    /// Creates a new UserRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new user and returns it with its assigned id.
    ///
    /// # Arguments
    /// - `params` - Profile fields for the new user
    ///
    /// # Returns
    /// - `Ok(User)` - The created user
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(&self, params: CreateUserParams) -> Result<User, DbErr> {
        let entity = entity::user::ActiveModel {
            name: ActiveValue::Set(params.name),
            email: ActiveValue::Set(params.email),
            image_url: ActiveValue::Set(params.image_url),
            description: ActiveValue::Set(params.description),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(User::from_entity(entity))
    }

    /// Finds a user by id.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - User found
    /// - `Ok(None)` - No user with that id
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_by_id(&self, id: i32) -> Result<Option<User>, DbErr> {
        let entity = entity::prelude::User::find_by_id(id).one(self.db).await?;

        Ok(entity.map(User::from_entity))
    }

    /// Finds a user by exact email match.
    ///
    /// Emails are not unique; if several users share one, the lowest id wins.
    ///
    /// # Arguments
    /// - `email` - Email address compared case-sensitively
    ///
    /// # Returns
    /// - `Ok(Some(User))` - Matching user
    /// - `Ok(None)` - No user with that email
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_email(&self, email: &str) -> Result<Option<User>, DbErr> {
        let entity = entity::prelude::User::find()
            .filter(entity::user::Column::Email.eq(email))
            .order_by_asc(entity::user::Column::Id)
            .one(self.db)
            .await?;

        Ok(entity.map(User::from_entity))
    }

    /// Gets all users whose ids are in the provided set, ordered by id.
    ///
    /// Ids without a matching row are skipped.
    ///
    /// # Arguments
    /// - `ids` - User ids to look up
    ///
    /// # Returns
    /// - `Ok(Vec<User>)` - Users found (empty if `ids` is empty)
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_by_ids(&self, ids: &[i32]) -> Result<Vec<User>, DbErr> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let entities = entity::prelude::User::find()
            .filter(entity::user::Column::Id.is_in(ids.iter().copied()))
            .order_by_asc(entity::user::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(User::from_entity).collect())
    }

    /// Overwrites every profile field of a user in a single statement.
    ///
    /// # Arguments
    /// - `params` - Id of the user and the new profile fields
    ///
    /// # Returns
    /// - `Ok(true)` - The user existed and was updated
    /// - `Ok(false)` - No user with that id
    /// - `Err(DbErr)` - Database error during update
    pub async fn update(&self, params: UpdateUserParams) -> Result<bool, DbErr> {
        let result = entity::prelude::User::update_many()
            .col_expr(entity::user::Column::Name, Expr::value(params.name))
            .col_expr(entity::user::Column::Email, Expr::value(params.email))
            .col_expr(entity::user::Column::ImageUrl, Expr::value(params.image_url))
            .col_expr(
                entity::user::Column::Description,
                Expr::value(params.description),
            )
            .filter(entity::user::Column::Id.eq(params.id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
