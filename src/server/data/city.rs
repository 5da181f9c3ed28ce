//! City data repository.

use sea_orm::{DatabaseConnection, DbErr, EntityTrait, QueryOrder};

use crate::server::model::city::City;

/// Repository providing read access to cities.
pub struct CityRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CityRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets all cities ordered by id.
    pub async fn get_all(&self) -> Result<Vec<City>, DbErr> {
        let entities = entity::prelude::City::find()
            .order_by_asc(entity::city::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(City::from_entity).collect())
    }

    /// Gets a city by id.
    ///
    /// # Returns
    /// - `Ok(Some(City))` - City found
    /// - `Ok(None)` - No city with that id
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_by_id(&self, id: i32) -> Result<Option<City>, DbErr> {
        let entity = entity::prelude::City::find_by_id(id).one(self.db).await?;

        Ok(entity.map(City::from_entity))
    }
}
