//! City factory for creating test city entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test cities with customizable fields.
pub struct CityFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    details: String,
}

impl<'a> CityFactory<'a> {
    /// Creates a new CityFactory with default values.
    ///
    /// Defaults:
    /// - name: `"City {n}"` where n is auto-incremented
    /// - details: `"Details for city {n}"`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let n = next_id();
        Self {
            db,
            name: format!("City {}", n),
            details: format!("Details for city {}", n),
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn details(mut self, details: impl Into<String>) -> Self {
        self.details = details.into();
        self
    }

    /// Builds and inserts the city entity into the database.
    pub async fn build(self) -> Result<entity::city::Model, DbErr> {
        entity::city::ActiveModel {
            name: ActiveValue::Set(self.name),
            details: ActiveValue::Set(self.details),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a city with default values.
pub async fn create_city(db: &DatabaseConnection) -> Result<entity::city::Model, DbErr> {
    CityFactory::new(db).build().await
}
