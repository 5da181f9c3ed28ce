use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Recommendation::Table)
                    .if_not_exists()
                    .col(pk_auto(Recommendation::Id))
                    .col(integer(Recommendation::UserId))
                    .col(integer(Recommendation::CityId))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_recommendations_user_id")
                    .table(Recommendation::Table)
                    .col(Recommendation::UserId)
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_recommendations_city_id")
                    .table(Recommendation::Table)
                    .col(Recommendation::CityId)
                    .if_not_exists()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Recommendation::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Recommendation {
    #[sea_orm(iden = "recommendations")]
    Table,
    Id,
    UserId,
    CityId,
}
