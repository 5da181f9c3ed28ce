use sea_orm_migration::{prelude::*, schema::*};

/// Creates the `logs` table.
///
/// `user_id` and `city_id` are indexed but carry no foreign key constraint:
/// a log may reference a user or city that does not exist.
#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Log::Table)
                    .if_not_exists()
                    .col(pk_auto(Log::Id))
                    .col(integer(Log::UserId))
                    .col(integer(Log::CityId))
                    .col(text(Log::Comment))
                    .col(
                        timestamp_with_time_zone(Log::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_logs_user_id")
                    .table(Log::Table)
                    .col(Log::UserId)
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_logs_city_id")
                    .table(Log::Table)
                    .col(Log::CityId)
                    .if_not_exists()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Log::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Log {
    #[sea_orm(iden = "logs")]
    Table,
    Id,
    UserId,
    CityId,
    Comment,
    CreatedAt,
}
