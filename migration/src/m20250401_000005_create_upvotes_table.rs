use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Upvote::Table)
                    .if_not_exists()
                    .col(pk_auto(Upvote::Id))
                    .col(integer(Upvote::RecommendationId))
                    .to_owned(),
            )
            .await?;

        // Upvote totals are counted per recommendation on every read
        manager
            .create_index(
                Index::create()
                    .name("idx_upvotes_recommendation_id")
                    .table(Upvote::Table)
                    .col(Upvote::RecommendationId)
                    .if_not_exists()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Upvote::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Upvote {
    #[sea_orm(iden = "upvotes")]
    Table,
    Id,
    RecommendationId,
}
