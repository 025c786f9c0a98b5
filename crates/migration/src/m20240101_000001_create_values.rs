//! Create `values` table.
//! Stores named records with an optional description and audit timestamps.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Values::Table)
                    .if_not_exists()
                    .col(big_integer(Values::Id).primary_key().auto_increment())
                    .col(string_len(Values::Name, 256).not_null())
                    .col(string_null(Values::Description))
                    .col(timestamp_with_time_zone(Values::CreatedAt).not_null())
                    .col(timestamp_with_time_zone(Values::UpdatedAt).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Values::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Values {
    Table,
    Id,
    Name,
    Description,
    CreatedAt,
    UpdatedAt,
}
