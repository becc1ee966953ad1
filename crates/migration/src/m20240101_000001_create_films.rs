//! Create `films` table.
//!
//! One row per movie; `id` is assigned by the database.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Films::Table)
                    .if_not_exists()
                    .col(big_integer(Films::Id).auto_increment().primary_key())
                    .col(string_len(Films::Name, 255).not_null())
                    .col(string_len(Films::Genre, 100).not_null())
                    .col(date(Films::ReleaseDate).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Films::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Films { Table, Id, Name, Genre, ReleaseDate }
