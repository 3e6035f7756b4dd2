use sea_orm_migration::{prelude::*, schema::*};

use super::m20260105_000001_create_user_table::User;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ExpHistory::Table)
                    .if_not_exists()
                    .col(pk_auto(ExpHistory::Id))
                    .col(integer(ExpHistory::UserId))
                    .col(string_len(ExpHistory::ActivityType, 50))
                    .col(big_integer(ExpHistory::Points))
                    .col(string_len(ExpHistory::Description, 255))
                    .col(
                        timestamp_with_time_zone(ExpHistory::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_exp_histories_user_id")
                            .from(ExpHistory::Table, ExpHistory::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::NoAction),
                    )
                    .to_owned(),
            )
            .await?;

        // History is always read per user, newest first
        manager
            .create_index(
                Index::create()
                    .name("idx_exp_histories_user_id_created_at")
                    .table(ExpHistory::Table)
                    .col(ExpHistory::UserId)
                    .col(ExpHistory::CreatedAt)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_exp_histories_user_id_created_at")
                    .table(ExpHistory::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(ExpHistory::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum ExpHistory {
    #[sea_orm(iden = "exp_histories")]
    Table,
    Id,
    UserId,
    ActivityType,
    Points,
    Description,
    CreatedAt,
}
