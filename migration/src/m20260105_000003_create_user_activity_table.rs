use sea_orm_migration::{prelude::*, schema::*};

use super::m20260105_000001_create_user_table::User;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // The composite key doubles as the conflict target for the daily
        // counter upsert.
        manager
            .create_table(
                Table::create()
                    .table(UserActivity::Table)
                    .if_not_exists()
                    .col(integer(UserActivity::UserId))
                    .col(string_len(UserActivity::ActivityType, 50))
                    .col(date(UserActivity::ActivityDate))
                    .col(integer(UserActivity::Count).default(0))
                    .col(
                        timestamp_with_time_zone(UserActivity::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp_with_time_zone(UserActivity::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .primary_key(
                        Index::create()
                            .col(UserActivity::UserId)
                            .col(UserActivity::ActivityType)
                            .col(UserActivity::ActivityDate),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_user_activities_user_id")
                            .from(UserActivity::Table, UserActivity::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::NoAction),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(UserActivity::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum UserActivity {
    #[sea_orm(iden = "user_activities")]
    Table,
    UserId,
    ActivityType,
    ActivityDate,
    Count,
    CreatedAt,
    UpdatedAt,
}
