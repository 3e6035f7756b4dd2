use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(LevelConfig::Table)
                    .if_not_exists()
                    .col(pk_auto(LevelConfig::Id))
                    .col(integer_uniq(LevelConfig::Level))
                    .col(big_integer(LevelConfig::MinExp).default(0))
                    .col(string_len(LevelConfig::BadgeName, 100))
                    .col(string_len(LevelConfig::BadgeIcon, 50))
                    .col(
                        timestamp_with_time_zone(LevelConfig::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp_with_time_zone(LevelConfig::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(LevelConfig::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum LevelConfig {
    #[sea_orm(iden = "level_configs")]
    Table,
    Id,
    Level,
    MinExp,
    BadgeName,
    BadgeIcon,
    CreatedAt,
    UpdatedAt,
}
