use sea_orm_migration::prelude::*;

use crate::database::entities::cloud_configurations::{
    COLOR_MAX_CHARS, DEFAULT_ANIMATION_SPEED, DEFAULT_CLOUD_COUNT, DEFAULT_DAWN_COLOR,
    DEFAULT_SUNRISE_COLOR, DEFAULT_SUNSET_COLOR, NAME_MAX_CHARS,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(CloudConfigurations::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(CloudConfigurations::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(CloudConfigurations::Name)
                            .string_len(NAME_MAX_CHARS as u32)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(CloudConfigurations::CloudCount)
                            .integer()
                            .not_null()
                            .default(DEFAULT_CLOUD_COUNT),
                    )
                    .col(
                        ColumnDef::new(CloudConfigurations::DawnColor)
                            .string_len(COLOR_MAX_CHARS as u32)
                            .not_null()
                            .default(DEFAULT_DAWN_COLOR),
                    )
                    .col(
                        ColumnDef::new(CloudConfigurations::SunriseColor)
                            .string_len(COLOR_MAX_CHARS as u32)
                            .not_null()
                            .default(DEFAULT_SUNRISE_COLOR),
                    )
                    .col(
                        ColumnDef::new(CloudConfigurations::SunsetColor)
                            .string_len(COLOR_MAX_CHARS as u32)
                            .not_null()
                            .default(DEFAULT_SUNSET_COLOR),
                    )
                    .col(
                        ColumnDef::new(CloudConfigurations::AnimationSpeed)
                            .double()
                            .not_null()
                            .default(DEFAULT_ANIMATION_SPEED),
                    )
                    .col(
                        ColumnDef::new(CloudConfigurations::CreatedAt)
                            .timestamp()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(CloudConfigurations::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum CloudConfigurations {
    Table,
    Id,
    Name,
    CloudCount,
    DawnColor,
    SunriseColor,
    SunsetColor,
    AnimationSpeed,
    CreatedAt,
}
