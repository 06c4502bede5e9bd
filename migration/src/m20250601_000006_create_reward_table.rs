use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Reward::Table)
                    .col(
                        ColumnDef::new(Reward::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key()
                    )
                    .col(
                        ColumnDef::new(Reward::OfficeId)
                            .integer()
                            .not_null()
                    )
                    .col(
                        ColumnDef::new(Reward::Name)
                            .string()
                            .not_null()
                    )
                    .col(
                        ColumnDef::new(Reward::RewardType)
                            .string_len(20)
                            .not_null()
                    )
                    .col(
                        ColumnDef::new(Reward::Description)
                            .text()
                            .not_null()
                            .default("")
                    )
                    .col(
                        ColumnDef::new(Reward::TargetPoints)
                            .integer()
                            .not_null()
                    )
                    .col(
                        ColumnDef::new(Reward::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                    )
                    .to_owned()
            )
            .await?;

        manager
            .alter_table(
                Table::alter()
                    .table(Reward::Table)
                    .add_foreign_key(
                        TableForeignKey::new()
                            .name("fk_reward_office")
                            .from_tbl(Reward::Table)
                            .from_col(Reward::OfficeId)
                            .to_tbl(Office::Table)
                            .to_col(Office::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade)
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_reward_office")
                    .table(Reward::Table)
                    .col(Reward::OfficeId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(
                Table::drop()
                    .table(Reward::Table)
                    .if_exists()
                    .to_owned(),
            )
            .await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
enum Reward {
    Table,
    Id,
    OfficeId,
    Name,
    RewardType,
    Description,
    TargetPoints,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Office {
    Table,
    Id,
}
