use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Office::Table)
                    .col(
                        ColumnDef::new(Office::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key()
                    )
                    .col(
                        ColumnDef::new(Office::Name)
                            .string()
                            .not_null()
                    )
                    .col(ColumnDef::new(Office::City).string())
                    .col(ColumnDef::new(Office::Address).string())
                    .col(
                        ColumnDef::new(Office::MonthlyBudget)
                            .double()
                            .not_null()
                    )
                    .col(
                        ColumnDef::new(Office::BaselineMonthlyCost)
                            .double()
                            .not_null()
                    )
                    .col(
                        ColumnDef::new(Office::BaselineCo2Kg)
                            .double()
                            .not_null()
                    )
                    .col(
                        ColumnDef::new(Office::PayrollTaxRate)
                            .double()
                            .not_null()
                    )
                    .col(
                        ColumnDef::new(Office::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                    )
                    .to_owned()
            )
            .await?;
        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(
                Table::drop()
                    .table(Office::Table)
                    .if_exists()
                    .to_owned(),
            )
            .await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
enum Office {
    Table,
    Id,
    Name,
    City,
    Address,
    MonthlyBudget,
    BaselineMonthlyCost,
    BaselineCo2Kg,
    PayrollTaxRate,
    CreatedAt,
}
