use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(CommuteOption::Table)
                    .col(
                        ColumnDef::new(CommuteOption::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key()
                    )
                    .col(
                        ColumnDef::new(CommuteOption::Name)
                            .string()
                            .not_null()
                    )
                    .col(
                        ColumnDef::new(CommuteOption::Description)
                            .text()
                            .not_null()
                            .default("")
                    )
                    .col(
                        ColumnDef::new(CommuteOption::Active)
                            .boolean()
                            .not_null()
                            .default(true)
                    )
                    .col(
                        ColumnDef::new(CommuteOption::MonthlyCostBeforeTax)
                            .double()
                            .not_null()
                    )
                    .col(
                        ColumnDef::new(CommuteOption::MonthlyCostAfterTax)
                            .double()
                            .not_null()
                    )
                    .col(
                        ColumnDef::new(CommuteOption::Co2KgPerMonth)
                            .double()
                            .not_null()
                    )
                    .col(
                        ColumnDef::new(CommuteOption::PointsPerSession)
                            .integer()
                            .not_null()
                    )
                    .col(
                        ColumnDef::new(CommuteOption::CreatedAt)
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
                    .table(CommuteOption::Table)
                    .if_exists()
                    .to_owned(),
            )
            .await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
enum CommuteOption {
    Table,
    Id,
    Name,
    Description,
    Active,
    MonthlyCostBeforeTax,
    MonthlyCostAfterTax,
    Co2KgPerMonth,
    PointsPerSession,
    CreatedAt,
}
