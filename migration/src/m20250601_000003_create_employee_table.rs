use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Employee::Table)
                    .col(
                        ColumnDef::new(Employee::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key()
                    )
                    .col(
                        ColumnDef::new(Employee::Name)
                            .string()
                            .not_null()
                    )
                    .col(
                        ColumnDef::new(Employee::Email)
                            .string()
                            .not_null()
                            .unique_key()
                    )
                    .col(ColumnDef::new(Employee::Department).string())
                    .col(
                        ColumnDef::new(Employee::Status)
                            .string()
                            .not_null()
                            .default("active")
                    )
                    .col(ColumnDef::new(Employee::HomePostalCode).string())
                    .col(
                        ColumnDef::new(Employee::Token)
                            .string()
                            .not_null()
                    )
                    .col(ColumnDef::new(Employee::OfficeId).integer())
                    .col(ColumnDef::new(Employee::PreferredOptionId).integer())
                    .col(
                        ColumnDef::new(Employee::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                    )
                    .col(
                        ColumnDef::new(Employee::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                    )
                    .to_owned()
            )
            .await?;

        manager
            .alter_table(
                Table::alter()
                    .table(Employee::Table)
                    .add_foreign_key(
                        TableForeignKey::new()
                            .name("fk_employee_office")
                            .from_tbl(Employee::Table)
                            .from_col(Employee::OfficeId)
                            .to_tbl(Office::Table)
                            .to_col(Office::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade)
                    )
                    .add_foreign_key(
                        TableForeignKey::new()
                            .name("fk_employee_preferred_option")
                            .from_tbl(Employee::Table)
                            .from_col(Employee::PreferredOptionId)
                            .to_tbl(CommuteOption::Table)
                            .to_col(CommuteOption::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade)
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_employee_office")
                    .table(Employee::Table)
                    .col(Employee::OfficeId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_employee_department")
                    .table(Employee::Table)
                    .col(Employee::Department)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(
                Table::drop()
                    .table(Employee::Table)
                    .if_exists()
                    .to_owned(),
            )
            .await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
enum Employee {
    Table,
    Id,
    Name,
    Email,
    Department,
    Status,
    HomePostalCode,
    Token,
    OfficeId,
    PreferredOptionId,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Office {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum CommuteOption {
    Table,
    Id,
}
