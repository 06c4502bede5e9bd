use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Enrollment::Table)
                    .col(
                        ColumnDef::new(Enrollment::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key()
                    )
                    .col(
                        ColumnDef::new(Enrollment::EmployeeId)
                            .integer()
                            .not_null()
                    )
                    .col(
                        ColumnDef::new(Enrollment::OptionId)
                            .integer()
                            .not_null()
                    )
                    .col(
                        ColumnDef::new(Enrollment::Status)
                            .string_len(20)
                            .not_null()
                            .default("active")
                    )
                    .col(
                        ColumnDef::new(Enrollment::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                    )
                    .to_owned()
            )
            .await?;

        manager
            .alter_table(
                Table::alter()
                    .table(Enrollment::Table)
                    .add_foreign_key(
                        TableForeignKey::new()
                            .name("fk_enrollment_employee")
                            .from_tbl(Enrollment::Table)
                            .from_col(Enrollment::EmployeeId)
                            .to_tbl(Employee::Table)
                            .to_col(Employee::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade)
                    )
                    .add_foreign_key(
                        TableForeignKey::new()
                            .name("fk_enrollment_option")
                            .from_tbl(Enrollment::Table)
                            .from_col(Enrollment::OptionId)
                            .to_tbl(CommuteOption::Table)
                            .to_col(CommuteOption::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade)
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_enrollment_employee")
                    .table(Enrollment::Table)
                    .col(Enrollment::EmployeeId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_enrollment_status")
                    .table(Enrollment::Table)
                    .col(Enrollment::Status)
                    .to_owned(),
            )
            .await?;

        // Partial unique index: at most one active enrollment per
        // (employee, option). The index builder cannot express the WHERE
        // condition, so raw SQL it is.
        manager.get_connection().execute_unprepared(
            r#"
            CREATE UNIQUE INDEX uniq_active_enrollment_per_option
            ON enrollment (employee_id, option_id)
            WHERE status = 'active';
            "#,
        ).await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(
                Table::drop()
                    .table(Enrollment::Table)
                    .if_exists()
                    .to_owned(),
            )
            .await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
enum Enrollment {
    Table,
    Id,
    EmployeeId,
    OptionId,
    Status,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Employee {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum CommuteOption {
    Table,
    Id,
}
