use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(CommuteSession::Table)
                    .col(
                        ColumnDef::new(CommuteSession::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key()
                    )
                    .col(
                        ColumnDef::new(CommuteSession::EmployeeId)
                            .integer()
                            .not_null()
                    )
                    .col(
                        ColumnDef::new(CommuteSession::Date)
                            .date()
                            .not_null()
                    )
                    .col(
                        ColumnDef::new(CommuteSession::Status)
                            .string_len(20)
                            .not_null()
                            .default("in_progress")
                    )
                    .col(
                        ColumnDef::new(CommuteSession::PointsEarned)
                            .integer()
                            .not_null()
                            .default(0)
                    )
                    .col(
                        ColumnDef::new(CommuteSession::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                    )
                    .to_owned()
            )
            .await?;

        manager
            .alter_table(
                Table::alter()
                    .table(CommuteSession::Table)
                    .add_foreign_key(
                        TableForeignKey::new()
                            .name("fk_commute_session_employee")
                            .from_tbl(CommuteSession::Table)
                            .from_col(CommuteSession::EmployeeId)
                            .to_tbl(Employee::Table)
                            .to_col(Employee::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade)
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_commute_session_employee")
                    .table(CommuteSession::Table)
                    .col(CommuteSession::EmployeeId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_commute_session_date_status")
                    .table(CommuteSession::Table)
                    .col(CommuteSession::Date)
                    .col(CommuteSession::Status)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(
                Table::drop()
                    .table(CommuteSession::Table)
                    .if_exists()
                    .to_owned(),
            )
            .await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
enum CommuteSession {
    Table,
    Id,
    EmployeeId,
    Date,
    Status,
    PointsEarned,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Employee {
    Table,
    Id,
}
