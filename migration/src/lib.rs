pub use sea_orm_migration::prelude::*;

mod m20250601_000001_create_office_table;
mod m20250601_000002_create_commute_option_table;
mod m20250601_000003_create_employee_table;
mod m20250601_000004_create_enrollment_table;
mod m20250601_000005_create_commute_session_table;
mod m20250601_000006_create_reward_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250601_000001_create_office_table::Migration),
            Box::new(m20250601_000002_create_commute_option_table::Migration),
            Box::new(m20250601_000003_create_employee_table::Migration),
            Box::new(m20250601_000004_create_enrollment_table::Migration),
            Box::new(m20250601_000005_create_commute_session_table::Migration),
            Box::new(m20250601_000006_create_reward_table::Migration),
        ]
    }
}
