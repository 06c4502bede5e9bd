use fleet_commute::db::postgres_service::PostgresService;
use std::sync::Arc;
use testcontainers::{runners::AsyncRunner, ContainerAsync};
use testcontainers_modules::postgres::Postgres;

pub struct TestContext {
    pub db: Arc<PostgresService>,
    pub _container: ContainerAsync<Postgres>,
}

impl TestContext {
    pub async fn new() -> TestContext {
        let postgres = Postgres::default();
        let container = postgres
            .start()
            .await
            .expect("Failed to start postgres container");

        let host = container.get_host().await.expect("Failed to get host");
        let port = container
            .get_host_port_ipv4(5432)
            .await
            .expect("Failed to get port");

        let db_url = format!("postgresql://postgres:postgres@{}:{}/postgres", host, port);

        let db = Arc::new(
            PostgresService::new(&db_url)
                .await
                .expect("Failed to initialize PostgresService"),
        );

        TestContext {
            db,
            _container: container,
        }
    }
}

// Fixture helpers shared by the flow tests.
pub mod fixtures {
    use entity::reward::RewardType;
    use fleet_commute::db::postgres_service::PostgresService;
    use fleet_commute::types::employee::DBEmployeeCreate;
    use fleet_commute::types::office::DBOfficeCreate;
    use fleet_commute::types::option::DBOptionCreate;
    use fleet_commute::types::token::TokenType;
    use fleet_commute::utils::token::{encrypt, new_token};

    pub async fn sample_office(db: &PostgresService) -> i32 {
        db.create_office(DBOfficeCreate {
            name: "Toronto HQ".to_string(),
            city: Some("Toronto".to_string()),
            address: Some("100 King St W".to_string()),
            monthly_budget: 10_000.0,
            baseline_monthly_cost: 450.0,
            baseline_co2_kg: 220.0,
            payroll_tax_rate: 7.65,
        })
        .await
        .expect("Failed to create office")
    }

    pub async fn sample_employee(
        db: &PostgresService,
        email: &str,
        department: Option<&str>,
        office_id: Option<i32>,
    ) -> i32 {
        let token = new_token(TokenType::Employee);
        let encrypted = encrypt(&token).expect("Failed to encrypt token");
        db.create_employee(DBEmployeeCreate {
            name: format!("Employee <{email}>"),
            email: email.to_string(),
            department: department.map(|d| d.to_string()),
            home_postal_code: None,
            office_id,
            token: encrypted,
        })
        .await
        .expect("Failed to create employee")
    }

    pub async fn sample_option(
        db: &PostgresService,
        name: &str,
        cost_before_tax: f64,
        co2_kg: f64,
        points: i32,
        active: bool,
    ) -> i32 {
        db.create_option(DBOptionCreate {
            name: name.to_string(),
            description: format!("{name} to the office"),
            active,
            monthly_cost_before_tax: cost_before_tax,
            monthly_cost_after_tax: cost_before_tax * 0.7,
            co2_kg_per_month: co2_kg,
            points_per_session: points,
        })
        .await
        .expect("Failed to create option")
    }

    pub async fn sample_reward(db: &PostgresService, office_id: i32, target_points: i32) -> i32 {
        db.create_reward(
            office_id,
            "Team lunch".to_string(),
            RewardType::Team,
            "Hit the office points target".to_string(),
            target_points,
        )
        .await
        .expect("Failed to create reward")
    }
}
