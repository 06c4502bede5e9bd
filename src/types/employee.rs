use serde::{Deserialize, Serialize};

/// Service-layer payload: request fields plus the already-hashed api key.
#[derive(Serialize, Deserialize)]
pub struct DBEmployeeCreate {
    pub name: String,
    pub email: String,
    pub department: Option<String>,
    pub home_postal_code: Option<String>,
    pub office_id: Option<i32>,
    pub token: String,
}

/// Request body for provisioning an employee (admin only).
#[derive(Serialize, Deserialize, Debug)]
pub struct REmployeeCreate {
    pub name: String,
    pub email: String,
    pub department: Option<String>,
    pub home_postal_code: Option<String>,
    pub office_id: Option<i32>,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct EmployeeCreateRes {
    pub id: i32,
    pub token: String,
}

/// List-endpoint row; the wire contract predates this service, so the field
/// names stay as-is rather than camelCase.
#[derive(Serialize, Deserialize, Debug)]
pub struct EmployeeRes {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub department: Option<String>,
    pub status: String,
}

impl From<entity::employee::Model> for EmployeeRes {
    fn from(m: entity::employee::Model) -> Self {
        EmployeeRes {
            id: m.id,
            name: m.name,
            email: m.email,
            department: m.department,
            status: m.status,
        }
    }
}

#[derive(Deserialize, Debug)]
pub struct EmployeeListQuery {
    pub department: Option<String>,
    pub page: Option<u64>,
    pub page_size: Option<u64>,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct PageRes<T> {
    pub count: u64,
    pub results: Vec<T>,
}
