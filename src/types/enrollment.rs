use entity::enrollment::EnrollmentStatus;
use sea_orm::prelude::DateTimeUtc;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug)]
pub struct REnrollmentCreate {
    pub employee: i32,
    pub option: i32,
}

/// Enrollment row as the frontend has always seen it: bare ids, snake_case
/// `created_at`.
#[derive(Serialize, Deserialize, Debug)]
pub struct EnrollmentRes {
    pub id: i32,
    pub employee: i32,
    pub option: i32,
    pub status: EnrollmentStatus,
    pub created_at: DateTimeUtc,
}

impl From<entity::enrollment::Model> for EnrollmentRes {
    fn from(m: entity::enrollment::Model) -> Self {
        EnrollmentRes {
            id: m.id,
            employee: m.employee_id,
            option: m.option_id,
            status: m.status,
            created_at: m.created_at,
        }
    }
}

#[derive(Deserialize, Debug)]
pub struct EnrollmentListQuery {
    pub status: Option<EnrollmentStatus>,
}
