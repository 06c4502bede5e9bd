pub mod employees;
pub mod enrollments;
pub mod offices;
pub mod options;
pub mod postgres_service;
pub mod rewards;
pub mod sessions;
