use entity::commute_session::SessionStatus;
use serde::{Deserialize, Serialize};

/// Points a finished session awards when the employee has no preferred
/// option to price it from.
pub const FALLBACK_SESSION_POINTS: i32 = 35;

#[derive(Serialize, Deserialize, Debug)]
pub struct StartSessionRes {
    pub id: i32,
    pub status: SessionStatus,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct FinishSessionRes {
    pub id: i32,
    pub status: SessionStatus,
    pub points: i32,
}
